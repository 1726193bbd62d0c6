//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::LinkRepository;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: Reports the number of stored links
/// 2. **Log Queue**: Checks if the remote log channel is open and reports
///    free capacity; reported as disabled when remote logging is off
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": {
///       "status": "ok",
///       "message": "3 links stored"
///     },
///     "log_queue": {
///       "status": "ok",
///       "message": "Capacity: 1000"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state).await;

    let queue_check = check_log_queue(&state);

    let all_healthy = registry_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
            log_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_registry(state: &AppState) -> CheckStatus {
    match state.link_repository.count().await {
        Ok(count) => CheckStatus::ok(format!("{count} links stored")),
        Err(e) => CheckStatus::error(format!("Registry error: {e}")),
    }
}

/// Checks if the remote log queue is operational.
fn check_log_queue(state: &AppState) -> CheckStatus {
    match state.events.queue_status() {
        None => CheckStatus::ok("Remote logging disabled"),
        Some((true, _)) => CheckStatus::error("Log queue is closed"),
        Some((false, capacity)) => CheckStatus::ok(format!("Capacity: {capacity}")),
    }
}

//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::stats::StatsResponse;
use crate::api::dto::stats_list::LinkStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves detailed statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// Returns link metadata, total click count, and every recorded click
/// (oldest first). Expired links are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.stats_service.detail(&code).await?;

    let status = if record.is_expired_at(Utc::now()) {
        LinkStatus::Expired
    } else {
        LinkStatus::Active
    };

    Ok(Json(StatsResponse {
        short_url: record.short_code.url(&state.base_url),
        code: record.id,
        long_url: record.long_url,
        created_at: record.created_at,
        expires_at: record.expires_at,
        status,
        total: record.clicks.len(),
        items: record.clicks.into_iter().map(ClickInfo::from).collect(),
    }))
}

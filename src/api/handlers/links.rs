//! Handler for link removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Removes a short link and its click history.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// - The record is removed from the registry immediately.
/// - Subsequent redirects for this code go to `/not-found`.
/// - The code becomes available for new links.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.link_service.delete_link(&code).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Link not found",
            json!({ "code": code }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

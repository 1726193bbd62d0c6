//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse, ShortenedLink};
use crate::application::services::LinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates shortened URLs for one to five long URLs.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Batch Processing
///
/// The batch is all-or-nothing. Every row is validated; if any row fails,
/// nothing is stored and all row errors are returned together.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     {
///       "url": "https://example.com",
///       "custom_code": "promo",  // optional, at least 3 characters
///       "validity": 30            // optional, minutes (number or string)
///     }
///   ]
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "items": [
///     {
///       "code": "promo",
///       "long_url": "https://example.com",
///       "short_url": "http://localhost:3000/promo",
///       "created_at": "2025-01-01T12:00:00Z",
///       "expires_at": "2025-01-01T12:30:00Z"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `details.errors` listing each failed row
/// (`"Row 2: Shortcode 'promo' already exists"`), or when the batch is empty
/// or has more than five rows.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let rows = payload.urls.into_iter().map(LinkRequest::from).collect();

    let records = state.link_service.create_batch(rows).await?;

    let items = records
        .into_iter()
        .map(|record| ShortenedLink::from_record(record, &state.base_url))
        .collect();

    Ok((StatusCode::CREATED, Json(ShortenResponse { items })))
}

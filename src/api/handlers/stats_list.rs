//! Handler for aggregated link statistics.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

use crate::api::dto::stats_list::{LinkStatsItem, StatsListResponse, StatsQueryParams};
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves registry-wide counters and per-link statistics.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Query Parameters
///
/// - `search` (optional): Case-insensitive substring of the long URL or code
///
/// # Response
///
/// ```json
/// {
///   "summary": {
///     "total_urls": 3,
///     "total_clicks": 7,
///     "active_urls": 2,
///     "expired_urls": 1
///   },
///   "showing": 1,
///   "items": [
///     {
///       "code": "promo",
///       "long_url": "https://shop.example.com/sale",
///       "short_url": "http://localhost:3000/promo",
///       "created_at": "2025-01-01T12:00:00Z",
///       "expires_at": "2025-01-01T12:30:00Z",
///       "status": "active",
///       "clicks": 2
///     }
///   ]
/// }
/// ```
///
/// The summary always covers the whole registry; only `items` is filtered.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    Query(params): Query<StatsQueryParams>,
) -> Result<Json<StatsListResponse>, AppError> {
    let now = Utc::now();
    let term = params.search.unwrap_or_default();

    let overview = state.stats_service.overview_at(&term, now).await?;

    let items: Vec<LinkStatsItem> = overview
        .records
        .iter()
        .map(|record| LinkStatsItem::from_record(record, &state.base_url, now))
        .collect();

    Ok(Json(StatsListResponse {
        summary: overview.summary,
        showing: items.len(),
        items,
    }))
}

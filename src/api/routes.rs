//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, shorten_handler, stats_handler, stats_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a batch of short links
/// - `GET    /stats`          - Summary and per-link statistics (`?search=`)
/// - `GET    /stats/{code}`   - Detailed statistics for a specific link
/// - `DELETE /links/{code}`   - Remove a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links/{code}", delete(delete_link_handler))
}

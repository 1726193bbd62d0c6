//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::not_found_handler;
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /not-found` - Target of failed redirects
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/not-found", get(not_found_handler))
}

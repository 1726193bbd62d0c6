//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check: registry, log queue
//! - `GET  /not-found`   - Page shown for unknown or expired links
//! - `/api/*`            - REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with request tracing, before path normalization.
///
/// `/not-found` and `/health` are static segments, so they take precedence
/// over the `/{code}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(web::routes::public_routes())
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

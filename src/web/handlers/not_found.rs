//! Page shown for unknown or expired short links.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

/// Template for the link-not-found page.
///
/// Renders `templates/not_found.html`.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: &'static str,
    pub message: &'static str,
    pub home_url: String,
}

impl NotFoundTemplate {
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            title: "404: Link Not Found",
            message: "The shortened URL you're looking for doesn't exist or has expired.",
            home_url: home_url.into(),
        }
    }
}

/// Renders the not-found page.
///
/// # Endpoint
///
/// `GET /not-found`
///
/// Answers with `404 Not Found` so clients following a failed redirect see
/// a failure status.
pub async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate::new(format!("{}/", state.base_url)),
    )
}

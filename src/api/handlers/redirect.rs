//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};

use crate::application::services::{Resolution, Visitor};
use crate::domain::entities::ShortCode;
use crate::error::AppError;
use crate::state::AppState;

/// Path of the page shown for unknown or expired links.
pub const NOT_FOUND_PATH: &str = "/not-found";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Parse the path segment as a short code
/// 2. Look the code up in the registry
/// 3. Reject expired links
/// 4. Record a click with `User-Agent` and `Referer`
/// 5. Return 307 Temporary Redirect
///
/// # Failure Handling
///
/// Unknown, expired and malformed codes all answer `303 See Other` to
/// `/not-found`; the reason is only visible in the logs.
///
/// # Errors
///
/// Returns 500 Internal Server Error only if the registry fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let Ok(code) = ShortCode::parse(&code) else {
        tracing::debug!(code = %code, "Rejected malformed short code");
        return Ok(Redirect::to(NOT_FOUND_PATH));
    };

    let visitor = Visitor {
        user_agent: header_value(&headers, header::USER_AGENT),
        referrer: header_value(&headers, header::REFERER),
    };

    let redirect = match state.redirect_service.resolve(&code, visitor).await? {
        Resolution::Redirect(long_url) => Redirect::temporary(&long_url),
        Resolution::NotFound | Resolution::Expired => Redirect::to(NOT_FOUND_PATH),
    };

    Ok(redirect)
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

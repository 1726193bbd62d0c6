//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Referrer recorded when the request carries no `Referer` header.
pub const DIRECT_REFERRER: &str = "direct";

/// User agent recorded when the request carries no `User-Agent` header.
pub const UNKNOWN_USER_AGENT: &str = "unknown";

/// A click recorded when a short link is resolved to its target.
///
/// Clicks are appended to their [`crate::domain::entities::UrlRecord`] in
/// chronological order and are never removed individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub referrer: String,
}

impl ClickEvent {
    /// Creates a click event, substituting sentinels for missing client data.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = ClickEvent::new(Utc::now(), Some("Mozilla/5.0"), None);
    /// assert_eq!(click.referrer, "direct");
    /// ```
    pub fn new(
        timestamp: DateTime<Utc>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Self {
        Self {
            timestamp,
            user_agent: user_agent
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_USER_AGENT)
                .to_string(),
            referrer: referrer
                .filter(|s| !s.is_empty())
                .unwrap_or(DIRECT_REFERRER)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_creation_with_all_fields() {
        let now = Utc::now();
        let click = ClickEvent::new(now, Some("Mozilla/5.0"), Some("https://google.com"));

        assert_eq!(click.timestamp, now);
        assert_eq!(click.user_agent, "Mozilla/5.0");
        assert_eq!(click.referrer, "https://google.com");
    }

    #[test]
    fn test_click_without_referrer_is_direct() {
        let click = ClickEvent::new(Utc::now(), Some("curl/8.0"), None);
        assert_eq!(click.referrer, DIRECT_REFERRER);
    }

    #[test]
    fn test_click_with_empty_headers_uses_sentinels() {
        let click = ClickEvent::new(Utc::now(), Some(""), Some(""));
        assert_eq!(click.user_agent, UNKNOWN_USER_AGENT);
        assert_eq!(click.referrer, DIRECT_REFERRER);
    }
}

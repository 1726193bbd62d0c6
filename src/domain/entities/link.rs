//! URL record entity representing a shortened link and its clicks.

use chrono::{DateTime, Utc};

use super::click::ClickEvent;
use super::short_code::ShortCode;

/// A shortened URL held in the registry.
///
/// `id` equals the short code. All fields except `clicks` are fixed at
/// creation time; `clicks` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: String,
    pub long_url: String,
    pub short_code: ShortCode,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: Vec<ClickEvent>,
}

impl UrlRecord {
    /// Creates a record with no clicks.
    pub fn new(
        short_code: ShortCode,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: short_code.as_str().to_string(),
            long_url,
            short_code,
            created_at,
            expires_at,
            clicks: Vec::new(),
        }
    }

    /// Returns true once `now` is strictly past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }
}

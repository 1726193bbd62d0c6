//! DTOs for aggregated link statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::StatsSummary;
use crate::domain::entities::UrlRecord;

/// Query parameters for the statistics list.
#[derive(Debug, Default, Deserialize)]
pub struct StatsQueryParams {
    /// Case-insensitive substring matched against long URLs and codes.
    #[serde(default)]
    pub search: Option<String>,
}

/// Registry-wide summary plus the links matching the search term.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub summary: StatsSummary,
    /// Number of items returned after filtering.
    pub showing: usize,
    pub items: Vec<LinkStatsItem>,
}

/// Whether a link still redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Active,
    Expired,
}

/// Statistics for a single link.
#[derive(Debug, Serialize)]
pub struct LinkStatsItem {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: LinkStatus,
    pub clicks: usize,
}

impl LinkStatsItem {
    pub fn from_record(record: &UrlRecord, base_url: &str, now: DateTime<Utc>) -> Self {
        let status = if record.is_expired_at(now) {
            LinkStatus::Expired
        } else {
            LinkStatus::Active
        };

        Self {
            code: record.id.clone(),
            long_url: record.long_url.clone(),
            short_url: record.short_code.url(base_url),
            created_at: record.created_at,
            expires_at: record.expires_at,
            status,
            clicks: record.click_count(),
        }
    }
}

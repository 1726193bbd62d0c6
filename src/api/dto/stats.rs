//! DTOs for detailed link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use super::stats_list::LinkStatus;

/// Detailed statistics for a specific short link.
///
/// Includes link metadata, total click count, and every click in order.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: LinkStatus,
    pub total: usize,
    pub items: Vec<ClickInfo>,
}

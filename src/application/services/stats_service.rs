//! Click statistics and analytics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Registry-wide counters.
///
/// `active_urls + expired_urls == total_urls` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_urls: usize,
    pub total_clicks: usize,
    pub active_urls: usize,
    pub expired_urls: usize,
}

impl StatsSummary {
    /// Derives the counters from a set of records as of `now`.
    pub fn from_records(records: &[UrlRecord], now: DateTime<Utc>) -> Self {
        let total_urls = records.len();
        let total_clicks = records.iter().map(UrlRecord::click_count).sum();
        let active_urls = records.iter().filter(|r| !r.is_expired_at(now)).count();

        Self {
            total_urls,
            total_clicks,
            active_urls,
            expired_urls: total_urls - active_urls,
        }
    }
}

/// Summary plus the records matching a search term.
#[derive(Debug, Clone)]
pub struct StatsOverview {
    pub summary: StatsSummary,
    pub records: Vec<UrlRecord>,
}

/// Read-only analytics over the registry.
///
/// Everything here is derived on demand; nothing is stored and the registry
/// is never modified.
pub struct StatsService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> StatsService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Computes the registry-wide counters as of `now`.
    pub async fn summary_at(&self, now: DateTime<Utc>) -> Result<StatsSummary, AppError> {
        let records = self.link_repository.list().await?;
        Ok(StatsSummary::from_records(&records, now))
    }

    /// Returns records whose long URL or short code contains `term`,
    /// ignoring case. An empty term matches everything.
    pub async fn search(&self, term: &str) -> Result<Vec<UrlRecord>, AppError> {
        let records = self.link_repository.list().await?;
        Ok(filter_records(records, term))
    }

    /// Summary over the whole registry plus the filtered records, taken from
    /// one snapshot so both agree.
    pub async fn overview_at(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<StatsOverview, AppError> {
        let records = self.link_repository.list().await?;
        let summary = StatsSummary::from_records(&records, now);

        Ok(StatsOverview {
            summary,
            records: filter_records(records, term),
        })
    }

    /// Retrieves one record with its full click history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn detail(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }
}

fn filter_records(records: Vec<UrlRecord>, term: &str) -> Vec<UrlRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|r| {
            r.long_url.to_lowercase().contains(&needle)
                || r.short_code.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

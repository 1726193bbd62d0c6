#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use snaplink::domain::entities::{ShortCode, UrlRecord};
use snaplink::domain::event_logger::EventLogger;
use snaplink::domain::log_event::LogEntry;
use snaplink::domain::repositories::LinkRepository;
use snaplink::infrastructure::persistence::InMemoryLinkRepository;
use snaplink::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state() -> (AppState, mpsc::Receiver<LogEntry>) {
    let (tx, rx) = mpsc::channel(100);

    let link_repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(link_repository, EventLogger::new(tx), BASE_URL, 30);

    (state, rx)
}

pub fn test_record(code: &str, url: &str, created_at: DateTime<Utc>, ttl: Duration) -> UrlRecord {
    UrlRecord::new(
        ShortCode::parse(code).unwrap(),
        url.to_string(),
        created_at,
        created_at + ttl,
    )
}

pub async fn create_test_link(state: &AppState, code: &str, url: &str) -> UrlRecord {
    let record = test_record(code, url, Utc::now(), Duration::minutes(30));
    state
        .link_repository
        .add_many(vec![record.clone()])
        .await
        .unwrap();
    record
}

pub async fn create_expired_link(state: &AppState, code: &str, url: &str) -> UrlRecord {
    let record = test_record(
        code,
        url,
        Utc::now() - Duration::hours(2),
        Duration::minutes(30),
    );
    state
        .link_repository
        .add_many(vec![record.clone()])
        .await
        .unwrap();
    record
}

/// Drains every entry currently queued for the log worker.
pub fn drain_log(rx: &mut mpsc::Receiver<LogEntry>) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    while let Ok(entry) = rx.try_recv() {
        entries.push(entry);
    }
    entries
}

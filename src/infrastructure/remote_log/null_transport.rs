//! No-op log transport used when no collector is configured.

use super::service::{LogTransport, TransportResult};
use crate::domain::log_event::LogEntry;
use async_trait::async_trait;
use tracing::debug;

/// A transport that drops every entry.
///
/// Used when `LOG_ENDPOINT` is not set. Entries still reach the local
/// `tracing` output through [`crate::domain::event_logger::EventLogger`].
pub struct NullLogTransport;

impl NullLogTransport {
    pub fn new() -> Self {
        debug!("Using NullLogTransport (remote logging disabled)");
        Self
    }
}

impl Default for NullLogTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogTransport for NullLogTransport {
    async fn send(&self, _entry: &LogEntry) -> TransportResult<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

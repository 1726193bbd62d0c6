//! Log transport trait and error types.

use async_trait::async_trait;

use crate::domain::log_event::LogEntry;

/// Errors that can occur while delivering an entry to the collector.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Log collector unreachable: {0}")]
    Network(String),

    #[error("Log collector rejected entry with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Delivers log entries to a remote collector.
///
/// Callers treat every error as non-fatal: the log worker reports it through
/// `tracing` and moves on to the next entry.
///
/// # Implementations
///
/// - [`crate::infrastructure::remote_log::HttpLogTransport`] - HTTP POST with bearer token
/// - [`crate::infrastructure::remote_log::NullLogTransport`] - Discards entries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogTransport: Send + Sync {
    /// Sends one entry.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the request could not be made and
    /// [`TransportError::Rejected`] for non-2xx responses.
    async fn send(&self, entry: &LogEntry) -> TransportResult<()>;

    /// Returns true if entries actually leave the process.
    fn is_enabled(&self) -> bool;
}

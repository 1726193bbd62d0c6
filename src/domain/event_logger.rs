//! Fire-and-forget handle for emitting structured application events.

use tokio::sync::mpsc::{self, error::TrySendError};

use super::log_event::{LogEntry, LogLevel, LogPackage};

/// Cloneable handle used by services and handlers to emit events.
///
/// Every event is written to the local `tracing` output and, when remote
/// logging is enabled, queued for the background log worker with
/// `try_send`. The caller never waits on delivery and never learns whether it
/// succeeded; a full or closed queue drops the entry.
///
/// # Usage Flow
///
/// 1. A service calls [`EventLogger::log`]
/// 2. The entry is mirrored to `tracing` and pushed onto the channel
/// 3. [`crate::domain::log_worker::run_log_worker`] posts it to the collector
#[derive(Debug, Clone)]
pub struct EventLogger {
    sender: Option<mpsc::Sender<LogEntry>>,
}

impl EventLogger {
    /// Creates a logger that forwards entries to the log worker.
    pub fn new(sender: mpsc::Sender<LogEntry>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Creates a logger that only writes to `tracing`.
    pub fn local_only() -> Self {
        Self { sender: None }
    }

    /// Emits a backend event.
    pub fn log(&self, level: LogLevel, package: LogPackage, message: impl Into<String>) {
        let entry = LogEntry::backend(level, package, message);

        match entry.level {
            LogLevel::Debug => tracing::debug!(package = %entry.package, "{}", entry.message),
            LogLevel::Info => tracing::info!(package = %entry.package, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(package = %entry.package, "{}", entry.message),
            LogLevel::Error => tracing::error!(package = %entry.package, "{}", entry.message),
            LogLevel::Fatal => {
                tracing::error!(package = %entry.package, fatal = true, "{}", entry.message)
            }
        }

        let Some(sender) = &self.sender else {
            return;
        };

        match sender.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::debug!("Log queue full, entry dropped"),
            Err(TrySendError::Closed(_)) => tracing::debug!("Log queue closed, entry dropped"),
        }
    }

    pub fn info(&self, package: LogPackage, message: impl Into<String>) {
        self.log(LogLevel::Info, package, message);
    }

    pub fn warn(&self, package: LogPackage, message: impl Into<String>) {
        self.log(LogLevel::Warn, package, message);
    }

    pub fn error(&self, package: LogPackage, message: impl Into<String>) {
        self.log(LogLevel::Error, package, message);
    }

    /// Returns true if entries are forwarded to a log worker.
    pub fn is_remote(&self) -> bool {
        self.sender.is_some()
    }

    /// Returns `(closed, free_capacity)` of the queue, if there is one.
    pub fn queue_status(&self) -> Option<(bool, usize)> {
        self.sender
            .as_ref()
            .map(|sender| (sender.is_closed(), sender.capacity()))
    }
}

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::log_event::LogEntry;
use crate::infrastructure::remote_log::LogTransport;

/// Drains the log queue and delivers each entry to the collector.
///
/// Delivery failures are reported through `tracing` and never retried. The
/// worker exits once every [`crate::domain::event_logger::EventLogger`]
/// holding the sender has been dropped.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEntry>, transport: Arc<dyn LogTransport>) {
    while let Some(entry) = rx.recv().await {
        if let Err(e) = transport.send(&entry).await {
            warn!(error = %e, package = %entry.package, "Failed to send log entry");
        }
    }

    debug!("Log worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::log_event::{LogLevel, LogPackage};
    use crate::infrastructure::remote_log::{MockLogTransport, TransportError};

    #[tokio::test]
    async fn test_worker_delivers_every_entry_and_ignores_failures() {
        let mut transport = MockLogTransport::new();
        let mut calls = 0;
        transport.expect_send().times(3).returning(move |_| {
            calls += 1;
            if calls == 2 {
                Err(TransportError::Rejected {
                    status: 401,
                    body: "unauthorized".to_string(),
                })
            } else {
                Ok(())
            }
        });

        let (tx, rx) = mpsc::channel(8);
        for i in 0..3 {
            tx.send(LogEntry::backend(LogLevel::Info, LogPackage::Api, format!("entry {i}")))
                .await
                .unwrap();
        }
        drop(tx);

        run_log_worker(rx, Arc::new(transport)).await;
    }

    #[tokio::test]
    async fn test_worker_passes_entry_unchanged() {
        let mut transport = MockLogTransport::new();
        transport
            .expect_send()
            .withf(|entry| entry.message == "hello" && entry.level == LogLevel::Debug)
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(1);
        tx.send(LogEntry::backend(LogLevel::Debug, LogPackage::Utils, "hello"))
            .await
            .unwrap();
        drop(tx);

        run_log_worker(rx, Arc::new(transport)).await;
    }
}

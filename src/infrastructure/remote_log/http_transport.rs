//! HTTP log transport posting JSON entries to the collector.

use super::service::{LogTransport, TransportError, TransportResult};
use crate::domain::log_event::LogEntry;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::debug;

/// Posts each entry as JSON with an `Authorization: Bearer` header.
pub struct HttpLogTransport {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpLogTransport {
    /// Builds a transport with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the HTTP client cannot be built.
    pub fn new(endpoint: String, token: String, timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl LogTransport for HttpLogTransport {
    async fn send(&self, entry: &LogEntry) -> TransportResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(entry)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Log entry delivered");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

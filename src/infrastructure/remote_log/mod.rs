//! Remote log sink.
//!
//! Provides a [`LogTransport`] trait with two implementations:
//! - [`HttpLogTransport`] - Posts entries to the configured collector
//! - [`NullLogTransport`] - No-op implementation when no collector is configured

mod http_transport;
mod null_transport;
mod service;

pub use http_transport::HttpLogTransport;
pub use null_transport::NullLogTransport;
pub use service::{LogTransport, TransportError, TransportResult};

#[cfg(test)]
pub use service::MockLogTransport;

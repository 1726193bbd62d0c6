//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Trace layer type produced by [`layer`].
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying method, URI and version. The
/// response is logged at `INFO` with status and latency in milliseconds;
/// 5xx responses are additionally logged at `ERROR`.
///
/// ```text
/// INFO request{method=GET uri=/promo version=HTTP/1.1}: finished processing request latency=0 ms status=307
/// ```
///
/// Request bodies and headers are never logged, so `User-Agent` and
/// `Referer` only appear in click records.
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

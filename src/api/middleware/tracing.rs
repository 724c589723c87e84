//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with method, URI and HTTP version and
/// logs the request at `DEBUG`.
///
/// **On Response:** logs status code and latency in milliseconds at `INFO`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/short-it/gh version=HTTP/1.1}: finished processing request latency=0 ms status=307
/// INFO request{method=GET uri=/unknown version=HTTP/1.1}: finished processing request latency=0 ms status=404
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `function_invocations_total` (counter): invocations by function, outcome
//! - `function_duration_seconds` (histogram): handler latency by function

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one function invocation.
pub fn record_invocation(function: &'static str, is_error: bool, start: Instant) {
    let outcome = if is_error { "error" } else { "ok" };
    metrics::counter!("function_invocations_total", "function" => function, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("function_duration_seconds", "function" => function)
        .record(start.elapsed().as_secs_f64());
}

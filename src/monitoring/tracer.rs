/*!
 * Structured Tracing
 * Subscriber setup for the benchmark driver using the tracing crate
 */

use crate::core::limits::ENV_TRACE_JSON;
use std::time::{Duration, Instant};
use tracing::{debug, info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - REGION_BENCH_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr so the report on stdout stays machine-readable.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    // try_init: tests and benches may install a subscriber more than once
    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if result.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Span around one timed benchmark phase
///
/// Measures wall time itself so the caller gets the same duration that
/// ends up in the log.
pub struct PhaseSpan {
    span: Span,
    start: Instant,
}

impl PhaseSpan {
    pub fn new(strategy: &'static str, phase: &'static str) -> Self {
        let span = span!(Level::DEBUG, "phase", strategy, phase);
        debug!(parent: &span, "Phase started");
        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Stop the clock and log the elapsed time
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        debug!(
            parent: &self.span,
            elapsed_us = elapsed.as_micros() as u64,
            "Phase finished"
        );
        elapsed
    }
}

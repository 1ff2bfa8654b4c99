/*!
 * Tracing Setup
 * Structured logging for simulation runs using the tracing crate
 */

use std::time::Instant;
use tracing::{debug, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Runs slower than this are reported at warn level
const SLOW_RUN_MILLIS: u128 = 100;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let use_json = std::env::var("SCHED_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if try_init_tracing(use_json).is_err() {
        warn!("Tracing subscriber already installed");
    }
}

/// Install the subscriber, failing if one is already set
pub fn try_init_tracing(use_json: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for log processing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    }
}

/// Span covering one simulation request, timed on drop
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    label: String,
}

impl SimulationSpan {
    pub fn new(label: impl Into<String>, processes: usize) -> Self {
        let label = label.into();
        let span = span!(
            Level::DEBUG,
            "simulation",
            label = %label,
            processes = processes,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            label,
        }
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);
        let _entered = self.span.enter();

        if duration.as_millis() > SLOW_RUN_MILLIS {
            warn!(
                label = %self.label,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow simulation"
            );
        } else {
            debug!(
                label = %self.label,
                duration_us = duration.as_micros() as u64,
                "simulation finished"
            );
        }
    }
}

//! Logging utilities for forecast-strip.
//!
//! The library only emits `tracing` events; hosts that want them on stderr
//! call [`init_tracing`] once at startup. Each render pass runs inside a
//! `render_pass` span carrying a fresh pass id, so the aggregation and
//! gradient events it emits can be told apart between passes.

use std::time::Instant;
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::error::{ForecastStripError, Result};
use crate::forecast::BucketMode;

/// Install a stderr subscriber filtered at `log_level`.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`. Fails when the
/// filter does not parse or a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    let filter = EnvFilter::try_new(&directives).map_err(|e| ForecastStripError::Config {
        message: format!("Invalid log filter {directives:?}: {e}"),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ForecastStripError::Config {
            message: format!("Tracing subscriber already installed: {e}"),
        })
}

/// Run one render pass of `stage` inside its own span
pub fn in_render_pass<F, R>(stage: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let pass_id = Uuid::new_v4();
    let span = info_span!("render_pass", stage, pass_id = %pass_id);
    let _entered = span.enter();

    let start = Instant::now();
    let result = f();
    debug!(
        elapsed_us = start.elapsed().as_micros() as u64,
        "Render pass finished"
    );

    result
}

/// Log what a render pass produced
pub fn log_aggregation_stats(
    mode: BucketMode,
    sample_count: usize,
    row_count: usize,
    min_temp: f64,
    max_temp: f64,
    gradient_stops: usize,
) {
    info!(
        mode = ?mode,
        sample_count,
        row_count,
        min_temp,
        max_temp,
        gradient_stops,
        "Forecast strip built"
    );
}

/// Log a forecast batch the pass had to give up on
pub fn log_rejected_batch(error: &ForecastStripError, sample_count: usize) {
    match error {
        ForecastStripError::TimestampParse { value } => {
            warn!(sample_count, timestamp = %value, "Forecast batch rejected: bad timestamp")
        }
        other => warn!(sample_count, error = %other, "Forecast batch rejected"),
    }
}

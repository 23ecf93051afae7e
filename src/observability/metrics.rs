//! Metrics collection.
//!
//! # Metrics
//! - `probe_outcomes_total` (counter): probe runs by outcome
//!   (`responded`, `timed_out`, `failed`)
//! - `probe_duration_seconds` (histogram): time spent per probe

use std::time::Instant;

/// Record a finished probe.
pub fn record_probe(outcome: &'static str, start_time: Instant) {
    let duration = start_time.elapsed().as_secs_f64();

    metrics::counter!("probe_outcomes_total", "outcome" => outcome).increment(1);
    metrics::histogram!("probe_duration_seconds", "outcome" => outcome).record(duration);
}

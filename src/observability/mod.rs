//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe produces:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (outcome counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields over formatted messages
//! - Log filter from RUST_LOG, falling back to config
//! - Metrics go through the `metrics` facade; no exporter is installed here

pub mod logging;
pub mod metrics;

//! HTTP timeout classification.
//!
//! Decides whether an arbitrary error is a timeout by recognizing the
//! [`NetError`] wrapper shape and asking its nested cause, through the
//! one-method [`Timeout`] capability, whether it timed out. The [`probe`]
//! module is a caller that issues a single HTTP request and reports the
//! verdict.

pub mod classify;
pub mod config;
pub mod observability;
pub mod probe;

pub use classify::{is_timeout, NetError, Timeout, TimeoutExt, TransportError};
pub use config::ProbeConfig;
pub use probe::{Outcome, ProbeReport, Prober};

//! HTTP probe: the caller side of timeout classification.
//!
//! # Data Flow
//! ```text
//! ProbeConfig
//!     → prober.rs (reqwest client with connect/request timeouts,
//!                  optional tokio deadline around the exchange)
//!     → failure wrapped as NetError inside ProbeError::Request
//!     → classify::is_timeout decides TimedOut vs Failed
//!     → report.rs (ProbeReport for humans or JSON)
//! ```
//!
//! # Design Decisions
//! - One request per run, no retries
//! - `run` never fails; every failure becomes an outcome
//! - Client timeouts and deadline expiry both classify as timeouts

pub mod prober;
pub mod report;

pub use prober::{ProbeError, Prober};
pub use report::{Outcome, ProbeReport};

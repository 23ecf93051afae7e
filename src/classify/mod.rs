//! Timeout classification subsystem.
//!
//! # Data Flow
//! ```text
//! failed request (reqwest / hyper / io / tokio deadline)
//!     → net_error.rs (wrap as NetError { op, target, cause })
//!     → classifier.rs (recognize NetError, at most one source() hop)
//!     → capability.rs (narrow cause to Timeout, ask it)
//!     → bool verdict for the caller
//! ```
//!
//! # Design Decisions
//! - The timeout signal lives on the wrapped cause, never on the wrapper
//! - Causes opt into the `Timeout` capability; the classifier never
//!   enumerates concrete cause types
//! - Classification is total: shape mismatches map to `false`

pub mod capability;
pub mod classifier;
pub mod net_error;

pub use capability::{Opaque, Timeout, TransportError};
pub use classifier::{is_timeout, TimeoutExt};
pub use net_error::NetError;

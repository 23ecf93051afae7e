//! Timeout classification over arbitrary errors.
//!
//! # Responsibilities
//! - Recognize a `NetError`, either directly or one `source()` hop down
//! - Delegate the verdict to the wrapper's cause capability
//!
//! # Design Decisions
//! - Exactly one level of unwrapping before recognition; deeper chains are
//!   not searched
//! - Pure and total: absent input, foreign shapes and capability-less causes
//!   all yield `false`

use std::error::Error;

use crate::classify::net_error::NetError;

/// Returns true if `err` is (or directly wraps) a [`NetError`] whose cause
/// reports a timeout.
pub fn is_timeout(err: Option<&(dyn Error + 'static)>) -> bool {
    err.and_then(recognize).is_some_and(NetError::is_timeout)
}

fn recognize<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a NetError> {
    err.downcast_ref::<NetError>()
        .or_else(|| err.source()?.downcast_ref::<NetError>())
}

/// Method-call form of [`is_timeout`] for error trait objects.
pub trait TimeoutExt {
    fn is_timeout(&self) -> bool;
}

impl TimeoutExt for dyn Error + 'static {
    fn is_timeout(&self) -> bool {
        is_timeout(Some(self))
    }
}

impl TimeoutExt for dyn Error + Send + Sync + 'static {
    fn is_timeout(&self) -> bool {
        is_timeout(Some(self))
    }
}

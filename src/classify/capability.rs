//! The timeout capability and the causes that expose it.
//!
//! # Responsibilities
//! - Define the one-method `Timeout` capability
//! - Define `TransportError`, the contract for causes nested in a `NetError`
//! - Expose the capability for the transport errors this crate meets in practice

use std::error::Error;
use std::fmt;
use std::io;

/// Reports whether the underlying condition was a timeout.
pub trait Timeout {
    fn timeout(&self) -> bool;
}

/// An error that can sit underneath a [`NetError`](super::NetError).
///
/// Implementors that know whether they timed out return `Some(self)` from
/// [`as_timeout`](TransportError::as_timeout). Everything else keeps the
/// default and is treated as "not a timeout".
pub trait TransportError: Error + Send + Sync + 'static {
    /// Narrow this cause to the timeout capability, if it has one.
    fn as_timeout(&self) -> Option<&dyn Timeout> {
        None
    }
}

impl Timeout for io::Error {
    fn timeout(&self) -> bool {
        self.kind() == io::ErrorKind::TimedOut
    }
}

impl TransportError for io::Error {
    fn as_timeout(&self) -> Option<&dyn Timeout> {
        Some(self)
    }
}

impl Timeout for reqwest::Error {
    fn timeout(&self) -> bool {
        self.is_timeout()
    }
}

impl TransportError for reqwest::Error {
    fn as_timeout(&self) -> Option<&dyn Timeout> {
        Some(self)
    }
}

impl Timeout for hyper::Error {
    fn timeout(&self) -> bool {
        self.is_timeout()
    }
}

impl TransportError for hyper::Error {
    fn as_timeout(&self) -> Option<&dyn Timeout> {
        Some(self)
    }
}

// A deadline expiring is a timeout by definition.
impl Timeout for tokio::time::error::Elapsed {
    fn timeout(&self) -> bool {
        true
    }
}

impl TransportError for tokio::time::error::Elapsed {
    fn as_timeout(&self) -> Option<&dyn Timeout> {
        Some(self)
    }
}

/// Adapter for a boxed error of unknown type.
///
/// Carries no capability: an opaque cause never classifies as a timeout.
pub struct Opaque(pub Box<dyn Error + Send + Sync>);

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Opaque {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl TransportError for Opaque {}

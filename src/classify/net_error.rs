//! The network operation error shape recognized by the classifier.

use std::error::Error;
use std::fmt;

use crate::classify::capability::{Opaque, TransportError};

/// A failed network operation: what was attempted, against what, and why.
///
/// Displays as `<op> "<target>": <cause>`, e.g.
/// `GET "http://127.0.0.1:8080/health": operation timed out`.
#[derive(Debug)]
pub struct NetError {
    op: String,
    target: String,
    cause: Box<dyn TransportError>,
}

impl NetError {
    /// Wrap `cause` as the failure of `op` against `target`.
    pub fn new(op: impl Into<String>, target: impl Into<String>, cause: impl TransportError) -> Self {
        Self {
            op: op.into(),
            target: target.into(),
            cause: Box::new(cause),
        }
    }

    /// Wrap a cause of unknown type. It never reports a timeout.
    ///
    /// Boxing hides the cause's capability, even when the boxed value is an
    /// `io::Error` with `TimedOut`. Use [`NetError::new`] whenever the
    /// concrete cause type is known.
    pub fn opaque(
        op: impl Into<String>,
        target: impl Into<String>,
        cause: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::new(op, target, Opaque(cause.into()))
    }

    /// Operation name, e.g. an HTTP method.
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Target identifier, e.g. a URL or socket address.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The underlying transport error.
    pub fn cause(&self) -> &dyn TransportError {
        self.cause.as_ref()
    }

    /// Whether the nested cause reports a timeout.
    ///
    /// A cause without the [`Timeout`](super::Timeout) capability is not a timeout.
    pub fn is_timeout(&self) -> bool {
        self.cause
            .as_timeout()
            .is_some_and(|capability| capability.timeout())
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\": {}", self.op, self.target, self.cause)
    }
}

impl Error for NetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_format() {
        let err = NetError::new(
            "GET",
            "http://127.0.0.1:8080/health",
            io::Error::new(io::ErrorKind::TimedOut, "operation timed out"),
        );
        assert_eq!(
            err.to_string(),
            "GET \"http://127.0.0.1:8080/health\": operation timed out"
        );
        assert_eq!(err.op(), "GET");
        assert_eq!(err.target(), "http://127.0.0.1:8080/health");
    }

    #[test]
    fn test_source_is_cause() {
        let err = NetError::new(
            "dial",
            "10.0.0.1:443",
            io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer"),
        );
        let source = err.source().expect("cause is exposed as source");
        let io_err = source.downcast_ref::<io::Error>().expect("cause keeps its type");
        assert_eq!(io_err.kind(), io::ErrorKind::ConnectionReset);
    }

    #[test]
    fn test_opaque_cause_is_never_timeout() {
        let err = NetError::opaque("GET", "http://example.invalid", "timed out (allegedly)");
        assert!(!err.is_timeout());
        assert!(err.source().is_some_and(|s| s.is::<Opaque>()));
    }

    #[test]
    fn test_boxing_hides_io_timeout() {
        let timed_out = || io::Error::new(io::ErrorKind::TimedOut, "i/o timeout");

        let boxed = NetError::opaque("GET", "http://x/", timed_out());
        assert!(!boxed.is_timeout());
        assert!(boxed.cause().as_timeout().is_none());

        let typed = NetError::new("GET", "http://x/", timed_out());
        assert!(typed.is_timeout());
    }
}

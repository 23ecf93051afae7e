//! Probe results.

use std::fmt;

use serde::{Serialize, Serializer};

/// How a probe run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target answered (any status).
    Responded { status: u16 },
    /// The request failed and the failure classified as a timeout.
    TimedOut,
    /// The request failed for any other reason.
    Failed,
}

impl Outcome {
    /// Stable label used for metrics and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Responded { .. } => "responded",
            Outcome::TimedOut => "timed_out",
            Outcome::Failed => "failed",
        }
    }

    /// Response status, if the target answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Responded { status } => Some(*status),
            Outcome::TimedOut | Outcome::Failed => None,
        }
    }
}

// The status is reported as a sibling field of the report.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Result of a single probe run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub method: String,
    pub target: String,
    pub outcome: Outcome,
    pub status: Option<u16>,
    pub elapsed_ms: u64,
    pub error: Option<String>,
}

impl ProbeReport {
    pub fn new(
        method: impl Into<String>,
        target: impl Into<String>,
        outcome: Outcome,
        elapsed_ms: u64,
        error: Option<String>,
    ) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            status: outcome.status(),
            outcome,
            elapsed_ms,
            error,
        }
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.method, self.target)?;
        match self.outcome {
            Outcome::Responded { status } => {
                write!(f, "responded {} in {}ms", status, self.elapsed_ms)?
            }
            Outcome::TimedOut => write!(f, "timed out after {}ms", self.elapsed_ms)?,
            Outcome::Failed => write!(f, "failed after {}ms", self.elapsed_ms)?,
        }
        if let Some(error) = &self.error {
            write!(f, ": {}", error)?;
        }
        Ok(())
    }
}

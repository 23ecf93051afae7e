//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the target URL and method
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProbeConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ProbeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target.url '{url}' is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("target.url scheme '{0}' is not supported (expected http or https)")]
    UnsupportedScheme(String),

    #[error("target.method '{0}' is not a valid HTTP method")]
    InvalidMethod(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.target.url) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.target.url.clone(),
            reason: e.to_string(),
        }),
    }

    if reqwest::Method::from_bytes(config.target.method.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidMethod(config.target.method.clone()));
    }

    if config.timeouts.connect_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_ms"));
    }
    if config.timeouts.request_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("request_ms"));
    }
    if config.timeouts.deadline_ms == Some(0) {
        errors.push(ValidationError::ZeroTimeout("deadline_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&ProbeConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ProbeConfig::default();
        config.target.url = "not a url".into();
        config.target.method = "GE T".into();
        config.timeouts.connect_ms = 0;
        config.timeouts.request_ms = 0;
        config.timeouts.deadline_ms = Some(0);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::InvalidUrl { .. }));
        assert_eq!(errors[1], ValidationError::InvalidMethod("GE T".into()));
        assert_eq!(errors[2], ValidationError::ZeroTimeout("connect_ms"));
        assert_eq!(errors[3], ValidationError::ZeroTimeout("request_ms"));
        assert_eq!(errors[4], ValidationError::ZeroTimeout("deadline_ms"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = ProbeConfig::default();
        config.target.url = "ftp://example.com/file".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnsupportedScheme("ftp".into())])
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::ZeroTimeout("request_ms");
        assert_eq!(err.to_string(), "timeouts.request_ms must be greater than zero");
    }
}

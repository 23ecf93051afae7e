//! Single-shot HTTP prober.

use std::error::Error as _;
use std::time::{Duration, Instant};

use reqwest::{Client, Method};
use thiserror::Error;

use crate::classify::{is_timeout, NetError, TransportError};
use crate::config::ProbeConfig;
use crate::observability::metrics;
use crate::probe::report::{Outcome, ProbeReport};

/// Errors raised while probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid HTTP method '{0}'")]
    Method(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {target} failed")]
    Request {
        target: String,
        #[source]
        source: NetError,
    },
}

/// Issues one request against the configured target.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    method: Method,
    target: String,
    deadline: Option<Duration>,
}

impl Prober {
    /// Build a prober from a validated configuration.
    ///
    /// The method is matched case-insensitively: `get` is sent as `GET`.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let method = Method::from_bytes(config.target.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| ProbeError::Method(config.target.method.clone()))?;

        let client = Client::builder()
            .connect_timeout(config.timeouts.connect())
            .timeout(config.timeouts.request())
            .no_proxy()
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self {
            client,
            method,
            target: config.target.url.clone(),
            deadline: config.timeouts.deadline(),
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Perform the exchange, reading the full body. Returns the status code.
    pub async fn send(&self) -> Result<u16, ProbeError> {
        let exchange = async {
            let response = self
                .client
                .request(self.method.clone(), &self.target)
                .send()
                .await?;
            let status = response.status().as_u16();
            response.bytes().await?;
            Ok::<_, reqwest::Error>(status)
        };

        let result = match self.deadline {
            Some(deadline) => match tokio::time::timeout(deadline, exchange).await {
                Ok(result) => result,
                Err(elapsed) => return Err(self.failed(elapsed)),
            },
            None => exchange.await,
        };

        result.map_err(|e| self.failed(e))
    }

    /// Probe once and classify the result. Never fails.
    pub async fn run(&self) -> ProbeReport {
        let start_time = Instant::now();
        tracing::debug!(method = %self.method, url = %self.target, "Probing");

        let result = self.send().await;
        let elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (outcome, error) = match result {
            Ok(status) => {
                tracing::info!(url = %self.target, status, elapsed_ms, "Target responded");
                (Outcome::Responded { status }, None)
            }
            Err(e) if is_timeout(Some(&e)) => {
                let detail = describe(&e);
                tracing::warn!(url = %self.target, elapsed_ms, error = %detail, "Request timed out");
                (Outcome::TimedOut, Some(detail))
            }
            Err(e) => {
                let detail = describe(&e);
                tracing::error!(url = %self.target, elapsed_ms, error = %detail, "Request failed");
                (Outcome::Failed, Some(detail))
            }
        };

        metrics::record_probe(outcome.label(), start_time);

        ProbeReport::new(self.method.as_str(), &self.target, outcome, elapsed_ms, error)
    }

    fn failed(&self, cause: impl TransportError) -> ProbeError {
        ProbeError::Request {
            target: self.target.clone(),
            source: NetError::new(self.method.as_str(), &self.target, cause),
        }
    }
}

// The wrapped NetError already names the method and target.
fn describe(err: &ProbeError) -> String {
    err.source()
        .map_or_else(|| err.to_string(), ToString::to_string)
}

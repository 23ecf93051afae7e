//! End-to-end probe runs against local mock backends.

use std::net::SocketAddr;

use timeout_probe::config::ProbeConfig;
use timeout_probe::{Outcome, Prober};

mod common;

fn config_for(addr: SocketAddr, request_ms: u64, deadline_ms: Option<u64>) -> ProbeConfig {
    let mut config = ProbeConfig::default();
    config.target.url = format!("http://{}/health", addr);
    config.timeouts.connect_ms = 1_000;
    config.timeouts.request_ms = request_ms;
    config.timeouts.deadline_ms = deadline_ms;
    config
}

#[tokio::test]
async fn test_responding_backend() {
    let addr = common::start_mock_backend("200 OK", "ok").await;
    let prober = Prober::new(&config_for(addr, 2_000, None)).unwrap();

    let report = prober.run().await;

    assert_eq!(report.outcome, Outcome::Responded { status: 200 });
    assert_eq!(report.status, Some(200));
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_error_status_is_still_a_response() {
    let addr = common::start_mock_backend("503 Service Unavailable", "").await;
    let prober = Prober::new(&config_for(addr, 2_000, None)).unwrap();

    let report = prober.run().await;

    assert_eq!(report.outcome, Outcome::Responded { status: 503 });
}

#[tokio::test]
async fn test_client_timeout_is_classified() {
    let addr = common::start_silent_backend().await;
    let prober = Prober::new(&config_for(addr, 200, None)).unwrap();

    let report = prober.run().await;

    assert_eq!(report.outcome, Outcome::TimedOut);
    assert_eq!(report.status, None);
    let error = report.error.expect("timed out runs carry the error");
    assert!(error.starts_with("GET \"http://"), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_deadline_is_classified() {
    let addr = common::start_silent_backend().await;
    let prober = Prober::new(&config_for(addr, 10_000, Some(200))).unwrap();

    let report = prober.run().await;

    assert_eq!(report.outcome, Outcome::TimedOut);
    assert!(report.elapsed_ms < 10_000);
}

#[tokio::test]
async fn test_refused_connection_is_not_a_timeout() {
    let addr = common::closed_addr().await;
    let prober = Prober::new(&config_for(addr, 2_000, None)).unwrap();

    let report = prober.run().await;

    assert_eq!(report.outcome, Outcome::Failed);
    assert!(report.error.is_some());
}

#[tokio::test]
async fn test_send_error_exposes_wrapper() {
    use std::error::Error;
    use timeout_probe::{is_timeout, NetError};

    let addr = common::start_silent_backend().await;
    let prober = Prober::new(&config_for(addr, 200, None)).unwrap();

    let err = prober.send().await.unwrap_err();

    let wrapper = err
        .source()
        .and_then(|s| s.downcast_ref::<NetError>())
        .expect("request failures wrap a NetError");
    assert_eq!(wrapper.op(), "GET");
    assert!(wrapper.is_timeout());
    assert!(is_timeout(Some(&err)));
}

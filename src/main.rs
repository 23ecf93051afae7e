//! timeout-probe
//!
//! Sends one HTTP request with client-side timeouts and reports whether it
//! responded, timed out, or failed for another reason.
//!
//! ```text
//! config file / flags ─▶ ProbeConfig ─▶ Prober ─▶ reqwest
//!                                         │
//!                            error? ──────┴─▶ NetError ─▶ is_timeout ─▶ ProbeReport
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use timeout_probe::config::{load_config, validate_config, ConfigError, ProbeConfig};
use timeout_probe::observability::logging;
use timeout_probe::{Outcome, Prober};

#[derive(Parser)]
#[command(name = "timeout-probe")]
#[command(about = "Probe an HTTP endpoint and classify failures as timeouts", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target URL (overrides config)
    #[arg(short, long)]
    url: Option<String>,

    /// HTTP method (overrides config)
    #[arg(short, long)]
    method: Option<String>,

    /// Client request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Connect timeout in milliseconds
    #[arg(long)]
    connect_timeout_ms: Option<u64>,

    /// Deadline around the whole exchange in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut ProbeConfig) {
        if let Some(url) = &self.url {
            config.target.url = url.clone();
        }
        if let Some(method) = &self.method {
            config.target.method = method.clone();
        }
        if let Some(ms) = self.timeout_ms {
            config.timeouts.request_ms = ms;
        }
        if let Some(ms) = self.connect_timeout_ms {
            config.timeouts.connect_ms = ms;
        }
        if self.deadline_ms.is_some() {
            config.timeouts.deadline_ms = self.deadline_ms;
        }
    }

    fn load(&self) -> Result<ProbeConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ProbeConfig::default(),
        };
        self.apply(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("timeout-probe: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        url = %config.target.url,
        method = %config.target.method,
        request_timeout_ms = config.timeouts.request_ms,
        connect_timeout_ms = config.timeouts.connect_ms,
        deadline_ms = ?config.timeouts.deadline_ms,
        "Configuration loaded"
    );

    let prober = match Prober::new(&config) {
        Ok(prober) => prober,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build prober");
            return ExitCode::FAILURE;
        }
    };

    let report = prober.run().await;

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode report");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report);
    }

    ExitCode::from(exit_status(report.outcome))
}

/// 0 responded, 2 timed out, 1 failed.
fn exit_status(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Responded { .. } => 0,
        Outcome::TimedOut => 2,
        Outcome::Failed => 1,
    }
}

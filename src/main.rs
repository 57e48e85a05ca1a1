//! PoseKit — TFLite to TensorFlow.js pose-model converter.
//!
//! Entry point: parse arguments, load configuration, initialise logging,
//! dispatch the command, and translate failure into exit status 1.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use posekit_core::config::AppConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            commands::report_failure(&e, cli.format);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod convert;
pub mod install;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::{self, OutputFormat};
use posekit_core::config::AppConfig;
use posekit_core::error::{AppError, ErrorKind};
use posekit_core::result::AppResult;

/// PoseKit — convert TFLite pose models to TensorFlow.js
#[derive(Debug, Parser)]
#[command(name = "posekit", version, about, long_about = None)]
pub struct Cli {
    /// Additional configuration file layered over config/default.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute (defaults to `convert`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert the TFLite model to a TensorFlow.js graph model
    Convert(convert::ConvertArgs),
    /// Check that the converter and its Python package are available
    Check,
    /// Install the converter's Python package with pip
    Install,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> AppResult<()> {
        let result = match &self.command {
            Some(Commands::Convert(args)) => convert::execute(args, config, self.format).await,
            None => convert::execute(&convert::ConvertArgs::default(), config, self.format).await,
            Some(Commands::Check) => check::execute(&config, self.format).await,
            Some(Commands::Install) => install::execute(&config, self.format).await,
            Some(Commands::Config(args)) => config::execute(args, &config, self.format),
        };

        if let Err(ref e) = result {
            // A failed `check` has already printed its JSON report.
            let self_reported = self.format == OutputFormat::Json
                && matches!(self.command, Some(Commands::Check))
                && e.kind == ErrorKind::Dependency;
            if !self_reported {
                report_failure(e, self.format);
            }
            if self.format == OutputFormat::Text
                && matches!(self.command, None | Some(Commands::Convert(_)))
            {
                println!("\n❌ Conversion failed. Please check the error messages above.");
            }
        }
        result
    }
}

/// JSON body printed on failure in JSON mode.
#[derive(serde::Serialize)]
struct FailureBody<'a> {
    ok: bool,
    kind: ErrorKind,
    error: &'a str,
}

/// Print `err` as a text error line or as a JSON failure body.
pub fn report_failure(err: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Text => output::print_error(&err.message),
        OutputFormat::Json => output::print_json(&FailureBody {
            ok: false,
            kind: err.kind,
            error: &err.message,
        }),
    }
}

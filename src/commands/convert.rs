//! The `convert` command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use posekit_converter::{
    ConversionObserver, ConversionReport, ConversionStage, ConverterDriver,
};
use posekit_core::config::{AppConfig, ConverterConfig};
use posekit_core::result::AppResult;

/// Arguments for the convert command. Each flag overrides the matching
/// `[converter]` configuration key.
#[derive(Debug, Default, Args)]
pub struct ConvertArgs {
    /// TFLite model to convert
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory that receives the TensorFlow.js model
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Signature name to export
    #[arg(long)]
    pub signature: Option<String>,

    /// Converter executable name or path
    #[arg(long)]
    pub converter: Option<String>,

    /// Python interpreter used for the dependency check
    #[arg(long)]
    pub python: Option<String>,

    /// Install the Python package with pip if it is missing
    #[arg(long)]
    pub install_missing: bool,

    /// Do not check for the Python package before converting
    #[arg(long)]
    pub skip_dependency_check: bool,

    /// Kill the converter after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ConvertArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: ConverterConfig) -> ConverterConfig {
        if let Some(ref source) = self.source {
            config.source_path = source.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ref signature) = self.signature {
            config.signature_name = signature.clone();
        }
        if let Some(ref converter) = self.converter {
            config.converter_command = converter.clone();
        }
        if let Some(ref python) = self.python {
            config.python_command = python.clone();
        }
        if self.install_missing {
            config.auto_install = true;
        }
        if self.skip_dependency_check {
            config.check_dependencies = false;
        }
        if self.timeout.is_some() {
            config.timeout_seconds = self.timeout;
        }
        config
    }
}

/// Prints progress lines as the driver advances.
struct ConsoleObserver;

impl ConversionObserver for ConsoleObserver {
    fn on_stage(&self, stage: &ConversionStage) {
        match stage {
            ConversionStage::PreparingOutput => {}
            ConversionStage::InstallingDependency { package } => {
                output::print_progress("📦", &format!("Installing {}...", package));
            }
            ConversionStage::Converting => {
                output::print_progress(
                    "🔄",
                    "Converting TFLite model to TensorFlow.js format...",
                );
            }
        }
    }
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    ok: bool,
    report: &'a ConversionReport,
}

/// Execute the convert command
pub async fn execute(
    args: &ConvertArgs,
    config: AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let converter_config = args.apply(config.converter);
    let mut driver = ConverterDriver::new(converter_config)?;

    if format == OutputFormat::Text {
        output::print_banner();
        driver = driver.with_observer(Arc::new(ConsoleObserver));
    }

    let report = driver.run().await?;

    match format {
        OutputFormat::Json => output::print_json(&SuccessBody {
            ok: true,
            report: &report,
        }),
        OutputFormat::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &ConversionReport) {
    output::print_success("Model conversion successful!");
    output::print_progress(
        "📁",
        &format!(
            "Converted model saved to: {}",
            report.request.output_dir.display()
        ),
    );
    output::print_generated_files(&report.generated_files);
    output::print_kv("Total size", &output::format_bytes(report.total_bytes()));
    output::print_kv("Duration", &format!("{} ms", report.outcome.duration_ms));

    println!();
    output::print_success("Conversion completed successfully!");
    println!("🔧 Next steps:");
    println!("1. Update your React Native code to load the converted model");
    println!("2. Test the pose detection with real TensorFlow.js model");
}

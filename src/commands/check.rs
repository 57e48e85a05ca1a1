//! The `check` command: report converter and Python package availability.

use serde::Serialize;

use crate::output::{self, OutputFormat};
use posekit_converter::{ConversionError, ConverterInstallation, ConverterToolchain, DependencyProbe};
use posekit_core::config::AppConfig;
use posekit_core::error::AppError;
use posekit_core::result::AppResult;

#[derive(Debug, Serialize)]
struct CheckReport {
    ok: bool,
    package: String,
    package_installed: bool,
    converter: Option<ConverterInstallation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// Execute the check command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let converter_config = &config.converter;
    let probe = DependencyProbe::from_config(converter_config);

    let (package_installed, note) = match probe.is_installed().await {
        Ok(installed) => (installed, None),
        Err(e @ ConversionError::PythonNotFound { .. }) => (false, Some(e.to_string())),
        Err(e) => return Err(e.into()),
    };
    let converter = match ConverterToolchain::resolve(&converter_config.converter_command) {
        Ok(installation) => Some(installation),
        Err(ConversionError::ConverterNotFound { .. }) => None,
        Err(e) => return Err(e.into()),
    };

    let report = CheckReport {
        ok: package_installed && converter.is_some(),
        package: probe.package().to_string(),
        package_installed,
        converter,
        note,
    };

    match format {
        OutputFormat::Json => output::print_json(&report),
        OutputFormat::Text => {
            if let Some(note) = &report.note {
                output::print_warning(note);
            }
            if report.package_installed {
                output::print_success(&format!("Python package '{}' is installed", report.package));
            } else {
                output::print_warning(&format!(
                    "Python package '{}' is not installed (run `posekit install`)",
                    report.package
                ));
            }
            match &report.converter {
                Some(installation) => {
                    output::print_success("Converter found");
                    output::print_kv("Path", &installation.executable.display().to_string());
                    output::print_kv("Found via", &format!("{:?}", installation.discovery_method));
                }
                None => output::print_warning(&format!(
                    "Converter '{}' not found on PATH",
                    converter_config.converter_command
                )),
            }
        }
    }

    if report.ok {
        Ok(())
    } else {
        Err(AppError::dependency("Conversion toolchain is incomplete"))
    }
}

//! The `install` command: explicitly install the converter's Python package.

use serde_json::json;

use crate::output::{self, OutputFormat};
use posekit_converter::DependencyProbe;
use posekit_core::config::AppConfig;
use posekit_core::result::AppResult;

/// Execute the install command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let probe = DependencyProbe::from_config(&config.converter);

    if probe.is_installed().await? {
        match format {
            OutputFormat::Json => output::print_json(&json!({
                "ok": true,
                "package": probe.package(),
                "status": "present",
            })),
            OutputFormat::Text => output::print_success(&format!(
                "Python package '{}' is already installed",
                probe.package()
            )),
        }
        return Ok(());
    }

    if format == OutputFormat::Text {
        output::print_progress("📦", &format!("Installing {}...", probe.package()));
    }
    probe.install().await?;

    match format {
        OutputFormat::Json => output::print_json(&json!({
            "ok": true,
            "package": probe.package(),
            "status": "installed",
        })),
        OutputFormat::Text => {
            output::print_success(&format!("Installed Python package '{}'", probe.package()))
        }
    }
    Ok(())
}

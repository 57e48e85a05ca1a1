//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use posekit_core::config::AppConfig;
use posekit_core::result::AppResult;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Text => {
                let c = &config.converter;
                println!("[converter]");
                output::print_kv("source_path", &c.source_path.display().to_string());
                output::print_kv("output_dir", &c.output_dir.display().to_string());
                output::print_kv("signature_name", &c.signature_name);
                output::print_kv("input_format", &c.input_format);
                output::print_kv("output_format", &c.output_format);
                output::print_kv("converter_command", &c.converter_command);
                output::print_kv("python_command", &c.python_command);
                output::print_kv("python_package", &c.python_package);
                output::print_kv("check_dependencies", &c.check_dependencies.to_string());
                output::print_kv("auto_install", &c.auto_install.to_string());
                output::print_kv(
                    "timeout_seconds",
                    &c.timeout_seconds
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "none".to_string()),
                );
                println!("[logging]");
                output::print_kv("level", &config.logging.level);
                output::print_kv("format", &config.logging.format);
            }
        },
    }

    Ok(())
}

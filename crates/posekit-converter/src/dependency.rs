//! Python package precondition checks.
//!
//! `tensorflowjs_converter` ships with the `tensorflowjs` Python package.
//! The probe runs `python -c "import <package>"`; installation is a
//! separate, explicit step (`python -m pip install <package>`).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use posekit_core::config::ConverterConfig;

use crate::error::ConversionError;
use crate::executor::{ConversionExecutor, ExecutionParams};
use crate::models::ConversionOutcome;

/// State of the Python dependency once the precondition check passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyStatus {
    /// Already importable.
    Present,
    /// Was missing and has just been installed.
    Installed,
}

/// Probes for (and optionally installs) the converter's Python package.
#[derive(Debug, Clone)]
pub struct DependencyProbe {
    python: String,
    package: String,
    executor: ConversionExecutor,
}

impl DependencyProbe {
    /// Create a probe for `package` using the `python` interpreter.
    pub fn new(python: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            package: package.into(),
            executor: ConversionExecutor::new(),
        }
    }

    /// Create a probe from converter configuration.
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(&config.python_command, &config.python_package)
    }

    /// The package this probe checks.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Whether the package can be imported.
    pub async fn is_installed(&self) -> Result<bool, ConversionError> {
        let params = ExecutionParams::new(
            &self.python,
            vec!["-c".to_string(), format!("import {}", self.package)],
        );
        let outcome = self.run_python(&params).await?;
        Ok(outcome.success)
    }

    /// Install the package with pip.
    pub async fn install(&self) -> Result<(), ConversionError> {
        info!(package = %self.package, python = %self.python, "Installing Python package");

        let params = ExecutionParams::new(
            &self.python,
            vec![
                "-m".to_string(),
                "pip".to_string(),
                "install".to_string(),
                self.package.clone(),
            ],
        );
        let outcome = self.run_python(&params).await?;

        if !outcome.success {
            let code = outcome.exit_code.unwrap_or(-1);
            warn!(package = %self.package, code, "pip install failed");
            return Err(ConversionError::InstallFailed {
                package: self.package.clone(),
                code,
                stderr: outcome.stderr,
            });
        }

        info!(package = %self.package, "Python package installed");
        Ok(())
    }

    async fn run_python(
        &self,
        params: &ExecutionParams,
    ) -> Result<ConversionOutcome, ConversionError> {
        match self.executor.execute(params).await {
            Err(ConversionError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConversionError::PythonNotFound {
                    command: self.python.clone(),
                })
            }
            other => other,
        }
    }
}

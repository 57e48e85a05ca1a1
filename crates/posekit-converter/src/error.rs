//! Unified error type for the conversion pipeline.
//!
//! Every failure mode of a conversion is a distinct `ConversionError`
//! variant; [`ConversionError::kind`] groups them into the coarse
//! [`ErrorKind`] tags reported to operators.

use posekit_core::error::{AppError, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for all conversion operations.
#[derive(Debug, Error)]
pub enum ConversionError {
    // --- Input errors ---
    /// The source model does not exist or is not a regular file.
    #[error("TFLite file not found: {path}")]
    SourceNotFound {
        /// The configured source path.
        path: PathBuf,
    },

    /// The converter configuration failed validation.
    #[error("Invalid converter configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    // --- Dependency errors ---
    /// The Python package is not importable and installing it is not allowed.
    #[error("Python package '{package}' is not installed (enable auto_install or run `posekit install`)")]
    DependencyMissing {
        /// The package that failed the import probe.
        package: String,
    },

    /// `pip install` exited with a non-zero status.
    #[error("Installing '{package}' failed with exit code {code}: {stderr}")]
    InstallFailed {
        /// The package being installed.
        package: String,
        /// The pip exit code (-1 when killed by a signal).
        code: i32,
        /// Captured pip stderr.
        stderr: String,
    },

    /// The Python interpreter could not be started.
    #[error("Python interpreter not found: {command}")]
    PythonNotFound {
        /// The configured interpreter command.
        command: String,
    },

    /// The converter executable could not be located.
    #[error("Converter executable not found: {command}")]
    ConverterNotFound {
        /// The configured converter command.
        command: String,
    },

    // --- Process execution errors ---
    /// The converter exited with a non-zero status.
    #[error("Converter exited with code {code}: {stderr}")]
    ToolFailed {
        /// The exit code (-1 when killed by a signal).
        code: i32,
        /// Captured stderr output.
        stderr: String,
        /// Captured stdout output.
        stdout: String,
    },

    /// The converter ran longer than the configured timeout.
    #[error("Converter timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_seconds: u64,
    },

    // --- Generic errors ---
    /// IO error, or any other fault raised while orchestrating a conversion.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConversionError {
    /// Coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidConfig(_) => ErrorKind::Validation,
            Self::DependencyMissing { .. }
            | Self::InstallFailed { .. }
            | Self::PythonNotFound { .. }
            | Self::ConverterNotFound { .. } => ErrorKind::Dependency,
            Self::ToolFailed { .. } | Self::Timeout { .. } => ErrorKind::ToolFailure,
            Self::Io(_) => ErrorKind::UnexpectedFault,
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::with_source(kind, message, err)
    }
}

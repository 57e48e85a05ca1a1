//! Logging configuration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const FORMATS: &[&str] = &["pretty", "json"];

/// Logging and tracing configuration.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`, `"off"`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    #[validate(custom(function = "validate_level"))]
    pub level: String,
    /// Log format: `"pretty"` or `"json"`.
    #[serde(default = "default_format")]
    #[validate(custom(function = "validate_format"))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn validate_level(level: &str) -> Result<(), ValidationError> {
    if LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_log_level"))
    }
}

fn validate_format(format: &str) -> Result<(), ValidationError> {
    if FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_log_format"))
    }
}

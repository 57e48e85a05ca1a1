//! Application configuration schemas.
//!
//! Configuration is layered with the `config` crate: struct defaults,
//! `config/default.toml`, an optional explicit file, then environment
//! variables prefixed with `POSEKIT` (sections separated by `__`).

pub mod converter;
pub mod logging;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

pub use self::converter::ConverterConfig;
pub use self::logging::LoggingConfig;

use crate::result::AppResult;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "POSEKIT";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Conversion settings.
    #[serde(default)]
    pub converter: ConverterConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/default.toml`, an optional explicit
    /// file, and `POSEKIT__*` environment variables.
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        Self::load_from(explicit, None)
    }

    /// Load configuration with an explicit environment map instead of the
    /// process environment. `None` reads the real environment.
    pub fn load_from(
        explicit: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> AppResult<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;

        app.converter.validate()?;
        app.logging.validate()?;
        Ok(app)
    }
}

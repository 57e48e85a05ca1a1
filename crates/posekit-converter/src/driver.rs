//! Converter driver: the check → prepare → precondition → invoke → report
//! sequence around a single `tensorflowjs_converter` run.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use posekit_core::config::ConverterConfig;
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::dependency::{DependencyProbe, DependencyStatus};
use crate::error::ConversionError;
use crate::executor::{ConversionExecutor, ExecutionParams};
use crate::filesystem::FsUtils;
use crate::models::{ConversionReport, ConversionRequest};
use crate::toolchain::ConverterToolchain;

/// Progress points reported to a [`ConversionObserver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ConversionStage {
    /// The source model exists; the output directory is being prepared.
    PreparingOutput,
    /// The Python package is missing and is being installed.
    InstallingDependency {
        /// Package being installed.
        package: String,
    },
    /// The converter process is running.
    Converting,
}

/// Receives progress notifications while a conversion runs.
pub trait ConversionObserver: Send + Sync {
    /// Called when the driver enters `stage`.
    fn on_stage(&self, stage: &ConversionStage);
}

struct NoopObserver;

impl ConversionObserver for NoopObserver {
    fn on_stage(&self, _stage: &ConversionStage) {}
}

/// Drives one TFLite to TensorFlow.js conversion.
#[derive(Clone)]
pub struct ConverterDriver {
    config: ConverterConfig,
    executor: ConversionExecutor,
    probe: DependencyProbe,
    observer: Arc<dyn ConversionObserver>,
}

impl std::fmt::Debug for ConverterDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterDriver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ConverterDriver {
    /// Create a driver from validated configuration.
    pub fn new(config: ConverterConfig) -> Result<Self, ConversionError> {
        config.validate()?;
        Ok(Self {
            probe: DependencyProbe::from_config(&config),
            executor: ConversionExecutor::new(),
            observer: Arc::new(NoopObserver),
            config,
        })
    }

    /// Attach a progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn ConversionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Convert the configured `source_path` into the configured `output_dir`.
    pub async fn run(&self) -> Result<ConversionReport, ConversionError> {
        self.convert(&self.config.source_path, &self.config.output_dir)
            .await
    }

    /// Convert `source_path` into a TensorFlow.js graph model in `output_dir`.
    ///
    /// The output directory is only created once the source is known to
    /// exist, and the converter is only spawned after the dependency
    /// precondition passed.
    #[instrument(
        skip_all,
        fields(source = %source_path.display(), output = %output_dir.display())
    )]
    pub async fn convert(
        &self,
        source_path: &Path,
        output_dir: &Path,
    ) -> Result<ConversionReport, ConversionError> {
        let result = self.convert_inner(source_path, output_dir).await;
        if let Err(ref e) = result {
            error!(kind = %e.kind(), error = %e, "Conversion failed");
        }
        result
    }

    async fn convert_inner(
        &self,
        source_path: &Path,
        output_dir: &Path,
    ) -> Result<ConversionReport, ConversionError> {
        FsUtils::ensure_source_file(source_path).await?;

        self.observer.on_stage(&ConversionStage::PreparingOutput);
        if FsUtils::prepare_output_dir(output_dir).await? {
            info!(dir = %output_dir.display(), "Created output directory");
        }

        let dependency = if self.config.check_dependencies {
            Some(self.ensure_dependency().await?)
        } else {
            None
        };

        let installation = ConverterToolchain::resolve(&self.config.converter_command)?;
        let request = ConversionRequest::new(&self.config, source_path, output_dir);

        let params = ExecutionParams::new(&installation.executable, request.converter_args())
            .with_timeout(self.config.timeout_seconds.map(Duration::from_secs));

        self.observer.on_stage(&ConversionStage::Converting);
        // The executable was already resolved; a spawn failure here (such as a
        // missing shebang interpreter) is reported as-is.
        let outcome = self.executor.execute(&params).await?;

        if !outcome.success {
            return Err(ConversionError::ToolFailed {
                code: outcome.exit_code.unwrap_or(-1),
                stderr: outcome.stderr,
                stdout: outcome.stdout,
            });
        }

        let generated_files = FsUtils::list_generated(output_dir).await?;
        if generated_files.is_empty() {
            warn!(dir = %output_dir.display(), "Converter succeeded but produced no files");
        }

        info!(
            files = generated_files.len(),
            duration_ms = outcome.duration_ms,
            "Model conversion successful"
        );

        Ok(ConversionReport {
            request,
            converter: installation.executable,
            dependency,
            generated_files,
            outcome,
            finished_at: Utc::now(),
        })
    }

    async fn ensure_dependency(&self) -> Result<DependencyStatus, ConversionError> {
        if self.probe.is_installed().await? {
            return Ok(DependencyStatus::Present);
        }

        if !self.config.auto_install {
            return Err(ConversionError::DependencyMissing {
                package: self.probe.package().to_string(),
            });
        }

        self.observer
            .on_stage(&ConversionStage::InstallingDependency {
                package: self.probe.package().to_string(),
            });
        self.probe.install().await?;
        Ok(DependencyStatus::Installed)
    }
}

//! Domain models: conversion requests, process outcomes, and reports.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use posekit_core::config::ConverterConfig;
use serde::{Deserialize, Serialize};

use crate::dependency::DependencyStatus;

/// The fixed parameters of one converter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// TFLite model to convert.
    pub source_path: PathBuf,
    /// Destination directory for the web model.
    pub output_dir: PathBuf,
    /// Exported signature name.
    pub signature_name: String,
    /// `--input_format` value.
    pub input_format: String,
    /// `--output_format` value.
    pub output_format: String,
}

impl ConversionRequest {
    /// Build a request for the given paths using the format and signature
    /// settings from `config`.
    pub fn new(config: &ConverterConfig, source_path: &Path, output_dir: &Path) -> Self {
        Self {
            source_path: source_path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            signature_name: config.signature_name.clone(),
            input_format: config.input_format.clone(),
            output_format: config.output_format.clone(),
        }
    }

    /// Command-line arguments handed to the converter, in order.
    pub fn converter_args(&self) -> Vec<String> {
        vec![
            format!("--input_format={}", self.input_format),
            format!("--output_format={}", self.output_format),
            format!("--signature_name={}", self.signature_name),
            self.source_path.to_string_lossy().to_string(),
            self.output_dir.to_string_lossy().to_string(),
        ]
    }
}

/// Captured result of a finished external process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Exit code; `None` when terminated by a signal.
    pub exit_code: Option<i32>,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

/// One entry of the output directory after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub name: String,
    /// Size in bytes (0 for directories).
    pub size_bytes: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// Summary of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// The request that was executed.
    pub request: ConversionRequest,
    /// Resolved converter executable.
    pub converter: PathBuf,
    /// Dependency precondition result; `None` when the check was skipped.
    pub dependency: Option<DependencyStatus>,
    /// Output directory contents, sorted by name.
    pub generated_files: Vec<GeneratedFile>,
    /// Captured converter output.
    pub outcome: ConversionOutcome,
    /// When the conversion finished.
    pub finished_at: DateTime<Utc>,
}

impl ConversionReport {
    /// Total size of all generated files.
    pub fn total_bytes(&self) -> u64 {
        self.generated_files.iter().map(|f| f.size_bytes).sum()
    }
}

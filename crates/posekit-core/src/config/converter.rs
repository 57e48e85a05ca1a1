//! Converter configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for a single TFLite to TensorFlow.js conversion.
///
/// Every field has a default, so an empty `[converter]` section (or no
/// configuration file at all) yields the stock pose-landmark conversion.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Path to the TFLite model to convert.
    pub source_path: PathBuf,

    /// Directory that receives the converted web model.
    pub output_dir: PathBuf,

    /// Signature (graph entry point) exported by the converter.
    #[validate(length(min = 1, message = "signature_name must not be empty"))]
    pub signature_name: String,

    /// Value passed as `--input_format`.
    #[validate(length(min = 1, message = "input_format must not be empty"))]
    pub input_format: String,

    /// Value passed as `--output_format`.
    #[validate(length(min = 1, message = "output_format must not be empty"))]
    pub output_format: String,

    /// Converter executable name or path.
    ///
    /// A bare name is searched on `PATH`; anything containing a path
    /// separator must point at an existing file.
    #[validate(length(min = 1, message = "converter_command must not be empty"))]
    pub converter_command: String,

    /// Python interpreter used for the dependency probe and installer.
    #[validate(length(min = 1, message = "python_command must not be empty"))]
    pub python_command: String,

    /// Python package providing the converter.
    #[validate(length(min = 1, message = "python_package must not be empty"))]
    pub python_package: String,

    /// Whether to verify the Python package is importable before converting.
    pub check_dependencies: bool,

    /// Whether a missing Python package may be installed with pip.
    pub auto_install: bool,

    /// Optional limit on the converter run. `None` waits indefinitely.
    #[validate(range(min = 1, max = 86400))]
    pub timeout_seconds: Option<u64>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("assets/models/pose_landmark_full.tflite"),
            output_dir: PathBuf::from("assets/models/pose_model_web"),
            signature_name: "serving_default".to_string(),
            input_format: "tf_lite".to_string(),
            output_format: "tfjs_graph_model".to_string(),
            converter_command: "tensorflowjs_converter".to_string(),
            python_command: default_python_command(),
            python_package: "tensorflowjs".to_string(),
            check_dependencies: true,
            auto_install: false,
            timeout_seconds: None,
        }
    }
}

fn default_python_command() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

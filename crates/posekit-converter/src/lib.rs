//! # posekit-converter
//!
//! Converts a TFLite pose-estimation model into a TensorFlow.js graph
//! model by driving the external `tensorflowjs_converter` tool.
//!
//! ## Pipeline
//!
//! [`ConverterDriver::convert`] runs a linear sequence: verify the source
//! model exists, create the output directory, check that the Python
//! `tensorflowjs` package is importable (installing it only when
//! explicitly allowed), invoke the converter, and list what it produced.
//! Every failure is reported as a tagged [`ConversionError`].

pub mod dependency;
pub mod driver;
pub mod error;
pub mod executor;
pub mod filesystem;
pub mod models;
pub mod toolchain;

pub use dependency::{DependencyProbe, DependencyStatus};
pub use driver::{ConversionObserver, ConversionStage, ConverterDriver};
pub use error::ConversionError;
pub use models::{ConversionOutcome, ConversionReport, ConversionRequest, GeneratedFile};
pub use toolchain::{ConverterInstallation, ConverterToolchain, DiscoveryMethod};

//! # posekit-core
//!
//! Core crate for PoseKit. Contains the configuration schemas, the
//! unified error system, and the result alias shared by the converter
//! library and the `posekit` binary.
//!
//! This crate has **no** internal dependencies on other PoseKit crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;

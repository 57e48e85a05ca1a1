//! Convenience result type alias for PoseKit.

use crate::error::AppError;

/// A specialized `Result` type for PoseKit operations.
pub type AppResult<T> = Result<T, AppError>;

//! Convenience result type alias for Playshare.

use crate::error::AppError;

/// A specialized `Result` type for Playshare operations.
pub type AppResult<T> = Result<T, AppError>;

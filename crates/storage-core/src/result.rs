//! Result type aliases for Bootcamp Storage.

use crate::StorageError;

/// A specialized `Result` type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

//! Unified error type for the storage layers.

use thiserror::Error;

/// Unified error type for Bootcamp Storage.
///
/// Driver failures keep the original [`sqlx::Error`] as their source so
/// callers see exactly what the database reported.
#[derive(Error, Debug)]
pub enum StorageError {
    // ============ Persistence Errors ============
    /// Unique or primary key constraint violated (e.g. duplicate UUID)
    #[error("Conflict: {0}")]
    Conflict(#[source] sqlx::Error),

    /// An update or delete touched a number of rows other than one
    #[error("{affected} users {action}")]
    UnexpectedRowCount {
        action: &'static str,
        affected: u64,
    },

    /// Any other driver-level failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Data read back from the store could not be mapped
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Conflict(_) => "CONFLICT",
            Self::UnexpectedRowCount { .. } => "UNEXPECTED_ROW_COUNT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a row-count error for an update or delete.
    #[must_use]
    pub const fn unexpected_row_count(action: &'static str, affected: u64) -> Self {
        Self::UnexpectedRowCount { action, affected }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    ///
    /// Only connection-level database failures qualify; the repository
    /// itself never retries.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Database(
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::WorkerCrashed
            )
        )
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let is_unique_violation = matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation()
        );

        if is_unique_violation {
            Self::Conflict(err)
        } else {
            Self::Database(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_row_count_message() {
        assert_eq!(
            StorageError::unexpected_row_count("updated", 0).to_string(),
            "0 users updated"
        );
        assert_eq!(
            StorageError::unexpected_row_count("deleted", 2).to_string(),
            "2 users deleted"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StorageError::unexpected_row_count("updated", 0).error_code(),
            "UNEXPECTED_ROW_COUNT"
        );
        assert_eq!(StorageError::configuration("bad").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(StorageError::internal("oops").error_code(), "INTERNAL_ERROR");
        assert_eq!(
            StorageError::from(sqlx::Error::PoolClosed).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_driver_error_keeps_source() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_retriable_errors() {
        assert!(StorageError::from(sqlx::Error::PoolTimedOut).is_retriable());
        assert!(!StorageError::from(sqlx::Error::RowNotFound).is_retriable());
        assert!(!StorageError::unexpected_row_count("deleted", 0).is_retriable());
        assert!(!StorageError::configuration("missing url").is_retriable());
    }

    #[test]
    fn test_error_constructors() {
        let configuration = StorageError::configuration("Database URL is required");
        assert!(configuration.to_string().contains("Database URL is required"));

        let internal = StorageError::internal("Invalid UUID in database");
        assert!(internal.to_string().contains("Invalid UUID"));
    }
}

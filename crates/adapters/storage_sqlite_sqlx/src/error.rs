//! Storage-specific error type wrapping sqlx errors.

use fitcenter_domain::error::FitCenterError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database URL could not be parsed.
    #[error("invalid database url")]
    Options(#[source] sqlx::Error),

    /// No connection could be checked out of the pool.
    #[error("failed to acquire a database connection")]
    Connection(#[source] sqlx::Error),

    /// A statement failed on an acquired connection.
    #[error("database query failed")]
    Query(#[from] sqlx::Error),
}

impl From<StorageError> for FitCenterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(_) => Self::Connection(Box::new(err)),
            StorageError::Options(_) | StorageError::Query(_) => Self::Query(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_acquire_failure_to_connection_error() {
        let err: FitCenterError = StorageError::Connection(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, FitCenterError::Connection(_)));
    }

    #[test]
    fn should_map_statement_failure_to_query_error() {
        let err: FitCenterError = StorageError::Query(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, FitCenterError::Query(_)));
    }
}

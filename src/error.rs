//! Error types for PathStore

use thiserror::Error;

/// Result type for PathStore operations
pub type Result<T> = std::result::Result<T, SqlError>;

/// Errors raised by the path store and its SQL backend
#[derive(Error, Debug)]
pub enum SqlError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    /// A subtree operation failed after some rows were already committed.
    /// Those rows are not rolled back.
    #[error("{op} of {path} failed after {applied} row(s) were applied: {source}")]
    PartialFailure {
        op: &'static str,
        path: String,
        applied: usize,
        #[source]
        source: Box<SqlError>,
    },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqlError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Wrap a failure from a multi-row operation. Nothing applied yet means
    /// nothing is inconsistent, so the plain error is kept.
    pub(crate) fn partial(
        op: &'static str,
        path: impl Into<String>,
        applied: usize,
        source: SqlError,
    ) -> Self {
        if applied == 0 {
            source
        } else {
            Self::PartialFailure {
                op,
                path: path.into(),
                applied,
                source: Box::new(source),
            }
        }
    }

    /// True for errors that mean "nothing at this path".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_without_progress_is_plain_sqlx() {
        let err = SqlError::partial("rename", "a", 0, sqlx::Error::RowNotFound.into());
        assert!(matches!(err, SqlError::Sqlx(_)));
    }

    #[test]
    fn test_partial_with_progress_reports_count() {
        let err = SqlError::partial("delete_dir", "a", 3, sqlx::Error::RowNotFound.into());
        match &err {
            SqlError::PartialFailure { op, path, applied, .. } => {
                assert_eq!(*op, "delete_dir");
                assert_eq!(path, "a");
                assert_eq!(*applied, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("3 row(s)"));
    }
}

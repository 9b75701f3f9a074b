//! Database error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from record store operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The environment cannot provide local storage at the given path.
    #[error("Storage unavailable at '{path}': {reason}")]
    StorageUnavailable { path: PathBuf, reason: String },

    /// Statement or transaction failure from rusqlite.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The table rejected a write.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// An update targeted an id that is not stored.
    #[error("Employee {0} not found")]
    NotFound(i64),

    /// A migration failed to apply.
    #[error("Migration failed at version {version}: {reason}")]
    Migration { version: u32, reason: String },

    /// The database lock was poisoned.
    #[error("Database lock poisoned")]
    LockPoisoned,
}

impl DatabaseError {
    /// Maps SQLite constraint failures to [`DatabaseError::Constraint`],
    /// everything else to [`DatabaseError::Storage`].
    pub(crate) fn from_write(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref code, ref msg)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                DatabaseError::Constraint(msg.clone().unwrap_or_else(|| code.to_string()))
            }
            other => DatabaseError::Storage(other),
        }
    }

    /// Reclassifies open-time failures that mean the file itself is unusable,
    /// such as a non-SQLite file, as [`DatabaseError::StorageUnavailable`].
    pub(crate) fn at_open(self, path: &Path) -> Self {
        match self {
            DatabaseError::Storage(ref err) if file_unusable(err) => {
                DatabaseError::StorageUnavailable {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
            }
            other => other,
        }
    }
}

fn file_unusable(err: &rusqlite::Error) -> bool {
    use rusqlite::ErrorCode;

    matches!(
        err.sqlite_error_code(),
        Some(
            ErrorCode::NotADatabase
                | ErrorCode::ReadOnly
                | ErrorCode::CannotOpen
                | ErrorCode::PermissionDenied
                | ErrorCode::DatabaseCorrupt
        )
    )
}

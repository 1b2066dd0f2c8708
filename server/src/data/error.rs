//! Unified error type for the data layer

use thiserror::Error;

/// Error returned by repository operations
#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    /// Migration failed
    #[error("Migration {version} ({name}) failed: {error}")]
    MigrationFailed {
        version: i32,
        name: String,
        error: String,
    },

    /// Stored row could not be mapped to a domain value
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    /// Duplicate entry
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Target row does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<crate::data::sqlite::SqliteError> for DataError {
    fn from(e: crate::data::sqlite::SqliteError) -> Self {
        match e {
            crate::data::sqlite::SqliteError::Database(e) => Self::Sqlite(e),
            crate::data::sqlite::SqliteError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                version,
                name,
                error,
            },
            crate::data::sqlite::SqliteError::Io(e) => Self::Sqlite(sqlx::Error::Io(e)),
            crate::data::sqlite::SqliteError::Corrupt(msg) => Self::Corrupt(msg),
            crate::data::sqlite::SqliteError::Conflict(msg) => Self::Conflict(msg),
            crate::data::sqlite::SqliteError::NotFound(msg) => Self::NotFound(msg),
        }
    }
}

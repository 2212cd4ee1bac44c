//! Error handling for restoview-store
//!
//! Wraps restoview-core `ExError` with store-specific constructors

use restoview_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Translate a rusqlite error
///
/// Constraint failures (foreign key, primary key, NOT NULL) become
/// `ConstraintViolation`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Same as `from_rusqlite` but tagged with the failing operation
pub fn from_rusqlite_in(op: &str, err: rusqlite::Error) -> ExError {
    from_rusqlite(err).with_op(op.to_string())
}

/// Create a schema bootstrap error
pub fn schema_error(table: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("apply_schema")
        .with_message(format!("Creating table {} failed: {}", table, reason))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

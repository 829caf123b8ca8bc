//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist.
    #[error("Database file not found: {0}")]
    FileNotFound(String),

    /// The requested table does not exist or has no columns.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Errors that abort a dump.
///
/// An empty source is not an error: `dump` returns `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum DumpError {
    /// A value could not be rendered as a literal.
    #[error("Cannot format attribute `{attribute}` of type {type_name}: {reason}")]
    Format {
        /// Attribute holding the value
        attribute: String,
        /// Semantic or declared type of the value
        type_name: String,
        /// What is wrong with it
        reason: String,
    },

    /// An option value is out of range.
    #[error("Invalid option `{field}`: {message}")]
    InvalidOption {
        /// Option name
        field: &'static str,
        /// Description of the valid range
        message: String,
    },

    /// The record source failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The seed file could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DumpError {
    /// Builds a `Format` error.
    pub(crate) fn format(
        attribute: impl Into<String>,
        type_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DumpError::Format {
            attribute: attribute.into(),
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

impl From<sqlx::Error> for DumpError {
    fn from(e: sqlx::Error) -> Self {
        DumpError::Database(DatabaseError::SqlError(e))
    }
}

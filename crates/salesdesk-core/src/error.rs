//! Error types for the sales desk library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all sales desk operations.
#[derive(Error, Debug)]
pub enum SalesError {
    /// Statement preparation, execution, commit or decoding errors
    #[error("Database error: {message}: {source}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The store could not be opened
    #[error("Cannot connect to database at '{path}': {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem { path: PathBuf, source: io::Error },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Reading from or writing to the operator's terminal failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> SalesError {
        SalesError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SalesError {
        SalesError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SalesError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether a menu loop may report this error and keep running.
    ///
    /// Store failures, connection failures and export file failures abort
    /// only the current operation. Terminal failures, including end of
    /// input, end the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SalesError::Terminal(_))
    }

    /// Whether the error originated in the relational store.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            SalesError::Database { .. } | SalesError::Connection { .. }
        )
    }

    /// Whether the operator closed the input stream.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, SalesError::Terminal(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SalesError::database(message).with_source(e))
    }
}

/// Result type alias for sales desk operations
pub type Result<T> = std::result::Result<T, SalesError>;

//! Core error types for the Nesta application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use nesta_steam::SteamError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the picker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Steam refused to show the player's game details.
    /// Carries Steam's own message, shown to the user as-is.
    #[error("{0}")]
    ProfilePrivate(String),

    #[error("Steam request failed: {0}")]
    Steam(SteamError),
}

impl Error {
    pub fn is_profile_private(&self) -> bool {
        matches!(self, Error::ProfilePrivate(_))
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<SteamError> for Error {
    fn from(err: SteamError) -> Self {
        match err {
            SteamError::ProfilePrivate { message } => Error::ProfilePrivate(message),
            other => Error::Steam(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_error_keeps_steam_message() {
        let err: Error = SteamError::ProfilePrivate {
            message: "Profile is not public".to_string(),
        }
        .into();

        assert!(err.is_profile_private());
        assert_eq!(err.to_string(), "Profile is not public");
    }

    #[test]
    fn test_other_steam_errors_are_wrapped() {
        let err: Error = SteamError::Timeout {
            provider: "OWNED_GAMES".to_string(),
        }
        .into();

        assert!(!err.is_profile_private());
        assert!(matches!(err, Error::Steam(SteamError::Timeout { .. })));
    }
}

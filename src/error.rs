//! Error types for the contact store.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by contact store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Phone number failed validation
    #[error("Invalid phone number {value:?}: expected {expected}")]
    InvalidPhoneNumber {
        value: String,
        expected: &'static str,
    },

    /// An empty identifier was supplied
    #[error("Contact ID cannot be empty")]
    InvalidIdentifier,

    /// No live contact has the given ID
    #[error("Contact {id} not found")]
    NotFound { id: String },

    /// Identifier already names a live contact
    #[error("Contact ID {id} is already in use")]
    IdentifierCollision { id: ContactId },

    /// Every generated identifier collided with a live contact
    #[error("Failed to generate a unique contact ID after {attempts} attempts")]
    IdentifierGenerationFailed { attempts: u32 },

    /// Export or import file I/O failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode the export format
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the shared store lock
    #[error("Contact store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Build a `NotFound` error for any ID-like value.
    pub fn not_found(id: impl AsRef<str>) -> Self {
        StoreError::NotFound {
            id: id.as_ref().to_string(),
        }
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the referenced contact does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyId => StoreError::InvalidIdentifier,
            ValidationError::InvalidPhoneNumber { value, expected } => {
                StoreError::InvalidPhoneNumber { value, expected }
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

//! Error types for the memcert library.
//!
//! Rendering the built-in roster cannot fail; everything here comes from
//! user-supplied rosters, the opt-in checks, or the output stream.

use thiserror::Error;

/// The main error type for memcert operations.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Member identifier is not a decimal integer
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Identifier too large to derive an application number from
    #[error("Identifier overflow: {0}")]
    IdentifierOverflow(String),

    /// Roster failed an opt-in check
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Roster file is unusable
    #[error("Roster error: {0}")]
    RosterError(String),

    /// Reading a roster or writing output failed
    #[error("Storage I/O error: {0}")]
    StorageError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for memcert operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;

//! Custom error types for the ATM simulator
//!
//! User-input failures (bad amounts, wrong passwords) are reported as plain
//! booleans by the services. This enum covers everything else: programming
//! errors, configuration and I/O.

use thiserror::Error;

/// The main error type for ATM operations
#[derive(Error, Debug)]
pub enum AtmError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A caller passed a value the API does not accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Password hashing or verification setup failed
    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl AtmError {
    /// Create an "invalid transaction type" error
    pub fn invalid_transaction_type(tag: impl AsRef<str>) -> Self {
        Self::InvalidArgument(format!("Invalid transaction type: {}", tag.as_ref()))
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for AtmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ATM operations
pub type AtmResult<T> = Result<T, AtmError>;

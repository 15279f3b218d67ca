//! Error types for the CLI application.
//!
//! `CliError` carries every failure a command can hit so handlers can use the
//! `?` operator. `BatchValidationError<T>` reports per-item failures, such as
//! skipped lines in a round log, with the item that failed.

use keno_engine::errors::KenoError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Rule violation reported by the keno engine
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<KenoError> for CliError {
    fn from(error: KenoError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::Engine(error)
    }
}

/// Generic error type for batch validation operations.
///
/// # Examples
///
/// ```rust
/// use keno_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "missing field `drawn`".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: missing field `drawn`");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

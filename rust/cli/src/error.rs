//! Error types for the CLI application.
//!
//! ## Batch Validation Errors
//!
//! `BatchValidationError<T>` collects per-record failures with context so a
//! command can report every bad record of a file instead of stopping at the
//! first one. `verify` keys them by line number.

use std::fmt;

use potsettle_engine::SettlementError;

/// Everything a command can fail with. Each variant renders as the message
/// printed after `Error: `.
#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed
    Io(std::io::Error),
    /// Bad arguments, unreadable files or undecodable hand records
    InvalidInput(String),
    /// Configuration could not be loaded
    Config(String),
    /// The engine rejected a hand record
    Engine(SettlementError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            CliError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            CliError::Engine(e) => write!(f, "Settlement failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::InvalidInput(_) | CliError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<String> for CliError {
    fn from(msg: String) -> Self {
        CliError::InvalidInput(msg)
    }
}

impl From<SettlementError> for CliError {
    fn from(e: SettlementError) -> Self {
        CliError::Engine(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidInput(format!("Invalid hand record: {e}"))
    }
}

/// Generic error type for batch validation operations.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., `usize` for a line
///   number). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use potsettle_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "Duplicate card: Ah".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: Duplicate card: Ah");
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

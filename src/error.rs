//! Error types for the bean calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating input, and exporting results.

use thiserror::Error;

/// The message surfaced when any record in a batch has a blank name.
pub const NAME_REQUIRED_MESSAGE: &str = "name required for every record";

/// The main error type for the bean calculator.
///
/// # Example
///
/// ```
/// use bean_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tiers.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tiers.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The salary tier table violates its ordering or range invariants.
    #[error("Invalid tier table: {message}")]
    InvalidTierTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// The diamond pack table violates its ordering or range invariants.
    #[error("Invalid pack table: {message}")]
    InvalidPackTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// The submitted batch of agent rows failed validation.
    ///
    /// Validation is all-or-nothing: one message is reported for the whole
    /// batch and no records are calculated.
    #[error("Validation failed: {message}")]
    Validation {
        /// The single message to surface to the user.
        message: String,
    },

    /// Writing the spreadsheet export failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::ExportError {
            message: error.to_string(),
        }
    }
}

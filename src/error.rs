//! Error types for the Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pattern validation,
//! ruleset validation, and configuration loading.

use thiserror::Error;

/// The main error type for the Roster Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Note that
/// pattern expansion and period aggregation are infallible by contract:
/// every error here is raised at construction or configuration-load time.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/ruleset.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/ruleset.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pattern definition failed validation at construction time.
    #[error("Invalid pattern field '{field}': {message}")]
    InvalidPattern {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay ruleset failed validation at construction time.
    #[error("Invalid ruleset field '{field}': {message}")]
    InvalidRuleset {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for configuration loading and binding.
//!
//! Responsibilities:
//! - Define error variants for every configuration loading failure.
//! - Map dotenv errors into secret-safe variants.
//!
//! Does NOT handle:
//! - Absent keys: point lookups return `None`, never an error.
//!
//! Invariants:
//! - Errors carry enough context for debugging (key names, section paths).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while loading or binding configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Two environment variables, or two candidates of the same variable,
    /// expanded to the same hierarchical key (compared case-insensitively).
    ///
    /// Loading fails outright instead of letting one variable silently mask
    /// another; no partial table is returned.
    #[error("duplicate configuration key '{key}'")]
    DuplicateKey { key: String },

    /// A section's key/value pairs could not be deserialized onto the
    /// requested record type.
    #[error("failed to bind section '{section}': {message}")]
    Binding { section: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

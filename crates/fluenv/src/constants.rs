//! Centralized constants for the fluenv crate.
//!
//! This module contains the delimiter characters and well-known variable
//! names used across modules to avoid magic value duplication.

/// Delimiter between words in an environment variable name.
///
/// A doubled delimiter (`__`) is the conventional explicit section marker;
/// the expansion algorithm drops the empty segment it produces.
pub const KEY_DELIMITER: char = '_';

/// Separator between path segments in a hierarchical configuration key.
pub const PATH_SEPARATOR: char = ':';

/// Environment variable that disables `.env` loading when set to "true" or "1".
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

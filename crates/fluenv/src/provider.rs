//! Environment variable configuration source.
//!
//! Responsibilities:
//! - Take one snapshot of an environment source, filter it by prefix, and
//!   expand every surviving variable into the configuration table.
//! - Optionally populate the process environment from a `.env` file before
//!   the snapshot is taken.
//!
//! Does NOT handle:
//! - Key expansion itself (see keys.rs) or table semantics (see table.rs).
//! - Watching the environment for changes after a load.
//!
//! Invariants:
//! - Prefix comparison is ordinal and case-sensitive; the prefix is stripped
//!   from the front of the name only.
//! - A duplicate candidate key fails the whole load; no partial table leaks.
//! - `DOTENV_DISABLED` is checked before `dotenvy::dotenv()` is called.

use tracing::{debug, trace};

use crate::configuration::ConfigurationSource;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::ConfigError;
use crate::keys::expand_key;
use crate::table::ConfigMap;

/// Configuration source that expands environment variables into
/// hierarchical keys.
///
/// Register it with a [`ConfigurationBuilder`](crate::ConfigurationBuilder);
/// building triggers exactly one load from the process environment. For a
/// load against an explicit snapshot, use [`load_from`](Self::load_from).
#[derive(Debug, Clone, Default)]
pub struct EnvConfigurationSource {
    prefix: String,
}

impl EnvConfigurationSource {
    /// Create a source that matches every environment variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that only matches variables starting with `prefix`.
    ///
    /// The prefix is compared case-sensitively and stripped from the front
    /// of the name before expansion. An empty prefix matches everything.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load variables from a `.env` file into the process environment, so
    /// they are part of the next snapshot.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to
    /// prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Build the configuration table from an explicit environment snapshot.
    ///
    /// Deterministic for a given (prefix, snapshot) pair: re-running the
    /// load over unchanged input produces the same table content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateKey`] when two variables (or two
    /// candidates of one variable) expand to the same key.
    pub fn load_from(&self, env: &dyn EnvSource) -> Result<ConfigMap, ConfigError> {
        let mut table = ConfigMap::new();
        let mut skipped = 0usize;

        for (name, value) in env.vars() {
            let raw_key = if self.prefix.is_empty() {
                name.as_str()
            } else {
                match name.strip_prefix(&self.prefix) {
                    Some(rest) => rest,
                    None => {
                        skipped += 1;
                        continue;
                    }
                }
            };

            trace!(variable = %name, raw_key, "expanding environment variable");
            for candidate in expand_key(raw_key) {
                table.insert_unique(candidate, value.clone())?;
            }
        }

        debug!(
            entries = table.len(),
            skipped,
            prefix = %self.prefix,
            "loaded environment configuration"
        );
        Ok(table)
    }
}

impl ConfigurationSource for EnvConfigurationSource {
    fn load(&self) -> Result<ConfigMap, ConfigError> {
        self.load_from(&ProcessEnv)
    }
}

//! Hierarchical configuration from environment variables.
//!
//! This crate exposes process environment variables as a case-insensitive,
//! colon-delimited hierarchical configuration store. A single variable name
//! such as `SECTION_A_VARIABLE_ONE` is expanded into every hierarchical
//! address it can be read by (`SECTIONA:VARIABLEONE` among others), so
//! consumers look configuration up by path or section instead of by the raw
//! variable name.
//!
//! The snapshot is taken once per load: nothing watches the environment
//! afterwards, and nothing is ever written back to it.

pub mod configuration;
mod constants;
pub mod env;
mod error;
mod keys;
mod provider;
mod table;

pub use configuration::{
    Configuration, ConfigurationBuilder, ConfigurationSection, ConfigurationSource,
};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::ConfigError;
pub use keys::{KeyCandidates, expand_key};
pub use provider::EnvConfigurationSource;
pub use table::ConfigMap;

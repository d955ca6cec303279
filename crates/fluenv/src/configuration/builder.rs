//! Configuration builder and the source registration boundary.

use tracing::debug;

use super::Configuration;
use crate::error::ConfigError;
use crate::table::ConfigMap;

/// A registered supplier of configuration entries.
///
/// Loading is snapshot-only: the builder calls `load` exactly once per
/// source per build, and the returned table is merged into the final
/// [`Configuration`].
pub trait ConfigurationSource {
    /// Build this source's key/value table from scratch.
    fn load(&self) -> Result<ConfigMap, ConfigError>;
}

/// Collects configuration sources and builds the final [`Configuration`].
///
/// Later sources override earlier ones key-by-key (case-insensitively).
/// Collision strictness applies *within* a single source's load, not across
/// sources, where overriding is the point of layering.
#[derive(Default)]
pub struct ConfigurationBuilder {
    sources: Vec<Box<dyn ConfigurationSource>>,
}

impl ConfigurationBuilder {
    /// Create a builder with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source. Sources load in registration order.
    pub fn add_source(mut self, source: impl ConfigurationSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Load every source and merge the results.
    ///
    /// # Errors
    ///
    /// The first source failure aborts the build; there is no partial
    /// configuration.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let mut merged = ConfigMap::new();
        for source in &self.sources {
            let table = source.load()?;
            for (key, value) in table.iter() {
                merged.set(key.to_string(), value.to_string());
            }
        }
        debug!(
            sources = self.sources.len(),
            entries = merged.len(),
            "built configuration"
        );
        Ok(Configuration::from_table(merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Vec<(&'static str, &'static str)>);

    impl ConfigurationSource for FixedSource {
        fn load(&self) -> Result<ConfigMap, ConfigError> {
            let mut table = ConfigMap::new();
            for (key, value) in &self.0 {
                table.insert_unique(key.to_string(), value.to_string())?;
            }
            Ok(table)
        }
    }

    struct FailingSource;

    impl ConfigurationSource for FailingSource {
        fn load(&self) -> Result<ConfigMap, ConfigError> {
            Err(ConfigError::DuplicateKey {
                key: "Broken".to_string(),
            })
        }
    }

    #[test]
    fn later_sources_override_earlier_ones() {
        let config = ConfigurationBuilder::new()
            .add_source(FixedSource(vec![("Shared:Key", "first"), ("Only:First", "1")]))
            .add_source(FixedSource(vec![("SHARED:KEY", "second")]))
            .build()
            .unwrap();

        assert_eq!(config.get("Shared:Key"), Some("second"));
        assert_eq!(config.get("Only:First"), Some("1"));
    }

    #[test]
    fn source_failure_aborts_the_build() {
        let result = ConfigurationBuilder::new()
            .add_source(FixedSource(vec![("Fine:Key", "ok")]))
            .add_source(FailingSource)
            .build();
        assert!(matches!(result, Err(ConfigError::DuplicateKey { .. })));
    }

    #[test]
    fn empty_builder_yields_empty_configuration() {
        let config = ConfigurationBuilder::new().build().unwrap();
        assert_eq!(config.iter().count(), 0);
        assert_eq!(config.get("Anything"), None);
    }
}

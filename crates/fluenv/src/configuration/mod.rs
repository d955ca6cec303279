//! Minimal hierarchical configuration host.
//!
//! Responsibilities:
//! - Collect configuration sources, trigger one load per source at build
//!   time, and merge the resulting tables.
//! - Expose point lookup by colon-delimited path, section sub-views, and
//!   structural binding of a section onto a record type.
//!
//! Does NOT handle:
//! - Producing key/value pairs (that is the sources' job) or watching for
//!   changes after build.
//!
//! Invariants:
//! - All key comparison is ordinal, ASCII case-insensitive.
//! - Absent keys read as `None`; absence is never an error.

mod bind;
mod builder;
mod section;

pub use builder::{ConfigurationBuilder, ConfigurationSource};
pub use section::ConfigurationSection;

use crate::table::ConfigMap;

/// Read-only hierarchical key/value store produced by
/// [`ConfigurationBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    table: ConfigMap,
}

impl Configuration {
    pub(crate) fn from_table(table: ConfigMap) -> Self {
        Self { table }
    }

    /// Look up a value by full hierarchical key, e.g. `"SectionA:VariableOne"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key)
    }

    /// A sub-view rooted at `path`, whose own keys are the remainder of
    /// matching full keys.
    ///
    /// Sections are cheap views; asking for a path with no matching keys is
    /// fine and simply yields an empty section.
    pub fn section<'a>(&'a self, path: &str) -> ConfigurationSection<'a> {
        ConfigurationSection::new(self, path.to_string())
    }

    /// Iterate over all `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter()
    }
}

//! Case-insensitive configuration table.
//!
//! Responsibilities:
//! - Store hierarchical key/value pairs with ordinal, ASCII
//!   case-insensitive key comparison.
//! - Offer a strict insert that reports duplicates instead of overwriting.
//!
//! Does NOT handle:
//! - Section views or binding (see configuration/).
//!
//! Invariants:
//! - Original key casing is preserved for enumeration; only the comparison
//!   folds case.
//! - `insert_unique` never replaces an existing entry.

use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: String,
}

/// Mapping from hierarchical key to text value, compared case-insensitively.
///
/// Built fresh on every load; it has no lifecycle beyond "constructed once,
/// read many times, discarded on reload".
#[derive(Debug, Clone, Default)]
pub struct ConfigMap {
    entries: HashMap<String, Entry>,
}

impl ConfigMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, failing if the key is already present.
    ///
    /// This is the fail-fast collision policy: ambiguous environment
    /// variable names surface at load time instead of one masking another.
    pub fn insert_unique(&mut self, key: String, value: String) -> Result<(), ConfigError> {
        match self.entries.entry(key.to_ascii_lowercase()) {
            MapEntry::Occupied(_) => Err(ConfigError::DuplicateKey { key }),
            MapEntry::Vacant(slot) => {
                slot.insert(Entry { key, value });
                Ok(())
            }
        }
    }

    /// Insert or replace a key/value pair.
    ///
    /// Used when merging tables from multiple sources, where later sources
    /// deliberately override earlier ones.
    pub fn set(&mut self, key: String, value: String) {
        self.entries
            .insert(key.to_ascii_lowercase(), Entry { key, value });
    }

    /// Look a key up case-insensitively. Absence is not an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    /// Iterate over `(key, value)` pairs with original key casing,
    /// in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

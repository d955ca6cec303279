//! Section sub-views over a configuration.

use serde::de::DeserializeOwned;

use super::Configuration;
use super::bind::bind_section;
use crate::constants::PATH_SEPARATOR;
use crate::error::ConfigError;

/// A sub-view of a [`Configuration`] rooted at a path prefix.
///
/// The section's own keys are the remainder of matching full keys after the
/// `path:` prefix; matching is case-insensitive, so `config.section("sectiona")`
/// sees the same entries as `config.section("SectionA")`.
#[derive(Debug, Clone)]
pub struct ConfigurationSection<'a> {
    config: &'a Configuration,
    path: String,
}

impl<'a> ConfigurationSection<'a> {
    pub(crate) fn new(config: &'a Configuration, path: String) -> Self {
        Self { config, path }
    }

    /// The path this section is rooted at.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a key relative to this section.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.config
            .get(&format!("{}{}{}", self.path, PATH_SEPARATOR, key))
    }

    /// A nested section rooted at `path:key`.
    pub fn section(&self, key: &str) -> ConfigurationSection<'a> {
        ConfigurationSection::new(
            self.config,
            format!("{}{}{}", self.path, PATH_SEPARATOR, key),
        )
    }

    /// All `(relative key, value)` pairs under this section, including ones
    /// nested more than one level deep, in unspecified order.
    pub fn pairs(&self) -> Vec<(&'a str, &'a str)> {
        let prefix_len = self.path.len() + 1;
        self.config
            .iter()
            .filter_map(|(key, value)| {
                strip_path_prefix(key, &self.path, prefix_len).map(|rest| (rest, value))
            })
            .collect()
    }

    /// Direct children only: pairs whose relative key has no further path
    /// separator. This is what structural binding consumes.
    pub fn leaf_pairs(&self) -> Vec<(&'a str, &'a str)> {
        let mut pairs = self.pairs();
        pairs.retain(|(key, _)| !key.contains(PATH_SEPARATOR));
        pairs
    }

    /// Whether this section has no keys at all.
    pub fn is_empty(&self) -> bool {
        let prefix_len = self.path.len() + 1;
        !self
            .config
            .iter()
            .any(|(key, _)| strip_path_prefix(key, &self.path, prefix_len).is_some())
    }

    /// Bind this section's direct key/value pairs onto a record type.
    ///
    /// Leaf keys are matched to field names ignoring ASCII case and the `_`
    /// separator, so an env-derived key `VARIABLEONE` binds the Rust field
    /// `variable_one`. When several keys match one field, a key equal to the
    /// field modulo case wins and remaining ties break on ordinal key order.
    /// Values are handed to serde as text; no type coercion happens here.
    ///
    /// Returns `Ok(None)` when the section has no keys (absence is not an
    /// error), and [`ConfigError::Binding`] when deserialization fails.
    pub fn bind<T: DeserializeOwned>(&self) -> Result<Option<T>, ConfigError> {
        bind_section(self)
    }
}

/// Strip `path` + separator from the front of `key`, case-insensitively.
fn strip_path_prefix<'k>(key: &'k str, path: &str, prefix_len: usize) -> Option<&'k str> {
    if key.len() < prefix_len || !key.is_char_boundary(prefix_len) {
        return None;
    }
    let (head, rest) = key.split_at(prefix_len);
    let (head_path, head_sep) = head.split_at(prefix_len - 1);
    (head_path.eq_ignore_ascii_case(path) && head_sep == ":").then_some(rest)
}

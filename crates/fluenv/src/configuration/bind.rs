//! Structural binding of a configuration section onto a record type.
//!
//! Responsibilities:
//! - Match a section's direct leaf keys to struct field names, ignoring
//!   ASCII case and the `_` separator, and drive serde deserialization over
//!   the matched pairs.
//!
//! Does NOT handle:
//! - Type coercion: values reach serde as text only.
//!
//! Invariants:
//! - An empty section binds to `None`, never to an error.

use serde::de::value::{Error as DeError, StringDeserializer};
use serde::de::{self, DeserializeOwned, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;

use super::section::ConfigurationSection;
use crate::error::ConfigError;

pub(crate) fn bind_section<T: DeserializeOwned>(
    section: &ConfigurationSection<'_>,
) -> Result<Option<T>, ConfigError> {
    let pairs = section.leaf_pairs();
    if pairs.is_empty() {
        return Ok(None);
    }
    T::deserialize(SectionDeserializer { pairs: &pairs })
        .map(Some)
        .map_err(|e| ConfigError::Binding {
            section: section.path().to_string(),
            message: e.to_string(),
        })
}

/// Pick the value for a struct field when several section keys match.
///
/// A key equal to the field name modulo ASCII case wins over one that only
/// matches after dropping `_` separators; remaining ties break on ordinal
/// key order, so the bound value never depends on table iteration order.
fn best_match<'p>(pairs: &[(&'p str, &'p str)], field: &str) -> Option<&'p str> {
    pairs
        .iter()
        .filter_map(|(key, value)| match_rank(key, field).map(|rank| (rank, *key, *value)))
        .min_by_key(|&(rank, key, _)| (rank, key))
        .map(|(_, _, value)| value)
}

fn match_rank(key: &str, field: &str) -> Option<u8> {
    if key.eq_ignore_ascii_case(field) {
        Some(0)
    } else if key_matches_field(key, field) {
        Some(1)
    } else {
        None
    }
}

/// Compare a configuration key with a struct field name, ignoring ASCII
/// case and `_`, so `VARIABLEONE` and `VariableOne` both match the Rust
/// field `variable_one`.
fn key_matches_field(key: &str, field: &str) -> bool {
    let mut k = key.chars().filter(|c| *c != '_');
    let mut f = field.chars().filter(|c| *c != '_');
    loop {
        match (k.next(), f.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => {}
            _ => return false,
        }
    }
}

struct SectionDeserializer<'a> {
    pairs: &'a [(&'a str, &'a str)],
}

impl<'de> de::Deserializer<'de> for SectionDeserializer<'_> {
    type Error = DeError;

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        // Present the section under the struct's own field names; keys with
        // no matching field are simply not offered.
        let entries = fields
            .iter()
            .filter_map(|field| {
                best_match(self.pairs, field).map(|value| (field.to_string(), value.to_string()))
            })
            .collect::<Vec<_>>();
        visitor.visit_map(PairMap {
            entries: entries.into_iter(),
            value: None,
        })
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        let entries = self
            .pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<Vec<_>>();
        visitor.visit_map(PairMap {
            entries: entries.into_iter(),
            value: None,
        })
    }

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct enum identifier ignored_any
    }
}

struct PairMap {
    entries: std::vec::IntoIter<(String, String)>,
    value: Option<String>,
}

impl<'de> MapAccess<'de> for PairMap {
    type Error = DeError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((key, value)) => {
                self.value = Some(value);
                let key_de: StringDeserializer<DeError> = key.into_deserializer();
                seed.deserialize(key_de).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        let value = self
            .value
            .take()
            .ok_or_else(|| de::Error::custom("value requested before key"))?;
        seed.deserialize(ValueDeserializer { value })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

/// Deserializer for a single text value. Only string-shaped targets (plus
/// `Option` and newtype wrappers) succeed; anything else is a binding error.
struct ValueDeserializer {
    value: String,
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = DeError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_string(self.value)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        enum identifier ignored_any
    }
}

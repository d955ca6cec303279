//! Environment variable sources.
//!
//! Responsibilities:
//! - Abstract "the set of environment variables" behind a trait so loads can
//!   run against an explicit snapshot instead of ambient process state.
//!
//! Does NOT handle:
//! - Key expansion or prefix filtering (see provider.rs).
//!
//! Invariants:
//! - A source is read in a single pass per load; the loader retains no
//!   reference to it afterwards.

/// A supplier of environment variable `(name, value)` pairs.
///
/// Implemented by [`ProcessEnv`] for the real process environment and by
/// [`MapEnv`] for tests or callers that want a pinned snapshot.
pub trait EnvSource {
    /// Enumerate all variables in unspecified order.
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_>;
}

/// Environment source backed by the actual process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(std::env::vars())
    }
}

/// In-memory environment source.
///
/// Useful in tests and wherever a load must be independent of (and unable to
/// mutate) the real process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: Vec<(String, String)>,
}

impl MapEnv {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from an iterator of name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add or replace a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.vars.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.into(),
            None => self.vars.push((name, value.into())),
        }
    }
}

impl EnvSource for MapEnv {
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.vars.iter().cloned())
    }
}

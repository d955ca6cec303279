//! Key expansion for environment variable names.
//!
//! Responsibilities:
//! - Turn one flat variable name into every hierarchical key it can be
//!   addressed by.
//!
//! Does NOT handle:
//! - Prefix stripping (see provider.rs) or table construction (see table.rs).
//!
//! Invariants:
//! - The raw key is always the first candidate, verbatim.
//! - Derived candidates never contain an empty path segment.
//! - Expansion is pure: no side effects, no shared state, safe to call from
//!   concurrent loads.

use crate::constants::{KEY_DELIMITER, PATH_SEPARATOR};

/// Iterator over the hierarchical key candidates for one raw variable name.
///
/// Candidate 0 is the raw key unchanged, which keeps names that already use
/// the doubled-delimiter section convention addressable once `__` maps onto
/// the path separator. After that, every split position in the
/// underscore-separated word list yields one candidate: the words before the
/// split joined into a section name, a `:`, then the words after the split
/// joined into a leaf name. `SECTION_A_VARIABLE_ONE` therefore also answers
/// to `SECTION:AVARIABLEONE`, `SECTIONA:VARIABLEONE` and
/// `SECTIONAVARIABLE:ONE`.
///
/// The iterator is finite and `Clone`; clone it (or call [`expand_key`]
/// again) to enumerate the candidates more than once.
#[derive(Debug, Clone)]
pub struct KeyCandidates<'a> {
    raw: &'a str,
    words: Vec<&'a str>,
    // 0 emits the raw key; i >= 1 splits the word list before words[i].
    next: usize,
}

/// Expand a raw, already prefix-stripped variable name into its candidates.
pub fn expand_key(raw: &str) -> KeyCandidates<'_> {
    let words = raw
        .split(KEY_DELIMITER)
        .filter(|w| !w.is_empty())
        .collect();
    KeyCandidates {
        raw,
        words,
        next: 0,
    }
}

impl KeyCandidates<'_> {
    fn total(&self) -> usize {
        // The raw key is always emitted, even when there are no words at all.
        self.words.len().max(1)
    }
}

impl Iterator for KeyCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let i = self.next;
        if i >= self.total() {
            return None;
        }
        self.next += 1;

        if i == 0 {
            return Some(self.raw.to_string());
        }

        let mut key = String::with_capacity(self.raw.len() + 1);
        for word in &self.words[..i] {
            key.push_str(word);
        }
        key.push(PATH_SEPARATOR);
        for word in &self.words[i..] {
            key.push_str(word);
        }
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.next.min(self.total());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KeyCandidates<'_> {}

impl std::iter::FusedIterator for KeyCandidates<'_> {}

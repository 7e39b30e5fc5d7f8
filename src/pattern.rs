//! Wildcard pattern matching for KEYS
//!
//! Supports the restricted wildcard shapes of the query protocol: `*`
//! (match all), `pre*` (prefix), `*sub*` (substring). A pattern that fits
//! none of these shapes matches no key at all unless the store is
//! configured to treat bare literals as exact matches.

use crate::error::{FlatKvError, Result};

/// A compiled KEYS pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `*`: matches every key
    Any,

    /// `*sub*`: matches keys containing the substring (the empty substring
    /// from `**` matches everything)
    Contains(String),

    /// `pre*`: matches keys starting with the prefix
    Prefix(String),

    /// Bare literal compiled under `literal_exact_match`; matches the one
    /// key equal to the pattern
    Exact(String),

    /// Any other shape (bare literal by default, leading-only `*`, inner
    /// `*` without a trailing one); matches no key
    Unsupported,
}

impl Pattern {
    /// Compile a raw pattern string
    ///
    /// Shapes are tried in order: `*`, `*sub*`, `pre*`. Anything else is a
    /// literal: with `literal_exact` a literal without any `*` matches
    /// exactly one key, otherwise it matches nothing. The empty pattern is
    /// rejected rather than matched against anything.
    pub fn compile(raw: &str, literal_exact: bool) -> Result<Pattern> {
        if raw.is_empty() {
            return Err(FlatKvError::Query("empty pattern".to_string()));
        }

        if raw == "*" {
            return Ok(Pattern::Any);
        }

        if raw.len() >= 2 && raw.starts_with('*') && raw.ends_with('*') {
            return Ok(Pattern::Contains(raw[1..raw.len() - 1].to_string()));
        }

        if let Some(prefix) = raw.strip_suffix('*') {
            return Ok(Pattern::Prefix(prefix.to_string()));
        }

        if literal_exact && !raw.contains('*') {
            return Ok(Pattern::Exact(raw.to_string()));
        }

        Ok(Pattern::Unsupported)
    }

    /// Whether the pattern matches the given key
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Contains(sub) => key.contains(sub.as_str()),
            Pattern::Prefix(prefix) => key.starts_with(prefix.as_str()),
            Pattern::Exact(literal) => key == literal,
            Pattern::Unsupported => false,
        }
    }
}

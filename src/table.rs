//! The in-memory key-value table
//!
//! An insertion-ordered collection of unique keys. All operations are
//! linear scans over a flat vector; the table positions reported by KEYS
//! and the line order of the data file both follow insertion order, so the
//! ordering here is user-visible state, not an implementation detail.

use crate::pattern::Pattern;

/// One key-value pair held by the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique identifier within the table
    pub key: String,

    /// Opaque value text
    pub value: String,
}

/// The full in-memory collection of entries
///
/// Invariant: no two entries share a key. An overwrite keeps the entry in
/// its original position; only a remove-then-insert moves a key to the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert the pair, or overwrite the value in place if the key exists
    pub fn upsert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        for entry in &mut self.entries {
            if entry.key == key {
                entry.value = value;
                return;
            }
        }
        self.entries.push(Entry { key, value });
    }

    /// Remove the pair stored under `key`; reports whether one was removed
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Keys matching `pattern`, each paired with its 1-based table position
    ///
    /// The position is the entry's place in the full table, not its rank
    /// among the matches: when only the fourth entry matches, it is listed
    /// as 4.
    pub fn keys_matching(&self, pattern: &Pattern) -> Vec<(usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| pattern.matches(&entry.key))
            .map(|(index, entry)| (index + 1, entry.key.as_str()))
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in table order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

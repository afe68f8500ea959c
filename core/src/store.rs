//! Key-unique string parameter store.
//!
//! # Design
//! One `ParamStore` backs each logical grouping on a client — request
//! headers, URL query parameters, and body parameters. Keys are unique
//! (last write wins) and iteration order is unspecified. Values are stored
//! exactly as the caller supplied them; any percent-encoding happens at
//! serialization time in the `encode` module, never here.

use std::collections::HashMap;

/// An unordered string-to-string map with last-write-wins semantics.
///
/// All operations are total — there is no removal and no error path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamStore {
    values: HashMap<String, String>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing any existing value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Snapshot of every entry. Order is unspecified.
    pub fn all_entries(&self) -> HashMap<String, String> {
        self.values.clone()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries without cloning. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ParamStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_get_returns_value() {
        let mut store = ParamStore::new();
        store.add("page", "2");
        assert_eq!(store.get("page"), Some("2"));
    }

    #[test]
    fn add_overwrites_existing_key() {
        let mut store = ParamStore::new();
        store.add("name", "first");
        store.add("name", "second");
        assert_eq!(store.get("name"), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_missing_key_is_none() {
        let store = ParamStore::new();
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn len_counts_distinct_keys() {
        let mut store = ParamStore::new();
        store.add("a", "1");
        store.add("b", "2");
        store.add("a", "3");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn all_entries_is_a_snapshot() {
        let mut store = ParamStore::new();
        store.add("k", "v");
        let snapshot = store.all_entries();
        store.add("k", "changed");
        assert_eq!(snapshot.get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn empty_store_reports_empty() {
        let store = ParamStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}

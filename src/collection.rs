// SPDX-License-Identifier: AGPL-3.0-or-later
//! Generic keyed record collection with uniqueness and rename semantics
//!
//! One `RecordCollection` instance backs each of the three datasets
//! (minerals, country profiles, users). Keys are unique; insertion order is
//! preserved for display but carries no meaning. The collection serializes
//! as a plain JSON object, so its on-disk shape is `{"<key>": <record>}`.

use crate::error::DataError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping from unique string keys to records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection<R> {
    records: IndexMap<String, R>,
}

impl<R> Default for RecordCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordCollection<R> {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Insert a record at `key`, rejecting duplicates
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if `key` is already present; the collection is
    /// left unchanged.
    pub fn create(&mut self, key: &str, record: R) -> Result<(), DataError> {
        if self.records.contains_key(key) {
            return Err(DataError::DuplicateKey(key.to_string()));
        }
        self.records.insert(key.to_string(), record);
        Ok(())
    }

    /// Replace the record under `old_key` with `record` under `new_key`
    ///
    /// This is an explicit delete-then-insert: when `old_key != new_key` the
    /// old entry is removed first, then `record` is installed at `new_key`.
    /// If `new_key` already held a record, that record is overwritten
    /// (last-write-wins). Observers relying on ordering must re-read the
    /// collection afterwards.
    pub fn rename_and_update(&mut self, old_key: &str, new_key: &str, record: R) {
        if old_key != new_key {
            self.records.shift_remove(old_key);
        }
        self.records.insert(new_key.to_string(), record);
    }

    /// Remove the record at `key`, returning whether a removal occurred
    ///
    /// Deleting an absent key is not an error; the collection is unchanged
    /// and `false` is returned.
    pub fn delete(&mut self, key: &str) -> bool {
        self.records.shift_remove(key).is_some()
    }

    /// Insert or overwrite a record without uniqueness checking
    ///
    /// Used for seeding defaults; mutating operations go through `create`
    /// and `rename_and_update`.
    pub fn insert(&mut self, key: &str, record: R) {
        self.records.insert(key.to_string(), record);
    }

    /// Get the record at `key`, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Iterate over `(key, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &R)> {
        self.records.iter()
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.records.keys()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a RecordCollection<R> {
    type Item = (&'a String, &'a R);
    type IntoIter = indexmap::map::Iter<'a, String, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_keys(c: &RecordCollection<u32>) -> Vec<String> {
        c.keys().cloned().collect()
    }

    #[test]
    fn test_create_rejects_duplicate() {
        let mut c = RecordCollection::new();
        c.create("alpha", 1).unwrap();

        let err = c.create("alpha", 2).unwrap_err();
        assert_eq!(err, DataError::DuplicateKey("alpha".into()));
        // Rejected create must not mutate
        assert_eq!(c.get("alpha"), Some(&1));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_rename_removes_old_and_installs_new() {
        let mut c = RecordCollection::new();
        c.create("alpha", 1).unwrap();

        c.rename_and_update("alpha", "beta", 2);

        assert!(!c.contains("alpha"));
        assert_eq!(c.get("beta"), Some(&2));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_rename_collision_is_last_write_wins() {
        let mut c = RecordCollection::new();
        c.create("alpha", 1).unwrap();
        c.create("beta", 2).unwrap();

        // Renaming alpha onto beta deletes alpha and overwrites beta.
        c.rename_and_update("alpha", "beta", 3);

        assert!(!c.contains("alpha"));
        assert_eq!(c.get("beta"), Some(&3));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_update_in_place_preserves_position() {
        let mut c = RecordCollection::new();
        c.create("alpha", 1).unwrap();
        c.create("beta", 2).unwrap();
        c.create("gamma", 3).unwrap();

        c.rename_and_update("beta", "beta", 20);

        assert_eq!(collect_keys(&c), vec!["alpha", "beta", "gamma"]);
        assert_eq!(c.get("beta"), Some(&20));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut c = RecordCollection::new();
        c.create("alpha", 1).unwrap();

        assert!(c.delete("alpha"));
        assert!(!c.delete("alpha"));
        assert!(!c.delete("never-existed"));
        assert!(c.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut c = RecordCollection::new();
        for key in ["cobalt", "lithium", "gold", "copper"] {
            c.create(key, 0).unwrap();
        }
        c.delete("lithium");

        assert_eq!(collect_keys(&c), vec!["cobalt", "gold", "copper"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut c = RecordCollection::new();
        c.create("alpha", 1).unwrap();
        c.create("beta", 2).unwrap();

        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"alpha":1,"beta":2}"#);

        let back: RecordCollection<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//! Persistent store - the single JSON document holding all three collections

use crate::types::AppData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted document inside the data directory
pub const STORE_FILE: &str = "mineral_app_data.json";

/// Reads and writes the single persisted `AppData` document
///
/// Single-process, single-writer: no locking, no versioning. Every save
/// rewrites the full document, which is O(total records) per mutation - an
/// accepted simplicity/consistency trade-off at tens of records.
pub struct PersistentStore {
    path: PathBuf,
}

impl PersistentStore {
    /// Create a store backed by an explicit file path
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store backed by the standard file name inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, synthesizing and persisting defaults if absent
    ///
    /// A missing file yields the seed collections and immediately writes
    /// them so the store exists thereafter. A malformed file is an error:
    /// falling back to defaults would overwrite user data on the next save.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, parsed, or (for the first-run
    /// default synthesis) written.
    pub fn load(&self) -> Result<AppData> {
        if !self.path.exists() {
            let data = AppData::default();
            self.save(&data)
                .context("Failed to persist the default dataset")?;
            tracing::info!("Created default store at {}", self.path.display());
            return Ok(data);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let data: AppData = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(data)
    }

    /// Serialize the full document and overwrite the store in one operation
    ///
    /// # Errors
    ///
    /// Fails if the parent directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self, data: &AppData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(data).context("Failed to serialize store")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_store_synthesizes_and_persists_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PersistentStore::in_dir(dir.path());

        let data = store.load().unwrap();

        assert!(store.path().exists(), "load must create the store file");
        let mineral_names: Vec<_> = data.minerals.keys().cloned().collect();
        assert_eq!(mineral_names, vec!["Cobalt", "Lithium", "Gold"]);
        let country_names: Vec<_> = data.countries.keys().cloned().collect();
        assert_eq!(country_names, vec!["South Africa", "Lesotho", "Swaziland"]);
        assert_eq!(data.users.len(), 3);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PersistentStore::in_dir(dir.path());

        let mut data = store.load().unwrap();
        data.minerals.delete("Lithium");
        store.save(&data).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, data);
    }

    #[test]
    fn test_disk_shape_uses_documented_section_names() {
        let dir = TempDir::new().unwrap();
        let store = PersistentStore::in_dir(dir.path());
        store.load().unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert!(doc.get("MineralData").is_some());
        assert!(doc.get("CountryProfiles").is_some());
        assert!(doc.get("Users").is_some());
        assert_eq!(
            doc["MineralData"]["Cobalt"],
            serde_json::json!({"Location": "Africa, DRC", "Production": 1200, "Color": "#1f77b4"})
        );
        assert_eq!(doc["Users"]["admin"]["role"], "Administrator");
    }

    #[test]
    fn test_missing_section_falls_back_to_its_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        std::fs::write(&path, r#"{"MineralData": {}, "CountryProfiles": {}}"#).unwrap();

        let data = PersistentStore::new(path).load().unwrap();

        assert!(data.minerals.is_empty());
        assert!(data.countries.is_empty());
        // Users section was absent, so it seeds.
        assert!(data.users.contains("admin"));
    }

    #[test]
    fn test_malformed_store_fails_fast() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = PersistentStore::new(path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}

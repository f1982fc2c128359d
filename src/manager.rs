// SPDX-License-Identifier: AGPL-3.0-or-later
//! Data manager - sole owner of the in-memory collections
//!
//! Every view reads through `data()` and mutates through the typed
//! operations here, so uniqueness, validation, and persistence live in one
//! place. After any successful mutating call returns, the store on disk
//! reflects the new in-memory state (write-through, no batching).

use crate::error::DataError;
use crate::store::PersistentStore;
use crate::types::{AppData, CountryRecord, MineralRecord, UserRecord};

/// Owns the three collections for the lifetime of the process
///
/// No other component holds a mutable reference; presentation layers get
/// read views and call back into these operations.
pub struct DataManager {
    data: AppData,
    store: PersistentStore,
}

impl DataManager {
    /// Load the store (or synthesize defaults) and take ownership of it
    ///
    /// # Errors
    ///
    /// Fails if the store exists but cannot be read or parsed.
    pub fn open(store: PersistentStore) -> anyhow::Result<Self> {
        let data = store.load()?;
        Ok(Self { data, store })
    }

    /// Read view of the current collections
    #[must_use]
    pub fn data(&self) -> &AppData {
        &self.data
    }

    // =========================================================================
    // Minerals
    // =========================================================================

    /// Add a mineral under `name`
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name or location or a malformed color,
    /// `DuplicateKey` if the name is taken, `Persistence` if the
    /// write-through save fails.
    pub fn add_mineral(&mut self, name: &str, record: MineralRecord) -> Result<(), DataError> {
        validate_key("mineral name", name)?;
        validate_key("location", &record.location)?;
        validate_color(&record.color)?;

        let snapshot = self.data.clone();
        self.data.minerals.create(name, record)?;
        self.persist(snapshot)
    }

    /// Update (and possibly rename) the mineral at `name`
    ///
    /// # Errors
    ///
    /// `NotFound` if `name` is absent, plus the `add_mineral` failures.
    pub fn update_mineral(
        &mut self,
        name: &str,
        new_name: &str,
        record: MineralRecord,
    ) -> Result<(), DataError> {
        validate_key("mineral name", new_name)?;
        validate_key("location", &record.location)?;
        validate_color(&record.color)?;
        if !self.data.minerals.contains(name) {
            return Err(DataError::NotFound(name.to_string()));
        }

        let snapshot = self.data.clone();
        self.data.minerals.rename_and_update(name, new_name, record);
        self.persist(snapshot)
    }

    /// Delete the mineral at `name`, returning whether a removal occurred
    ///
    /// Deleting an absent name is a no-op.
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-through save fails.
    pub fn delete_mineral(&mut self, name: &str) -> Result<bool, DataError> {
        let snapshot = self.data.clone();
        if !self.data.minerals.delete(name) {
            return Ok(false);
        }
        self.persist(snapshot)?;
        Ok(true)
    }

    // =========================================================================
    // Countries
    // =========================================================================

    /// Add a country profile under `name`
    ///
    /// # Errors
    ///
    /// Same taxonomy as `add_mineral`.
    pub fn add_country(&mut self, name: &str, record: CountryRecord) -> Result<(), DataError> {
        validate_key("country name", name)?;
        validate_color(&record.color)?;

        let snapshot = self.data.clone();
        self.data.countries.create(name, record)?;
        self.persist(snapshot)
    }

    /// Update (and possibly rename) the country at `name`
    ///
    /// # Errors
    ///
    /// Same taxonomy as `update_mineral`.
    pub fn update_country(
        &mut self,
        name: &str,
        new_name: &str,
        record: CountryRecord,
    ) -> Result<(), DataError> {
        validate_key("country name", new_name)?;
        validate_color(&record.color)?;
        if !self.data.countries.contains(name) {
            return Err(DataError::NotFound(name.to_string()));
        }

        let snapshot = self.data.clone();
        self.data.countries.rename_and_update(name, new_name, record);
        self.persist(snapshot)
    }

    /// Delete the country at `name`, returning whether a removal occurred
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-through save fails.
    pub fn delete_country(&mut self, name: &str) -> Result<bool, DataError> {
        let snapshot = self.data.clone();
        if !self.data.countries.delete(name) {
            return Ok(false);
        }
        self.persist(snapshot)?;
        Ok(true)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Add a user account under `username`
    ///
    /// # Errors
    ///
    /// `Validation` for a blank username or password, `DuplicateKey` if the
    /// username is taken, `Persistence` if the write-through save fails.
    pub fn add_user(&mut self, username: &str, record: UserRecord) -> Result<(), DataError> {
        validate_key("username", username)?;
        validate_key("password", &record.password)?;

        let snapshot = self.data.clone();
        self.data.users.create(username, record)?;
        self.persist(snapshot)
    }

    /// Update (and possibly rename) the account at `username`
    ///
    /// # Errors
    ///
    /// `NotFound` if `username` is absent, plus the `add_user` failures.
    pub fn update_user(
        &mut self,
        username: &str,
        new_username: &str,
        record: UserRecord,
    ) -> Result<(), DataError> {
        validate_key("username", new_username)?;
        validate_key("password", &record.password)?;
        if !self.data.users.contains(username) {
            return Err(DataError::NotFound(username.to_string()));
        }

        let snapshot = self.data.clone();
        self.data
            .users
            .rename_and_update(username, new_username, record);
        self.persist(snapshot)
    }

    /// Delete the account at `username`, returning whether a removal occurred
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-through save fails.
    pub fn delete_user(&mut self, username: &str) -> Result<bool, DataError> {
        let snapshot = self.data.clone();
        if !self.data.users.delete(username) {
            return Ok(false);
        }
        self.persist(snapshot)?;
        Ok(true)
    }

    // =========================================================================
    // Write-through
    // =========================================================================

    /// Save the full document; on failure, restore `snapshot`
    ///
    /// Memory and durable store must never diverge, so a failed save rolls
    /// the in-memory state back and reports that the action did not take
    /// effect.
    fn persist(&mut self, snapshot: AppData) -> Result<(), DataError> {
        match self.store.save(&self.data) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.data = snapshot;
                Err(DataError::Persistence(format!("{e:#}")))
            }
        }
    }
}

/// Reject blank required fields
fn validate_key(field: &'static str, value: &str) -> Result<(), DataError> {
    if value.trim().is_empty() {
        return Err(DataError::Validation {
            field,
            reason: "must not be blank".into(),
        });
    }
    Ok(())
}

/// Reject colors that are not #RRGGBB
fn validate_color(color: &str) -> Result<(), DataError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DataError::Validation {
            field: "color",
            reason: format!("expected #RRGGBB, got '{color}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use tempfile::TempDir;

    fn open_manager(dir: &TempDir) -> DataManager {
        DataManager::open(PersistentStore::in_dir(dir.path())).unwrap()
    }

    fn copper() -> MineralRecord {
        MineralRecord {
            location: "Africa, Zambia".into(),
            production: 500,
            color: "#ff0000".into(),
        }
    }

    #[test]
    fn test_mutation_is_written_through() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);

        manager.add_mineral("Copper", copper()).unwrap();

        // A fresh load must see the mutation: durable state tracks memory.
        let reloaded = PersistentStore::in_dir(dir.path()).load().unwrap();
        assert_eq!(reloaded, *manager.data());
        assert!(reloaded.minerals.contains("Copper"));
    }

    #[test]
    fn test_add_then_delete_restores_collection() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);
        let before = manager.data().minerals.clone();

        manager.add_mineral("Copper", copper()).unwrap();
        assert!(manager.delete_mineral("Copper").unwrap());

        assert_eq!(*manager.data(), PersistentStore::in_dir(dir.path()).load().unwrap());
        assert_eq!(manager.data().minerals, before);
    }

    #[test]
    fn test_duplicate_add_is_rejected_without_mutation() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);
        let before = manager.data().clone();

        let err = manager
            .add_mineral(
                "Cobalt",
                MineralRecord {
                    location: "elsewhere".into(),
                    production: 1,
                    color: "#000000".into(),
                },
            )
            .unwrap_err();

        assert_eq!(err, DataError::DuplicateKey("Cobalt".into()));
        assert_eq!(*manager.data(), before);
    }

    #[test]
    fn test_update_of_absent_record_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);

        let err = manager
            .update_mineral("Adamantium", "Adamantium", copper())
            .unwrap_err();

        assert_eq!(err, DataError::NotFound("Adamantium".into()));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);
        let before = manager.data().clone();

        assert!(!manager.delete_country("Atlantis").unwrap());
        assert_eq!(*manager.data(), before);
    }

    #[test]
    fn test_blank_name_and_bad_color_are_validation_errors() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);

        assert!(matches!(
            manager.add_mineral("  ", copper()),
            Err(DataError::Validation { field: "mineral name", .. })
        ));

        let mut blank_location = copper();
        blank_location.location = "   ".into();
        assert!(matches!(
            manager.add_mineral("Copper", blank_location.clone()),
            Err(DataError::Validation { field: "location", .. })
        ));
        assert!(matches!(
            manager.update_mineral("Cobalt", "Cobalt", blank_location),
            Err(DataError::Validation { field: "location", .. })
        ));

        let mut bad = copper();
        bad.color = "red".into();
        assert!(matches!(
            manager.add_mineral("Copper", bad),
            Err(DataError::Validation { field: "color", .. })
        ));
    }

    #[test]
    fn test_user_rename_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let mut manager = open_manager(&dir);

        let record = UserRecord {
            password: "pw".into(),
            role: Role::Researcher,
        };
        manager.add_user("alice", record.clone()).unwrap();
        manager.update_user("alice", "investor", record).unwrap();

        assert!(!manager.data().users.contains("alice"));
        // The pre-existing "investor" account has been overwritten.
        assert_eq!(manager.data().users.get("investor").unwrap().role, Role::Researcher);
    }

    #[test]
    fn test_failed_save_rolls_back_memory() {
        let dir = TempDir::new().unwrap();
        let data = PersistentStore::in_dir(dir.path()).load().unwrap();

        // Point the store somewhere unwritable: a path whose parent is a
        // regular file, so create_dir_all fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let broken = PersistentStore::new(blocker.join("store.json"));

        let mut manager = DataManager {
            data: data.clone(),
            store: broken,
        };

        let err = manager.add_mineral("Copper", copper()).unwrap_err();
        assert!(matches!(err, DataError::Persistence(_)));
        // Memory rolled back: the rejected mineral is gone.
        assert_eq!(*manager.data(), data);
    }
}

//! Thread-safe handle to a contact store.

use super::contact_store::ContactStore;
use crate::error::{StoreError, StoreResult};
use crate::export;
use crate::models::{Contact, ContactUpdate, Country, Gender};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable handle sharing one [`ContactStore`] across threads.
///
/// Every operation runs under a single read-write lock: lookups take the
/// read lock, mutations the write lock. Contacts carry no version, so this
/// lock is what keeps a concurrent update and delete of the same ID from
/// racing. Cloning the handle is cheap and all clones see the same store.
#[derive(Clone, Default)]
pub struct SharedContactStore {
    inner: Arc<RwLock<ContactStore>>,
}

impl SharedContactStore {
    /// Wrap an existing store.
    pub fn new(store: ContactStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Create a contact under the write lock.
    pub fn create(
        &self,
        name: impl Into<String>,
        phone_number: &str,
        country: Country,
        gender: Gender,
    ) -> StoreResult<Contact> {
        self.write()?.create(name, phone_number, country, gender)
    }

    /// Copy of the contact with `id`.
    pub fn read(&self, id: impl AsRef<str>) -> StoreResult<Contact> {
        self.read_guard()?.read(id)
    }

    /// Apply one field update under the write lock.
    pub fn update(&self, id: impl AsRef<str>, update: ContactUpdate) -> StoreResult<Contact> {
        self.write()?.update(id, update)
    }

    /// Remove the contact with `id`.
    pub fn delete(&self, id: impl AsRef<str>) -> StoreResult<()> {
        self.write()?.delete(id)
    }

    /// Number of live contacts.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read_guard()?.count())
    }

    /// Copies of all contacts in store order.
    pub fn list(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.read_guard()?.list())
    }

    /// Export a snapshot of the store.
    ///
    /// The records are copied under the read lock and the file is written
    /// after it is released, so slow disks never block other callers.
    pub fn export(&self, destination_name: &str) -> StoreResult<PathBuf> {
        let (records, dir) = {
            let store = self.read_guard()?;
            (store.export_records(), store.export_dir().to_path_buf())
        };
        let path = export::export_path(&dir, destination_name);
        export::write_records(&path, &records)?;
        tracing::info!(
            "Exported {} contacts to {}",
            records.len(),
            path.display()
        );
        Ok(path)
    }

    /// Import an export file; all-or-nothing.
    pub fn import(&self, path: &Path) -> StoreResult<usize> {
        self.write()?.import(path)
    }

    fn read_guard(&self) -> StoreResult<RwLockReadGuard<'_, ContactStore>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, ContactStore>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl From<ContactStore> for SharedContactStore {
    fn from(store: ContactStore) -> Self {
        Self::new(store)
    }
}

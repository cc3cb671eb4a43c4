//! In-memory contact store.

use crate::config::Config;
use crate::domain::{ContactId, IdGenerator, PhoneNumber, UuidIdGenerator};
use crate::error::{StoreError, StoreResult};
use crate::export::{self, ExportRecord};
use crate::models::{Contact, ContactUpdate, Country, Gender};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Owns an ordered collection of contacts keyed by ID.
///
/// At most one live contact exists per ID. Records are kept in insertion
/// order, which is also the order of [`list`](Self::list) and exports.
/// Every accessor returns clones; the stored records can only change through
/// [`update`](Self::update).
///
/// # Example
///
/// ```
/// use contact_store::{ContactStore, ContactUpdate, Country, Gender};
///
/// let mut store = ContactStore::new();
/// let reem = store
///     .create("Reem Rashed", "0795432212", Country::Jordan, Gender::Female)
///     .unwrap();
///
/// store
///     .update(reem.id(), ContactUpdate::PhoneNumber("0785907266".into()))
///     .unwrap();
/// assert_eq!(store.read(reem.id()).unwrap().phone_number().as_str(), "0785907266");
///
/// store.delete(reem.id()).unwrap();
/// assert!(store.read(reem.id()).unwrap_err().is_not_found());
/// assert_eq!(store.count(), 0);
/// ```
pub struct ContactStore {
    contacts: Vec<Contact>,
    id_generator: Box<dyn IdGenerator>,
    max_id_attempts: u32,
    export_dir: PathBuf,
}

impl ContactStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty store using the export directory and ID retry limit
    /// from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            contacts: Vec::new(),
            id_generator: Box::new(UuidIdGenerator),
            max_id_attempts: config.max_id_attempts.max(1),
            export_dir: config.export_dir.clone(),
        }
    }

    /// Replace the identifier source.
    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Box::new(id_generator);
        self
    }

    /// Directory that [`export`](Self::export) writes into.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Add a new contact.
    ///
    /// The phone number is validated before an ID is allocated. `name` is
    /// stored exactly as given.
    ///
    /// # Errors
    ///
    /// - `InvalidPhoneNumber` if `phone_number` fails validation
    /// - `IdentifierGenerationFailed` if no unused ID could be generated
    pub fn create(
        &mut self,
        name: impl Into<String>,
        phone_number: &str,
        country: Country,
        gender: Gender,
    ) -> StoreResult<Contact> {
        let phone_number = PhoneNumber::new(phone_number).map_err(|e| {
            tracing::warn!("Rejected contact: {}", e);
            StoreError::from(e)
        })?;
        let id = self.allocate_id()?;

        let contact = Contact::new(id, name.into(), phone_number, country, gender);
        self.contacts.push(contact.clone());

        tracing::info!(
            "Contact created: id={}, name={}",
            contact.id(),
            contact.name()
        );
        Ok(contact)
    }

    /// Look up a contact by exact ID.
    pub fn read(&self, id: impl AsRef<str>) -> StoreResult<Contact> {
        let id = id.as_ref();
        tracing::debug!("Reading contact: id={}", id);
        self.contacts
            .iter()
            .find(|c| c.id().as_str() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Replace one field of an existing contact.
    ///
    /// Nothing is written unless the whole update is valid.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has `id`
    /// - `InvalidPhoneNumber` for a `PhoneNumber` update that fails validation
    pub fn update(&mut self, id: impl AsRef<str>, update: ContactUpdate) -> StoreResult<Contact> {
        let id = id.as_ref();
        let index = self.position(id)?;
        let field = update.field();

        // Validate before borrowing the record mutably
        let update = match update {
            ContactUpdate::PhoneNumber(raw) => {
                let phone = PhoneNumber::new(raw).map_err(|e| {
                    tracing::warn!("Rejected update to {}: {}", id, e);
                    StoreError::from(e)
                })?;
                ValidUpdate::PhoneNumber(phone)
            }
            ContactUpdate::Name(name) => ValidUpdate::Name(name),
            ContactUpdate::Gender(gender) => ValidUpdate::Gender(gender),
            ContactUpdate::Country(country) => ValidUpdate::Country(country),
        };

        let contact = &mut self.contacts[index];
        match update {
            ValidUpdate::Name(name) => contact.set_name(name),
            ValidUpdate::PhoneNumber(phone) => contact.set_phone_number(phone),
            ValidUpdate::Gender(gender) => contact.set_gender(gender),
            ValidUpdate::Country(country) => contact.set_country(country),
        }

        tracing::info!("Contact updated: id={}, field={}", id, field);
        Ok(contact.clone())
    }

    /// Remove a contact permanently.
    pub fn delete(&mut self, id: impl AsRef<str>) -> StoreResult<()> {
        let id = id.as_ref();
        let index = self.position(id)?;
        // `remove` rather than `swap_remove`: iteration order is insertion order
        self.contacts.remove(index);
        tracing::info!("Contact deleted: id={}", id);
        Ok(())
    }

    /// Number of live contacts.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether a live contact has `id`.
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        self.contacts.iter().any(|c| c.id().as_str() == id)
    }

    /// Copies of every contact, in insertion order.
    pub fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Write every contact to `<export_dir>/<destination_name>.json`.
    ///
    /// The file is replaced atomically; on failure any existing file at the
    /// destination is left as it was. Returns the path written.
    pub fn export(&self, destination_name: &str) -> StoreResult<PathBuf> {
        let path = export::export_path(&self.export_dir, destination_name);
        self.export_to(&path)?;
        Ok(path)
    }

    /// Write every contact to an explicit path.
    pub fn export_to(&self, path: &Path) -> StoreResult<()> {
        let records = self.export_records();
        export::write_records(path, &records)?;
        tracing::info!(
            "Exported {} contacts to {}",
            records.len(),
            path.display()
        );
        Ok(())
    }

    /// Append the contacts stored in an export file.
    ///
    /// Either every record is added or none is. Returns the number added.
    ///
    /// # Errors
    ///
    /// - `Io` / `Serialization` if the file cannot be read or parsed
    /// - `InvalidPhoneNumber` / `InvalidIdentifier` for an invalid record
    /// - `IdentifierCollision` if a record's ID is already live or repeats
    ///   within the file
    pub fn import(&mut self, path: &Path) -> StoreResult<usize> {
        let records = export::read_records(path)?;

        let mut seen: HashSet<ContactId> =
            self.contacts.iter().map(|c| c.id().clone()).collect();
        let mut incoming = Vec::with_capacity(records.len());

        for record in records {
            let id = ContactId::new(record.contact_id)?;
            let phone_number = PhoneNumber::new(record.contact_number)?;
            if !seen.insert(id.clone()) {
                tracing::warn!("Import rejected: duplicate id={}", id);
                return Err(StoreError::IdentifierCollision { id });
            }
            incoming.push(Contact::new(
                id,
                record.name,
                phone_number,
                record.country,
                record.gender,
            ));
        }

        let added = incoming.len();
        self.contacts.extend(incoming);
        tracing::info!("Imported {} contacts from {}", added, path.display());
        Ok(added)
    }

    pub(crate) fn export_records(&self) -> Vec<ExportRecord> {
        self.contacts.iter().map(ExportRecord::from).collect()
    }

    /// Draw IDs until one is unused, up to `max_id_attempts` draws.
    fn allocate_id(&self) -> StoreResult<ContactId> {
        for attempt in 1..=self.max_id_attempts {
            let candidate = self.id_generator.generate();
            match self.ensure_unused(candidate) {
                Ok(id) => return Ok(id),
                Err(StoreError::IdentifierCollision { id }) => {
                    tracing::debug!(
                        "Generated id {} already in use (attempt {}/{})",
                        id,
                        attempt,
                        self.max_id_attempts
                    );
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(
            "Giving up on id generation after {} attempts",
            self.max_id_attempts
        );
        Err(StoreError::IdentifierGenerationFailed {
            attempts: self.max_id_attempts,
        })
    }

    fn ensure_unused(&self, id: ContactId) -> StoreResult<ContactId> {
        if self.contains(&id) {
            return Err(StoreError::IdentifierCollision { id });
        }
        Ok(id)
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.contacts
            .iter()
            .position(|c| c.id().as_str() == id)
            .ok_or_else(|| StoreError::not_found(id))
    }
}

/// An update whose value has passed validation.
enum ValidUpdate {
    Name(String),
    PhoneNumber(PhoneNumber),
    Gender(Gender),
    Country(Country),
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts)
            .field("max_id_attempts", &self.max_id_attempts)
            .field("export_dir", &self.export_dir)
            .finish_non_exhaustive()
    }
}

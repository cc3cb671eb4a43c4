//! Contact Store - an in-memory contact record store.
//!
//! Records are created, read, updated and deleted through an explicitly
//! constructed [`ContactStore`], validated on the way in, and exported as
//! JSON.
//!
//! # Architecture
//!
//! - **domain**: Value objects (contact IDs, phone numbers) and the ID generator
//! - **models**: The contact record, its enums, and single-field updates
//! - **store**: The store itself and a thread-safe shared handle
//! - **export**: JSON record format and atomic file writes
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use config::Config;
pub use domain::{ContactId, IdGenerator, PhoneNumber, UuidIdGenerator};
pub use error::{ConfigError, ConfigResult, StoreError, StoreResult};
pub use export::ExportRecord;
pub use models::{Contact, ContactField, ContactUpdate, Country, Gender};
pub use store::{ContactStore, SharedContactStore};

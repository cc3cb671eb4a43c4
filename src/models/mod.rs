//! Data models for the contact store.

pub mod contact;
pub mod update;

pub use contact::{Contact, Country, Gender, ParseEnumError, DEFAULT_NAME};
pub use update::{ContactField, ContactUpdate};

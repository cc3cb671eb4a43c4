//! Single-field update requests.

use super::contact::{Country, Gender};
use std::fmt;

/// Selector naming which field of a contact an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    PhoneNumber,
    Gender,
    Country,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::Name => "NAME",
            ContactField::PhoneNumber => "PHONE_NUMBER",
            ContactField::Gender => "GENDER",
            ContactField::Country => "COUNTRY",
        };
        f.write_str(name)
    }
}

/// A replacement value for exactly one contact field.
///
/// The variant fixes both the target field and the value's type, so a
/// gender can never be written into the phone number slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUpdate {
    Name(String),
    /// Validated by the store before anything is written
    PhoneNumber(String),
    Gender(Gender),
    Country(Country),
}

impl ContactUpdate {
    /// The field this update replaces.
    pub fn field(&self) -> ContactField {
        match self {
            ContactUpdate::Name(_) => ContactField::Name,
            ContactUpdate::PhoneNumber(_) => ContactField::PhoneNumber,
            ContactUpdate::Gender(_) => ContactField::Gender,
            ContactUpdate::Country(_) => ContactField::Country,
        }
    }
}

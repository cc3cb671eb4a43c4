//! Contact model and its enumerated fields.

use crate::domain::{ContactId, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name given to imported records that carry no `name` key.
pub const DEFAULT_NAME: &str = "Jane Deo";

/// Country a contact belongs to.
///
/// Serialized as its canonical upper-case name (`"SAUDI_ARABIA"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Country {
    #[default]
    Jordan,
    SaudiArabia,
    Egypt,
}

impl Country {
    /// Every variant, in declaration order.
    pub const ALL: [Country; 3] = [Country::Jordan, Country::SaudiArabia, Country::Egypt];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Jordan => "JORDAN",
            Country::SaudiArabia => "SAUDI_ARABIA",
            Country::Egypt => "EGYPT",
        }
    }
}

/// Gender of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    /// Every variant, in declaration order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// Error returned when parsing a `Country` or `Gender` from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "country",
                value: s.to_string(),
            })
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

/// A single contact record.
///
/// Fields are private: a `Contact` obtained from the store is a copy, and
/// the only way to change the stored record is `ContactStore::update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(rename = "contact_id")]
    id: ContactId,

    name: String,

    #[serde(rename = "contact_number")]
    phone_number: PhoneNumber,

    country: Country,

    gender: Gender,
}

impl Contact {
    pub(crate) fn new(
        id: ContactId,
        name: String,
        phone_number: PhoneNumber,
        country: Country,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            country,
            gender,
        }
    }

    /// Store-assigned identifier
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_phone_number(&mut self, phone_number: PhoneNumber) {
        self.phone_number = phone_number;
    }

    pub(crate) fn set_country(&mut self, country: Country) {
        self.country = country;
    }

    pub(crate) fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }
}

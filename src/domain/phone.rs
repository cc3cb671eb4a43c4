//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Human-readable description of the accepted format, carried in errors.
pub const PHONE_PATTERN_DESCRIPTION: &str =
    "10 digits starting with 07 then 7, 8 or 9 (07[789]XXXXXXX)";

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^07[789][0-9]{7}$").expect("phone pattern is a valid regex"));

/// A validated mobile phone number.
///
/// Only ten-digit numbers of the form `07[789]XXXXXXX` are accepted.
/// Input is never trimmed or reformatted: what validates is what is stored.
///
/// # Example
///
/// ```
/// use contact_store::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0795432212").unwrap();
/// assert_eq!(phone.as_str(), "0795432212");
/// assert!(PhoneNumber::new("0098877").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneNumber` with the rejected value
    /// if the number does not match the pattern.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhoneNumber {
                value: phone,
                expected: PHONE_PATTERN_DESCRIPTION,
            });
        }

        Ok(Self(phone))
    }

    /// Check a candidate number against the pattern without constructing a value.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("0795432212").unwrap();
        assert_eq!(phone.as_str(), "0795432212");
    }

    #[test]
    fn test_phone_accepts_each_operator_prefix() {
        assert!(PhoneNumber::new("0771234567").is_ok());
        assert!(PhoneNumber::new("0785907266").is_ok());
        assert!(PhoneNumber::new("0791234567").is_ok());
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("0098877").is_err());
        // wrong third digit
        assert!(PhoneNumber::new("0761234567").is_err());
        // too short / too long
        assert!(PhoneNumber::new("079123456").is_err());
        assert!(PhoneNumber::new("07912345678").is_err());
        // non-digit tail
        assert!(PhoneNumber::new("079123456x").is_err());
        assert!(PhoneNumber::new("079-123-456").is_err());
    }

    #[test]
    fn test_phone_does_not_trim() {
        assert!(PhoneNumber::new(" 0795432212").is_err());
        assert!(PhoneNumber::new("0795432212\n").is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are \d in Unicode mode but not accepted here
        assert!(PhoneNumber::new("079٥٤٣٢٢١٢").is_err());
    }

    #[test]
    fn test_phone_error_carries_value_and_pattern() {
        match PhoneNumber::new("0098877") {
            Err(ValidationError::InvalidPhoneNumber { value, expected }) => {
                assert_eq!(value, "0098877");
                assert_eq!(expected, PHONE_PATTERN_DESCRIPTION);
            }
            other => panic!("Expected InvalidPhoneNumber, got: {:?}", other),
        }
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("0785907266").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0785907266\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}

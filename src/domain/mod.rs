//! Domain value objects and types.
//!
//! Type-safe wrappers for contact IDs and phone numbers, plus the short ID
//! generator. Value objects validate at construction time so invalid data
//! never reaches the store.

pub mod contact_id;
pub mod errors;
pub mod id_generator;
pub mod phone;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use id_generator::{IdGenerator, UuidIdGenerator, SHORT_ID_LEN};
pub use phone::{PhoneNumber, PHONE_PATTERN_DESCRIPTION};

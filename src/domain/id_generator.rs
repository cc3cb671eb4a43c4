//! Short identifier generation.

use super::contact_id::ContactId;
use uuid::Uuid;

/// Number of characters kept from the reversed UUID.
pub const SHORT_ID_LEN: usize = 4;

/// Produces candidate identifiers for new contacts.
///
/// Implementations make no uniqueness promise; the store checks each
/// candidate against its live records and asks again on a collision.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh candidate identifier.
    fn generate(&self) -> ContactId;
}

/// Default generator: a random v4 UUID, reversed, cut to four characters
/// and upper-cased.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> ContactId {
        shorten(&Uuid::new_v4().to_string())
    }
}

/// Reverse `source`, keep the first [`SHORT_ID_LEN`] characters, upper-case them.
fn shorten(source: &str) -> ContactId {
    let short: String = source
        .chars()
        .rev()
        .take(SHORT_ID_LEN)
        .collect::<String>()
        .to_uppercase();
    // The hyphenated UUID form is 36 characters, so `short` is never empty.
    ContactId(short)
}

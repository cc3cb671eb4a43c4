//! Contact storage.
//!
//! [`ContactStore`] is the single-threaded owner of the records;
//! [`SharedContactStore`] wraps one behind a read-write lock for callers
//! that need to share it.

mod contact_store;
mod shared;

pub use contact_store::ContactStore;
pub use shared::SharedContactStore;

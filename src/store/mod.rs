//! Key/value persistence with an in-memory mirror.
//!
//! Every logical key maps to one JSON document in a [`StorageBackend`]. The
//! [`Store`] reads a key through on first access, then serves it from the
//! mirror; every setter writes through synchronously. Storage failures are
//! logged and never reach callers.

pub mod backend;
pub mod key;
pub mod persisted;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use key::{keys, StateKey};
pub use persisted::{Store, StoredValue, SubscriptionId};

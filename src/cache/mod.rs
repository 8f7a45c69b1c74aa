//! Persistent storage for generated descriptions
//!
//! Entries live in an injected [`KeyValueStore`] as JSON `{text, writtenAt}`
//! documents under namespaced keys. Nothing is held in memory between calls;
//! the store is the single source of truth. Freshness is decided on read, so
//! expired entries stay around and can be served when the generator is down.

mod entry;
mod file_store;
mod key;
mod store;

pub use entry::{CacheEntry, EntryState};
pub use file_store::FileStore;
pub use key::{normalize, CacheKey};
pub use store::{KeyValueStore, MemoryStore, StoreError};

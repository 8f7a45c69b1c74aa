//! candleblurb library
//!
//! Cache-first generated descriptions for storefront categories, with the
//! store and the generator injected so both can be swapped out in tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod describe;
pub mod generate;
pub mod logger;

pub use cache::{CacheEntry, CacheKey, EntryState, FileStore, KeyValueStore, MemoryStore};
pub use config::{GeneratorConfig, TextCacheConfig};
pub use describe::{fallback_text, TextCache};
pub use generate::{ChatClient, GenerateError, TextGenerator};

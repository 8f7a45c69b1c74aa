//! Cache-first category descriptions
//!
//! Provides [`TextCache`], which answers description requests from the store
//! when it can, calls the generator when the entry is missing or expired, and
//! degrades to expired text or a synthesized sentence when generation fails.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheKey, EntryState, KeyValueStore, StoreError};
use crate::config::TextCacheConfig;
use crate::generate::TextGenerator;

/// Deterministic description used when nothing is cached and generation fails
pub fn fallback_text(category: &str, hint: u32) -> String {
    format!(
        "Explore our handcrafted {} collection: {} unique designs, each poured by hand.",
        category, hint
    )
}

/// Cache-first fetcher for generated category descriptions
///
/// Holds no state of its own between calls; every read and write goes through
/// the injected store. Concurrent calls for the same category are not
/// coordinated and may both hit the generator, in which case the last write
/// wins.
#[derive(Clone)]
pub struct TextCache {
    store: Arc<dyn KeyValueStore>,
    generator: Arc<dyn TextGenerator>,
    config: TextCacheConfig,
}

impl TextCache {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        generator: Arc<dyn TextGenerator>,
        config: TextCacheConfig,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    /// Returns the store key used for `category`
    pub fn key_for(&self, category: &str) -> CacheKey {
        CacheKey::new(&self.config.namespace, category)
    }

    /// Fetches a description for a category
    ///
    /// # Arguments
    /// * `category` - Free-form category label; normalized for the cache key
    /// * `hint` - Item count, only used in the fallback sentence
    ///
    /// # Behavior
    /// - Returns a fresh cached entry without calling the generator
    /// - Otherwise generates, stores and returns a new description
    /// - On generation failure, returns the expired entry if there is one
    /// - Without any entry, returns [`fallback_text`] and writes nothing
    pub async fn fetch_description(&self, category: &str, hint: u32) -> String {
        let key = self.key_for(category);

        let cached = self.read_entry(&key);
        if let Some(ref entry) = cached {
            if entry.is_fresh(self.config.ttl) {
                debug!(%key, "description cache hit");
                return entry.text.clone();
            }
        }

        debug!(%key, stale = cached.is_some(), "description cache miss");

        match self.generator.generate(category).await {
            Ok(text) => {
                self.write_entry(&key, &CacheEntry::new(text.as_str()));
                text
            }
            Err(e) => match cached {
                Some(entry) => {
                    warn!(%key, error = %e, "generation failed, serving expired description");
                    entry.text
                }
                None => {
                    warn!(%key, error = %e, "generation failed, using fallback description");
                    fallback_text(category, hint)
                }
            },
        }
    }

    /// Reports whether a category's entry is absent, fresh or stale
    pub fn entry_state(&self, category: &str) -> EntryState {
        let key = self.key_for(category);
        EntryState::classify(self.read_entry(&key), Utc::now(), self.config.ttl)
    }

    /// Deletes every entry under this cache's namespace
    ///
    /// Keys outside the namespace are left alone. Failures are logged and
    /// otherwise ignored.
    pub fn clear_all(&self) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "could not list stored descriptions");
                return;
            }
        };

        for key in keys
            .iter()
            .filter(|key| key.starts_with(&self.config.namespace))
        {
            if let Err(e) = self.store.delete(key) {
                warn!(key = %key, error = %e, "could not delete stored description");
            }
        }
    }

    /// Fetches descriptions for all categories concurrently
    ///
    /// Each fetch degrades on its own, so one failing category never affects
    /// the others.
    pub async fn prewarm<I, S>(&self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories: Vec<S> = categories.into_iter().collect();
        let fetches = categories
            .iter()
            .map(|category| self.fetch_description(category.as_ref(), 0));
        futures::future::join_all(fetches).await;
    }

    /// Reads and parses an entry; unreadable or corrupt slots count as absent
    fn read_entry(&self, key: &CacheKey) -> Option<CacheEntry> {
        let raw = match self.store.get(key.as_str()) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(%key, error = %e, "could not read stored description");
                return None;
            }
        };

        match CacheEntry::from_json(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(%key, error = %e, "ignoring corrupt stored description");
                None
            }
        }
    }

    /// Persists an entry; a failed write only skips caching
    fn write_entry(&self, key: &CacheKey, entry: &CacheEntry) {
        if let Err(e) = self.try_write_entry(key, entry) {
            warn!(%key, error = %e, "could not store description");
        }
    }

    fn try_write_entry(&self, key: &CacheKey, entry: &CacheEntry) -> Result<(), StoreError> {
        let json = entry.to_json()?;
        self.store.set(key.as_str(), &json)
    }
}

//! Cached description entries

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A generated description as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    /// The generated text
    pub text: String,
    /// When the entry was stored, persisted as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub written_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self::written_at(text, Utc::now())
    }

    /// Creates an entry with an explicit write timestamp
    pub fn written_at(text: impl Into<String>, written_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            written_at,
        }
    }

    /// Whether the entry is still fresh at `now` for the given TTL
    ///
    /// Fresh means strictly younger than the TTL: an entry exactly `ttl` old
    /// is already stale.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.written_at < ttl
    }

    /// Whether the entry is still fresh right now
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.is_fresh_at(Utc::now(), ttl)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// What a category's slot in the store currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    Absent,
    Fresh(CacheEntry),
    Stale(CacheEntry),
}

impl EntryState {
    /// Classifies an optional entry against the TTL at `now`
    pub fn classify(entry: Option<CacheEntry>, now: DateTime<Utc>, ttl: Duration) -> Self {
        match entry {
            None => EntryState::Absent,
            Some(entry) if entry.is_fresh_at(now, ttl) => EntryState::Fresh(entry),
            Some(entry) => EntryState::Stale(entry),
        }
    }

    /// Short lowercase label used by the CLI
    pub fn label(&self) -> &'static str {
        match self {
            EntryState::Absent => "absent",
            EntryState::Fresh(_) => "fresh",
            EntryState::Stale(_) => "stale",
        }
    }
}

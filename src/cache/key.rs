//! Cache key derivation
//!
//! Categories are normalized before use so that "Gift Sets" and "gift  sets"
//! share a slot. Leading and trailing whitespace is dropped, which means
//! "Gift " and "gift" collide as well. That collapsing is kept on purpose so
//! existing entries stay reachable; callers that need distinct slots for such
//! labels must pick distinct labels.

use std::fmt;

/// Normalizes a category label: trimmed, lowercased, whitespace runs as `_`
pub fn normalize(category: &str) -> String {
    category
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// A namespaced store key for one category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(namespace: &str, category: &str) -> Self {
        Self(format!("{}{}", namespace, normalize(category)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// In-memory description cache using DashMap
use crate::domain::text::normalize_key;
use dashmap::DashMap;

/// Result of looking a destination up in the description cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedDescription {
    /// Never queried.
    Absent,
    /// Queried before; `None` records a confirmed "no description".
    Known(Option<String>),
}

/// Session-wide memo of display-ready descriptions, keyed by normalized name.
///
/// Entries are never evicted. Each write replaces the whole value under the
/// key's shard lock, so concurrent writers can lose an update but never
/// interleave one.
#[derive(Debug, Default)]
pub struct DescriptionCache {
    map: DashMap<String, Option<String>>,
}

impl DescriptionCache {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> CachedDescription {
        match self.map.get(&normalize_key(name)) {
            Some(entry) => CachedDescription::Known(entry.value().clone()),
            None => CachedDescription::Absent,
        }
    }

    pub fn set(&self, name: &str, description: Option<String>) {
        self.map.insert(normalize_key(name), description);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

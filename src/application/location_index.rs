use crate::domain::text::normalize_key;
use crate::infrastructure::storage::dataset::{load_location_list, LocationList};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use tokio::sync::watch;
use tracing::{info, warn};

// normalized name -> name as written in the asset
#[derive(Debug, Default)]
struct LocationSets {
    cities: HashMap<String, String>,
    countries: HashMap<String, String>,
}

impl LocationSets {
    fn from_list(list: LocationList) -> Self {
        let index = |names: Vec<String>| {
            names
                .into_iter()
                .map(|name| (normalize_key(&name), name.trim().to_string()))
                .filter(|(key, _)| !key.is_empty())
                .collect::<HashMap<_, _>>()
        };
        Self {
            cities: index(list.cities),
            countries: index(list.countries),
        }
    }
}

/// Known city and country names.
///
/// Fail-closed: until a load succeeds every name is invalid. Callers that need
/// a trustworthy answer await [`LocationIndex::ready`] first, which resolves
/// once the first load attempt has finished, whether it succeeded or not.
#[derive(Debug)]
pub struct LocationIndex {
    sets: RwLock<LocationSets>,
    ready: watch::Sender<bool>,
    source: Option<PathBuf>,
}

impl LocationIndex {
    /// Empty index that will read `source` (or the embedded list) on [`load`](Self::load).
    pub fn new(source: Option<PathBuf>) -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            sets: RwLock::new(LocationSets::default()),
            ready,
            source,
        }
    }

    /// Index that is populated and ready immediately.
    pub fn from_list(list: LocationList) -> Self {
        let index = Self::new(None);
        index.replace(list);
        index.mark_ready();
        index
    }

    /// Fetch and parse the location asset. On failure the previous contents are kept.
    pub async fn load(&self) -> bool {
        let loaded = match load_location_list(self.source.as_deref()).await {
            Ok(list) => {
                self.replace(list);
                let (cities, countries) = self.counts();
                info!("Location index loaded: {} cities, {} countries", cities, countries);
                true
            }
            Err(e) => {
                warn!("Failed to load location index: {}", e);
                false
            }
        };
        self.mark_ready();
        loaded
    }

    pub fn replace(&self, list: LocationList) {
        let sets = LocationSets::from_list(list);
        *self.sets.write().unwrap_or_else(PoisonError::into_inner) = sets;
    }

    fn mark_ready(&self) {
        self.ready.send_if_modified(|ready| !std::mem::replace(ready, true));
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Wait for the first load attempt to finish. Safe to await from many tasks.
    pub async fn ready(&self) {
        let mut ready = self.ready.subscribe();
        let _ = ready.wait_for(|ready| *ready).await;
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    /// The name as spelled in the asset, for a case-insensitive exact match.
    pub fn canonical_name(&self, name: &str) -> Option<String> {
        let key = normalize_key(name);
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        sets.cities
            .get(&key)
            .or_else(|| sets.countries.get(&key))
            .cloned()
    }

    pub fn counts(&self) -> (usize, usize) {
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        (sets.cities.len(), sets.countries.len())
    }
}

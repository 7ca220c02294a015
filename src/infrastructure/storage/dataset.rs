// Static JSON assets: the location list and the curated destination dataset
use crate::domain::error::WeGoError;
use crate::domain::model::Destination;
use crate::domain::text::normalize_key;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const EMBEDDED_LOCATIONS: &str = include_str!("../../../data/locations.json");
pub const EMBEDDED_DESTINATIONS: &str = include_str!("../../../data/destinations.json");

/// Shape of the location asset: `{ "cities": [...], "countries": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationList {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Curated destinations used for exact-match enrichment, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct CuratedDataset {
    destinations: Vec<Destination>,
}

impl CuratedDataset {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    pub fn parse(content: &str) -> Result<Self, WeGoError> {
        let destinations: Vec<Destination> = serde_json::from_str(content)?;
        Ok(Self::new(destinations))
    }

    /// Records whose name or country equals `keyword`, ignoring case, in dataset order.
    pub fn matches(&self, keyword: &str) -> Vec<Destination> {
        let key = normalize_key(keyword);
        if key.is_empty() {
            return Vec::new();
        }
        self.destinations
            .iter()
            .filter(|d| normalize_key(&d.name) == key || normalize_key(&d.country) == key)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Read a configured asset file, or fall back to the embedded copy.
pub async fn read_asset(path: Option<&Path>, embedded: &'static str) -> Result<String, WeGoError> {
    match path {
        Some(path) => {
            debug!("Reading asset from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        None => Ok(embedded.to_string()),
    }
}

pub async fn load_location_list(path: Option<&Path>) -> Result<LocationList, WeGoError> {
    let content = read_asset(path, EMBEDDED_LOCATIONS).await?;
    Ok(serde_json::from_str(&content)?)
}

pub async fn load_destinations(path: Option<&Path>) -> Result<CuratedDataset, WeGoError> {
    let content = read_asset(path, EMBEDDED_DESTINATIONS).await?;
    CuratedDataset::parse(&content)
}

use crate::application::aggregate::ResultAggregator;
use crate::application::describe::DescriptionFetcher;
use crate::application::details::DetailsLoader;
use crate::application::location_index::LocationIndex;
use crate::application::search::{SearchCoordinator, SearchOptions};
use crate::domain::error::WeGoError;
use crate::domain::traits::{ImageSource, SearchReporter, SummarySource};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::unsplash::UnsplashImages;
use crate::infrastructure::network::wikipedia::WikipediaSummaries;
use crate::infrastructure::storage::cache::DescriptionCache;
use crate::infrastructure::storage::dataset::{load_destinations, CuratedDataset};
use std::sync::Arc;

/// Session-wide collaborators, constructed once and injected into the coordinator.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub locations: Arc<LocationIndex>,
    pub dataset: Arc<CuratedDataset>,
    pub cache: Arc<DescriptionCache>,
    pub images: Arc<dyn ImageSource>,
    pub summaries: Arc<dyn SummarySource>,
}

impl AppState {
    /// Wire up the real HTTP sources and start loading the location index in
    /// the background. The curated dataset is loaded before returning.
    pub async fn new(config: Config) -> Result<Self, WeGoError> {
        let http_client = create_client(&config)?;
        let images: Arc<dyn ImageSource> = Arc::new(UnsplashImages::new(
            http_client.clone(),
            config.unsplash.clone(),
        ));
        let summaries: Arc<dyn SummarySource> = Arc::new(WikipediaSummaries::new(
            http_client,
            config.wikipedia.clone(),
        ));

        let dataset = load_destinations(config.data.destinations.as_deref())
            .await
            .map_err(|e| WeGoError::Dataset(format!("Failed to load destinations: {}", e)))?;

        let locations = Arc::new(LocationIndex::new(config.data.locations.clone()));
        let loader = locations.clone();
        tokio::spawn(async move {
            loader.load().await;
        });

        Ok(Self::with_sources(config, locations, dataset, images, summaries))
    }

    pub fn with_sources(
        config: Config,
        locations: Arc<LocationIndex>,
        dataset: CuratedDataset,
        images: Arc<dyn ImageSource>,
        summaries: Arc<dyn SummarySource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            locations,
            dataset: Arc::new(dataset),
            cache: Arc::new(DescriptionCache::new()),
            images,
            summaries,
        }
    }

    pub fn coordinator(&self, reporter: Arc<dyn SearchReporter>) -> SearchCoordinator {
        let descriptions = DescriptionFetcher::new(
            self.summaries.clone(),
            self.cache.clone(),
            self.config.search.description_max_chars,
        );
        let aggregator = ResultAggregator::new(
            self.config.search.max_results,
            self.config.data.placeholder_image.clone(),
            self.config.data.detail_page.clone(),
        );

        SearchCoordinator::new(
            self.locations.clone(),
            self.dataset.clone(),
            self.images.clone(),
            descriptions,
            aggregator,
            reporter,
            SearchOptions::from_config(&self.config),
        )
    }

    pub fn details_loader(&self) -> DetailsLoader {
        DetailsLoader::new(self.images.clone(), self.summaries.clone())
    }
}

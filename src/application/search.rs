use crate::application::aggregate::{assemble_remote, ResultAggregator};
use crate::application::describe::DescriptionFetcher;
use crate::application::location_index::LocationIndex;
use crate::domain::error::WeGoError;
use crate::domain::model::{
    DisplayRecord, FetchOutcome, SearchOutcome, SearchPhase, SourceRecord, Status,
};
use crate::domain::text::is_well_formed;
use crate::domain::token::{SearchToken, SearchTokens};
use crate::domain::traits::{ImageSource, SearchReporter};
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::dataset::CuratedDataset;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const MALFORMED_INPUT_MESSAGE: &str =
    "Please enter a destination using letters, spaces and hyphens only.";

const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong while searching. Please try again.";

/// Tunables for a [`SearchCoordinator`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub debounce: Duration,
    pub image_limit: usize,
}

impl SearchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            debounce: config.search.debounce(),
            image_limit: config.unsplash.per_page,
        }
    }
}

/// Single entry point for destination searches.
///
/// Every call to [`search`](Self::search) or [`submit`](Self::submit) takes a
/// fresh token, which supersedes whatever search was running. A superseded
/// search returns [`SearchOutcome::Superseded`] and publishes nothing.
pub struct SearchCoordinator {
    locations: Arc<LocationIndex>,
    dataset: Arc<CuratedDataset>,
    images: Arc<dyn ImageSource>,
    descriptions: DescriptionFetcher,
    aggregator: ResultAggregator,
    reporter: Arc<dyn SearchReporter>,
    options: SearchOptions,
    tokens: SearchTokens,
    phase: Mutex<SearchPhase>,
    // Held while issuing a token and while publishing, so that a check of
    // `is_live` and the publish it guards cannot be split by a new search.
    gate: Mutex<()>,
}

impl SearchCoordinator {
    pub fn new(
        locations: Arc<LocationIndex>,
        dataset: Arc<CuratedDataset>,
        images: Arc<dyn ImageSource>,
        descriptions: DescriptionFetcher,
        aggregator: ResultAggregator,
        reporter: Arc<dyn SearchReporter>,
        options: SearchOptions,
    ) -> Self {
        Self {
            locations,
            dataset,
            images,
            descriptions,
            aggregator,
            reporter,
            options,
            tokens: SearchTokens::new(),
            phase: Mutex::new(SearchPhase::Idle),
            gate: Mutex::new(()),
        }
    }

    /// Debounced search, for triggers that fire rapidly (typing).
    pub async fn search(&self, raw_keyword: &str) -> Result<SearchOutcome, WeGoError> {
        self.run(raw_keyword, self.options.debounce).await
    }

    /// Immediate search, for discrete triggers (submit button, Enter).
    pub async fn submit(&self, raw_keyword: &str) -> Result<SearchOutcome, WeGoError> {
        self.run(raw_keyword, Duration::ZERO).await
    }

    /// Drop the running search, if any, without starting another.
    pub fn cancel(&self) {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.tokens.cancel_all();
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = SearchPhase::Idle;
    }

    pub fn phase(&self) -> SearchPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cached_descriptions(&self) -> usize {
        self.descriptions.cache().len()
    }

    /// Every curated destination as a card, in dataset order.
    pub fn featured(&self) -> Vec<DisplayRecord> {
        self.dataset
            .all()
            .iter()
            .map(|destination| self.aggregator.curated_card(destination))
            .collect()
    }

    async fn run(&self, raw_keyword: &str, debounce: Duration) -> Result<SearchOutcome, WeGoError> {
        let token = self.issue();
        self.enter(&token, SearchPhase::Validating);

        let keyword = raw_keyword.trim();
        if !is_well_formed(keyword) {
            debug!("Rejected malformed keyword {:?}", raw_keyword);
            return Ok(self.reject(&token, Status::warning(MALFORMED_INPUT_MESSAGE), false));
        }

        self.locations.ready().await;
        let Some(name) = self.locations.canonical_name(keyword) else {
            info!("\"{}\" is not in the location index", keyword);
            let status = Status::info(format!(
                "\"{}\" is not a recognized city or country.",
                keyword
            ));
            return Ok(self.reject(&token, status, true));
        };

        if !debounce.is_zero() {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("Search {} for {} superseded while debouncing", token.id(), name);
                    return Ok(SearchOutcome::Superseded);
                }
                _ = tokio::time::sleep(debounce) => {}
            }
        }
        if !token.is_live() {
            return Ok(SearchOutcome::Superseded);
        }

        self.enter(&token, SearchPhase::AwaitingSources);
        let local = self.dataset.matches(&name);
        debug!("Search {} for {}: {} curated matches", token.id(), name, local.len());

        let (images, description) = tokio::join!(
            token.guard(
                self.images
                    .search_images(&name, self.options.image_limit, &token)
            ),
            token.guard(self.descriptions.describe(&name, &token)),
        );

        if !token.is_live() {
            debug!("Search {} for {} superseded while awaiting sources", token.id(), name);
            return Ok(SearchOutcome::Superseded);
        }

        let images = match images {
            Ok(outcome) => outcome,
            Err(WeGoError::Config(message)) => {
                warn!("Image search is not usable: {}", message);
                let status = Status::error(format!("Image search is not configured: {}", message));
                return Ok(self.finish(&token, &name, Vec::new(), Some(status)));
            }
            Err(e) => return Err(self.fail(&token, e)),
        };
        // Description errors degrade to "no description".
        let description = match description {
            Ok(outcome) => outcome.found(),
            Err(e) => {
                warn!("Description lookup for {} failed: {}", name, e);
                None
            }
        };

        if let FetchOutcome::Rejected { status } = images {
            let status = Status::error(format!(
                "Image search rejected the request (HTTP {}). Check the Unsplash access key.",
                status
            ));
            return Ok(self.finish(&token, &name, Vec::new(), Some(status)));
        }

        self.enter(&token, SearchPhase::Aggregating);
        let degraded = degraded_status(&images);
        let remote: Vec<SourceRecord> = assemble_remote(
            &name,
            images,
            description,
            self.aggregator.placeholder_image(),
        );
        let records = self.aggregator.merge(&local, remote, &name);

        if records.is_empty() {
            let status = degraded
                .unwrap_or_else(|| Status::info(format!("No results found for \"{}\".", name)));
            return Ok(self.finish(&token, &name, records, Some(status)));
        }

        Ok(self.finish(&token, &name, records, degraded))
    }

    fn issue(&self) -> SearchToken {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.tokens.issue()
    }

    fn enter(&self, token: &SearchToken, phase: SearchPhase) {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.set_phase(token, phase);
    }

    // Caller holds `gate`.
    fn set_phase(&self, token: &SearchToken, phase: SearchPhase) {
        if token.is_live() {
            debug!("Search {} -> {:?}", token.id(), phase);
            *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
        }
    }

    fn reject(&self, token: &SearchToken, status: Status, clear_input: bool) -> SearchOutcome {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        if !token.is_live() {
            return SearchOutcome::Superseded;
        }
        self.reporter.status(&status);
        if clear_input {
            self.reporter.clear_input();
        }
        self.set_phase(token, SearchPhase::Idle);
        SearchOutcome::Rejected(status)
    }

    fn finish(
        &self,
        token: &SearchToken,
        name: &str,
        records: Vec<DisplayRecord>,
        status: Option<Status>,
    ) -> SearchOutcome {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        if !token.is_live() {
            return SearchOutcome::Superseded;
        }
        if !records.is_empty() {
            info!("Publishing {} results for {}", records.len(), name);
            self.reporter.results(name, &records);
        }
        if let Some(status) = &status {
            self.reporter.status(status);
        }
        self.set_phase(token, SearchPhase::Idle);
        SearchOutcome::Published { records, status }
    }

    fn fail(&self, token: &SearchToken, e: WeGoError) -> WeGoError {
        error!("Search {} failed unexpectedly: {}", token.id(), e);
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        if token.is_live() {
            self.reporter.status(&Status::error(UNEXPECTED_FAILURE_MESSAGE));
            self.set_phase(token, SearchPhase::Idle);
        }
        e
    }
}

/// Status to show alongside whatever could still be rendered after an image lookup problem.
fn degraded_status(images: &FetchOutcome<Vec<SourceRecord>>) -> Option<Status> {
    match images {
        FetchOutcome::RateLimited { retry_hint } => Some(Status::warning(format!(
            "Image search is rate limited. {}",
            retry_hint
        ))),
        FetchOutcome::ServerError { status } => Some(Status::warning(format!(
            "The image service is having trouble (HTTP {}). Showing what is available.",
            status
        ))),
        FetchOutcome::Transport { .. } => Some(Status::error(
            "Could not reach the image service. Check your connection.",
        )),
        _ => None,
    }
}

//! 测试用的假数据源与记录器
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wego::application::location_index::LocationIndex;
use wego::application::search::SearchCoordinator;
use wego::domain::error::WeGoError;
use wego::domain::model::{Destination, DisplayRecord, FetchOutcome, SourceRecord, Status, Summary};
use wego::domain::token::SearchToken;
use wego::domain::traits::{ImageSource, SearchReporter, SummarySource};
use wego::infrastructure::config::Config;
use wego::infrastructure::storage::dataset::{CuratedDataset, LocationList};
use wego::state::AppState;

pub enum ImageScript {
    Photos(usize),
    Outcome(FetchOutcome<Vec<SourceRecord>>),
    ConfigError,
    Malformed,
}

/// Scripted photo source that counts calls.
pub struct FakeImages {
    script: ImageScript,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn photos(count: usize) -> Self {
        Self::scripted(ImageScript::Photos(count))
    }

    pub fn outcome(outcome: FetchOutcome<Vec<SourceRecord>>) -> Self {
        Self::scripted(ImageScript::Outcome(outcome))
    }

    pub fn config_error() -> Self {
        Self::scripted(ImageScript::ConfigError)
    }

    pub fn malformed() -> Self {
        Self::scripted(ImageScript::Malformed)
    }

    fn scripted(script: ImageScript) -> Self {
        Self {
            script,
            delays: HashMap::new(),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

pub fn photo_url(query: &str, index: usize) -> String {
    format!(
        "https://photos.test/{}/{}.jpg",
        query.to_lowercase().replace(' ', "-"),
        index
    )
}

#[async_trait]
impl ImageSource for FakeImages {
    async fn search_images(
        &self,
        query: &str,
        limit: usize,
        _token: &SearchToken,
    ) -> Result<FetchOutcome<Vec<SourceRecord>>, WeGoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        match &self.script {
            ImageScript::Photos(count) => Ok(FetchOutcome::Found(
                (0..(*count).min(limit))
                    .map(|i| SourceRecord {
                        image_url: Some(photo_url(query, i)),
                        title: query.to_string(),
                        description: Some(format!("photo {} of {}", i, query)),
                    })
                    .collect(),
            )),
            ImageScript::Outcome(outcome) => Ok(outcome.clone()),
            ImageScript::ConfigError => Err(WeGoError::Config(
                "Unsplash access key not configured".to_string(),
            )),
            ImageScript::Malformed => {
                Err(serde_json::from_str::<u8>("not json").unwrap_err().into())
            }
        }
    }
}

/// Summary source answering from a fixed table; unknown topics are `Empty`.
pub struct FakeSummaries {
    answers: HashMap<String, FetchOutcome<Summary>>,
    delays: HashMap<String, Duration>,
    malformed: bool,
    calls: AtomicUsize,
}

impl FakeSummaries {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            delays: HashMap::new(),
            malformed: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn malformed() -> Self {
        Self {
            malformed: true,
            ..Self::new()
        }
    }

    pub fn with_extract(self, topic: &str, extract: &str) -> Self {
        self.with_outcome(
            topic,
            FetchOutcome::Found(Summary {
                extract: extract.to_string(),
                article_link: Some(format!("https://en.wikipedia.org/wiki/{}", topic)),
            }),
        )
    }

    pub fn with_outcome(mut self, topic: &str, outcome: FetchOutcome<Summary>) -> Self {
        self.answers.insert(topic.to_lowercase(), outcome);
        self
    }

    pub fn with_delay(mut self, topic: &str, delay: Duration) -> Self {
        self.delays.insert(topic.to_lowercase(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummarySource for FakeSummaries {
    async fn summary(
        &self,
        topic: &str,
        _token: &SearchToken,
    ) -> Result<FetchOutcome<Summary>, WeGoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = topic.to_lowercase();
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        if self.malformed {
            return Err(serde_json::from_str::<u8>("not json").unwrap_err().into());
        }
        Ok(self
            .answers
            .get(&key)
            .cloned()
            .unwrap_or(FetchOutcome::Empty))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Results(String, Vec<DisplayRecord>),
    Status(Status),
    ClearInput,
}

/// Reporter that remembers every publication in order.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn published_keywords(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Results(keyword, _) => Some(keyword),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<Status> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Status(status) => Some(status),
                _ => None,
            })
            .collect()
    }
}

impl SearchReporter for RecordingReporter {
    fn results(&self, keyword: &str, records: &[DisplayRecord]) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Results(keyword.to_string(), records.to_vec()));
    }

    fn status(&self, status: &Status) {
        self.events.lock().unwrap().push(Event::Status(status.clone()));
    }

    fn clear_input(&self) {
        self.events.lock().unwrap().push(Event::ClearInput);
    }
}

pub fn location_list() -> LocationList {
    LocationList {
        cities: ["Paris", "Lyon", "Tokyo", "Rome", "New York"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        countries: ["France", "Japan", "Italy"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn curated_dataset() -> CuratedDataset {
    let destination = |name: &str, country: &str| Destination {
        name: name.to_string(),
        country: country.to_string(),
        img: format!("images/{}.jpg", name.to_lowercase()),
        desc: format!("Curated notes on {}", name),
    };
    CuratedDataset::new(vec![
        destination("Paris", "France"),
        destination("Lyon", "France"),
        destination("Tokyo", "Japan"),
    ])
}

pub struct Harness {
    pub coordinator: SearchCoordinator,
    pub images: Arc<FakeImages>,
    pub summaries: Arc<FakeSummaries>,
    pub reporter: Arc<RecordingReporter>,
    pub state: AppState,
}

pub fn harness(images: FakeImages, summaries: FakeSummaries) -> Harness {
    harness_with_index(
        images,
        summaries,
        Arc::new(LocationIndex::from_list(location_list())),
    )
}

pub fn harness_with_index(
    images: FakeImages,
    summaries: FakeSummaries,
    locations: Arc<LocationIndex>,
) -> Harness {
    let images = Arc::new(images);
    let summaries = Arc::new(summaries);
    let reporter = Arc::new(RecordingReporter::default());

    let state = AppState::with_sources(
        Config::default(),
        locations,
        curated_dataset(),
        images.clone(),
        summaries.clone(),
    );
    let coordinator = state.coordinator(reporter.clone());

    Harness {
        coordinator,
        images,
        summaries,
        reporter,
        state,
    }
}

//! 描述缓存测试

mod common;

use common::FakeSummaries;
use std::sync::Arc;
use wego::application::describe::DescriptionFetcher;
use wego::domain::model::FetchOutcome;
use wego::domain::token::SearchTokens;
use wego::infrastructure::storage::cache::{CachedDescription, DescriptionCache};

fn fetcher(summaries: Arc<FakeSummaries>) -> DescriptionFetcher {
    DescriptionFetcher::new(summaries, Arc::new(DescriptionCache::new()), 150)
}

#[tokio::test]
async fn test_same_destination_is_fetched_once() {
    let summaries = Arc::new(FakeSummaries::new().with_extract("Kyoto", "Former imperial capital."));
    let fetcher = fetcher(summaries.clone());
    let tokens = SearchTokens::new();

    for name in ["Kyoto", "kyoto", "  KYOTO "] {
        let outcome = fetcher.describe(name, &tokens.issue()).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Found("Former imperial capital.".to_string()));
    }

    assert_eq!(summaries.calls(), 1);
    assert_eq!(fetcher.cache().len(), 1);
}

#[tokio::test]
async fn test_missing_description_is_remembered() {
    let summaries = Arc::new(FakeSummaries::new());
    let fetcher = fetcher(summaries.clone());
    let tokens = SearchTokens::new();

    assert_eq!(
        fetcher.describe("Atlantis", &tokens.issue()).await.unwrap(),
        FetchOutcome::Empty
    );
    assert_eq!(fetcher.cache().get("atlantis"), CachedDescription::Known(None));

    assert_eq!(
        fetcher.describe("atlantis", &tokens.issue()).await.unwrap(),
        FetchOutcome::Empty
    );
    assert_eq!(summaries.calls(), 1);
}

#[tokio::test]
async fn test_long_extract_is_truncated_before_caching() {
    let extract = "word ".repeat(100);
    let summaries = Arc::new(FakeSummaries::new().with_extract("Cairo", &extract));
    let fetcher = fetcher(summaries);
    let tokens = SearchTokens::new();

    let text = match fetcher.describe("Cairo", &tokens.issue()).await.unwrap() {
        FetchOutcome::Found(text) => text,
        other => panic!("unexpected outcome {:?}", other),
    };

    assert!(text.ends_with("..."));
    assert!(text.chars().count() <= 153);
    assert_eq!(
        fetcher.cache().get("cairo"),
        CachedDescription::Known(Some(text))
    );
}

#[tokio::test]
async fn test_transient_failures_are_not_cached() {
    let summaries = Arc::new(
        FakeSummaries::new().with_outcome("Lima", FetchOutcome::ServerError { status: 502 }),
    );
    let fetcher = fetcher(summaries.clone());
    let tokens = SearchTokens::new();

    for _ in 0..2 {
        let outcome = fetcher.describe("Lima", &tokens.issue()).await.unwrap();
        assert_eq!(outcome, FetchOutcome::ServerError { status: 502 });
    }

    assert_eq!(summaries.calls(), 2);
    assert_eq!(fetcher.cache().get("lima"), CachedDescription::Absent);
}

#[tokio::test]
async fn test_superseded_lookup_writes_nothing() {
    let summaries = Arc::new(FakeSummaries::new().with_extract("Oslo", "Capital of Norway."));
    let fetcher = fetcher(summaries.clone());
    let tokens = SearchTokens::new();

    let stale = tokens.issue();
    let _newer = tokens.issue();

    let outcome = fetcher.describe("Oslo", &stale).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Cancelled);
    assert!(fetcher.cache().is_empty());
}

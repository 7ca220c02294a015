use crate::domain::error::WeGoError;
use crate::domain::model::FetchOutcome;
use crate::domain::text::{normalize_key, truncate_description};
use crate::domain::token::SearchToken;
use crate::domain::traits::SummarySource;
use crate::infrastructure::storage::cache::{CachedDescription, DescriptionCache};
use std::sync::Arc;
use tracing::debug;

/// Short card descriptions, memoized per normalized destination name.
pub struct DescriptionFetcher {
    source: Arc<dyn SummarySource>,
    cache: Arc<DescriptionCache>,
    max_chars: usize,
}

impl DescriptionFetcher {
    pub fn new(
        source: Arc<dyn SummarySource>,
        cache: Arc<DescriptionCache>,
        max_chars: usize,
    ) -> Self {
        Self {
            source,
            cache,
            max_chars,
        }
    }

    pub fn cache(&self) -> &Arc<DescriptionCache> {
        &self.cache
    }

    /// `Found` holds the truncated, display-ready text; `Empty` means the
    /// provider confirmed there is none. Both are cached and never re-queried.
    /// Rate limits, server errors and transport failures are passed through
    /// uncached, and nothing is written for a superseded token.
    pub async fn describe(
        &self,
        name: &str,
        token: &SearchToken,
    ) -> Result<FetchOutcome<String>, WeGoError> {
        let key = normalize_key(name);

        if let CachedDescription::Known(cached) = self.cache.get(&key) {
            debug!("Description cache hit for {}", key);
            return Ok(match cached {
                Some(text) => FetchOutcome::Found(text),
                None => FetchOutcome::Empty,
            });
        }

        debug!("Description cache miss for {}", key);
        let outcome = self.source.summary(name, token).await?;
        if !token.is_live() {
            return Ok(FetchOutcome::Cancelled);
        }

        Ok(match outcome {
            FetchOutcome::Found(summary) => {
                let text = truncate_description(&summary.extract, self.max_chars);
                self.cache.set(&key, Some(text.clone()));
                FetchOutcome::Found(text)
            }
            FetchOutcome::Empty => {
                self.cache.set(&key, None);
                FetchOutcome::Empty
            }
            other => other.map(|summary| summary.extract),
        })
    }
}

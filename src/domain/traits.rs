use crate::domain::error::WeGoError;
use crate::domain::model::{DisplayRecord, FetchOutcome, SourceRecord, Status, Summary};
use crate::domain::token::SearchToken;
use async_trait::async_trait;

/// Photo search provider.
///
/// Implementations classify the upstream response into a [`FetchOutcome`] and
/// return `Cancelled` once `token` is superseded.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn search_images(
        &self,
        query: &str,
        limit: usize,
        token: &SearchToken,
    ) -> Result<FetchOutcome<Vec<SourceRecord>>, WeGoError>;
}

/// Topic summary provider
#[async_trait]
pub trait SummarySource: Send + Sync {
    async fn summary(
        &self,
        topic: &str,
        token: &SearchToken,
    ) -> Result<FetchOutcome<Summary>, WeGoError>;
}

/// Receives everything a search publishes.
///
/// Superseded searches never reach the reporter.
pub trait SearchReporter: Send + Sync {
    fn results(&self, keyword: &str, records: &[DisplayRecord]);

    fn status(&self, status: &Status);

    fn clear_input(&self) {}
}

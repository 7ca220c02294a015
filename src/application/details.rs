use crate::domain::error::WeGoError;
use crate::domain::model::{DestinationDetails, FetchOutcome, DEFAULT_GALLERY, NO_DESCRIPTION};
use crate::domain::token::SearchTokens;
use crate::domain::traits::{ImageSource, SummarySource};
use std::sync::Arc;
use tracing::{debug, warn};

pub const GALLERY_SIZE: usize = 3;

/// Loads the gallery and full description for a single destination.
///
/// Runs under its own token series, so opening a destination never cancels a
/// search and vice versa. Descriptions here are neither truncated nor cached.
pub struct DetailsLoader {
    images: Arc<dyn ImageSource>,
    summaries: Arc<dyn SummarySource>,
    tokens: SearchTokens,
}

impl DetailsLoader {
    pub fn new(images: Arc<dyn ImageSource>, summaries: Arc<dyn SummarySource>) -> Self {
        Self {
            images,
            summaries,
            tokens: SearchTokens::new(),
        }
    }

    /// `Ok(None)` when a newer details request took over.
    pub async fn load(&self, destination: &str) -> Result<Option<DestinationDetails>, WeGoError> {
        let name = destination.trim();
        if name.is_empty() {
            return Err(WeGoError::Validation(
                "No destination specified".to_string(),
            ));
        }

        let token = self.tokens.issue();
        debug!("Loading details for {}", name);

        let (images, summary) = tokio::join!(
            token.guard(self.images.search_images(name, GALLERY_SIZE, &token)),
            token.guard(self.summaries.summary(name, &token)),
        );

        if !token.is_live() {
            return Ok(None);
        }

        let images: Vec<String> = match images {
            Ok(FetchOutcome::Found(records)) => {
                records.into_iter().filter_map(|r| r.image_url).collect()
            }
            Ok(other) => {
                debug!("No gallery photos for {}: {:?}", name, other);
                Vec::new()
            }
            Err(e) => {
                warn!("Error fetching gallery for {}: {}", name, e);
                Vec::new()
            }
        };
        let images = if images.len() >= GALLERY_SIZE {
            images.into_iter().take(GALLERY_SIZE).collect()
        } else {
            DEFAULT_GALLERY.iter().map(|url| url.to_string()).collect()
        };

        let (description, article_link) = match summary {
            Ok(FetchOutcome::Found(summary)) => (summary.extract, summary.article_link),
            Ok(_) => (NO_DESCRIPTION.to_string(), None),
            Err(e) => {
                warn!("Error fetching description for {}: {}", name, e);
                (NO_DESCRIPTION.to_string(), None)
            }
        };

        Ok(Some(DestinationDetails {
            name: name.to_string(),
            images,
            description,
            article_link,
        }))
    }
}

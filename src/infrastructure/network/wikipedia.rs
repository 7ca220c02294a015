use crate::domain::error::WeGoError;
use crate::domain::model::{FetchOutcome, Summary};
use crate::domain::token::SearchToken;
use crate::domain::traits::SummarySource;
use crate::infrastructure::config::WikipediaConfig;
use crate::infrastructure::network::http::{classify_status, transport_outcome, StatusClass};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

// Wikipedia REST summary structures
#[derive(Deserialize, Debug)]
struct PageSummary {
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Deserialize, Debug)]
struct ContentUrls {
    desktop: Option<PageLink>,
}

#[derive(Deserialize, Debug)]
struct PageLink {
    page: Option<String>,
}

/// Topic summaries from the Wikipedia REST API
pub struct WikipediaSummaries {
    client: Client,
    config: WikipediaConfig,
}

impl WikipediaSummaries {
    pub fn new(client: Client, config: WikipediaConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, topic: &str) -> Result<Url, WeGoError> {
        let mut url = Url::parse(self.config.base_url.trim_end_matches('/'))
            .map_err(|e| WeGoError::Config(format!("Invalid Wikipedia base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| WeGoError::Config("Wikipedia base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["page", "summary", topic]);
        Ok(url)
    }

    async fn request(&self, topic: &str) -> Result<FetchOutcome<Summary>, WeGoError> {
        let response = match self.client.get(self.endpoint(topic)?).send().await {
            Ok(response) => response,
            Err(e) => return Ok(transport_outcome("Wikipedia", &e)),
        };

        // Any non-success answer means "no description", never a hard failure.
        match classify_status(response.status(), response.headers()) {
            StatusClass::Success => {}
            StatusClass::NotFound | StatusClass::Rejected(_) => {
                warn!(
                    "Wikipedia fetch failed for \"{}\": {}",
                    topic,
                    response.status()
                );
                return Ok(FetchOutcome::Empty);
            }
            StatusClass::RateLimited { retry_hint } => {
                warn!("Wikipedia rate limit reached for \"{}\"", topic);
                return Ok(FetchOutcome::RateLimited { retry_hint });
            }
            StatusClass::ServerError(status) => {
                warn!("Wikipedia server error {} for \"{}\"", status, topic);
                return Ok(FetchOutcome::ServerError { status });
            }
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(transport_outcome("Wikipedia", &e)),
        };

        parse_summary(&body)
    }
}

fn parse_summary(body: &str) -> Result<FetchOutcome<Summary>, WeGoError> {
    let page: PageSummary = serde_json::from_str(body)?;
    let article_link = page
        .content_urls
        .and_then(|urls| urls.desktop)
        .and_then(|desktop| desktop.page);

    match page.extract.filter(|text| !text.trim().is_empty()) {
        Some(extract) => Ok(FetchOutcome::Found(Summary {
            extract,
            article_link,
        })),
        None => {
            debug!("Wikipedia summary has no extract");
            Ok(FetchOutcome::Empty)
        }
    }
}

#[async_trait]
impl SummarySource for WikipediaSummaries {
    async fn summary(
        &self,
        topic: &str,
        token: &SearchToken,
    ) -> Result<FetchOutcome<Summary>, WeGoError> {
        token.guard(self.request(topic)).await
    }
}

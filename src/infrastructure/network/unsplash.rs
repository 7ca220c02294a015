use crate::domain::error::WeGoError;
use crate::domain::model::{FetchOutcome, SourceRecord};
use crate::domain::token::SearchToken;
use crate::domain::traits::ImageSource;
use crate::infrastructure::config::UnsplashConfig;
use crate::infrastructure::network::http::{classify_status, transport_outcome, StatusClass};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

const MAX_PER_PAGE: usize = 30;

// Unsplash API Response structures
#[derive(Deserialize, Debug)]
struct SearchPhotosResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Deserialize, Debug)]
struct Photo {
    urls: PhotoUrls,
    alt_description: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Debug)]
struct PhotoUrls {
    regular: Option<String>,
    small: Option<String>,
    full: Option<String>,
}

impl Photo {
    fn display_url(&self) -> Option<&str> {
        self.urls
            .regular
            .as_deref()
            .or(self.urls.small.as_deref())
            .or(self.urls.full.as_deref())
            .filter(|url| !url.is_empty())
    }

    fn into_record(self, title: &str) -> Option<SourceRecord> {
        let image_url = self.display_url()?.to_string();
        let description = self
            .alt_description
            .or(self.description)
            .filter(|text| !text.trim().is_empty());
        Some(SourceRecord {
            image_url: Some(image_url),
            title: title.to_string(),
            description,
        })
    }
}

/// Photo search against the Unsplash API
pub struct UnsplashImages {
    client: Client,
    config: UnsplashConfig,
}

impl UnsplashImages {
    pub fn new(client: Client, config: UnsplashConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> Result<Url, WeGoError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(&format!("{}/search/photos", base))
            .map_err(|e| WeGoError::Config(format!("Invalid Unsplash base URL: {}", e)))
    }

    async fn request(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<FetchOutcome<Vec<SourceRecord>>, WeGoError> {
        let access_key = self
            .config
            .access_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| WeGoError::Config("Unsplash access key not configured".to_string()))?;

        let per_page = limit.clamp(1, MAX_PER_PAGE).to_string();
        let mut params = vec![
            ("query", query),
            ("per_page", per_page.as_str()),
            ("client_id", access_key),
        ];
        if let Some(orientation) = self.config.orientation.as_deref() {
            params.push(("orientation", orientation));
        }

        let response = match self
            .client
            .get(self.endpoint()?)
            .header("Accept-Version", "v1")
            .query(&params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(transport_outcome("Unsplash", &e)),
        };

        match classify_status(response.status(), response.headers()) {
            StatusClass::Success => {}
            StatusClass::RateLimited { retry_hint } => {
                warn!("Unsplash API rate limit reached");
                return Ok(FetchOutcome::RateLimited { retry_hint });
            }
            StatusClass::ServerError(status) => {
                warn!("Unsplash server error {}", status);
                return Ok(FetchOutcome::ServerError { status });
            }
            StatusClass::NotFound => {
                warn!("Unsplash search endpoint not found");
                return Ok(FetchOutcome::Rejected { status: 404 });
            }
            StatusClass::Rejected(status) => {
                warn!("Unsplash rejected the request with status {}", status);
                return Ok(FetchOutcome::Rejected { status });
            }
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(transport_outcome("Unsplash", &e)),
        };

        parse_photos(&body, query, limit)
    }
}

fn parse_photos(
    body: &str,
    title: &str,
    limit: usize,
) -> Result<FetchOutcome<Vec<SourceRecord>>, WeGoError> {
    let response: SearchPhotosResponse = serde_json::from_str(body)?;
    let records: Vec<SourceRecord> = response
        .results
        .into_iter()
        .filter_map(|photo| photo.into_record(title))
        .take(limit)
        .collect();

    debug!("Unsplash returned {} usable photos for {}", records.len(), title);

    if records.is_empty() {
        Ok(FetchOutcome::Empty)
    } else {
        Ok(FetchOutcome::Found(records))
    }
}

#[async_trait]
impl ImageSource for UnsplashImages {
    async fn search_images(
        &self,
        query: &str,
        limit: usize,
        token: &SearchToken,
    ) -> Result<FetchOutcome<Vec<SourceRecord>>, WeGoError> {
        token.guard(self.request(query, limit)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photos_keeps_order_and_alt_text() {
        let body = r#"{
            "total": 2,
            "results": [
                { "urls": { "regular": "https://img/1" }, "alt_description": "Eiffel tower" },
                { "urls": { "regular": "https://img/2", "small": "https://img/2s" }, "alt_description": null, "description": "Seine at dusk" }
            ]
        }"#;

        let outcome = parse_photos(body, "Paris", 6).unwrap();
        let records = outcome.found().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].image_url.as_deref(), Some("https://img/1"));
        assert_eq!(records[0].description.as_deref(), Some("Eiffel tower"));
        assert_eq!(records[1].description.as_deref(), Some("Seine at dusk"));
        assert!(records.iter().all(|r| r.title == "Paris"));
    }

    #[test]
    fn test_parse_photos_zero_results_is_empty() {
        let outcome = parse_photos(r#"{ "total": 0, "results": [] }"#, "Paris", 6).unwrap();
        assert_eq!(outcome, FetchOutcome::Empty);
    }

    #[test]
    fn test_parse_photos_respects_limit() {
        let body = r#"{ "results": [
            { "urls": { "regular": "a" } },
            { "urls": { "regular": "b" } },
            { "urls": { "regular": "c" } }
        ] }"#;
        let records = parse_photos(body, "Rome", 2).unwrap().found().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_photos_malformed_body_is_an_error() {
        assert!(matches!(
            parse_photos("<html>", "Paris", 6),
            Err(WeGoError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_access_key_is_a_config_error() {
        let images = UnsplashImages::new(Client::new(), UnsplashConfig::default());
        let tokens = crate::domain::token::SearchTokens::new();
        let token = tokens.issue();
        let result = images.search_images("Paris", 6, &token).await;
        assert!(matches!(result, Err(WeGoError::Config(_))));
    }
}

use crate::domain::model::{Destination, DisplayRecord, FetchOutcome, RecordOrigin, SourceRecord};
use url::form_urlencoded::byte_serialize;

/// Merges curated matches with remote records into a capped, ordered card list.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    max_results: usize,
    placeholder_image: String,
    detail_page: String,
}

impl ResultAggregator {
    pub fn new(
        max_results: usize,
        placeholder_image: impl Into<String>,
        detail_page: impl Into<String>,
    ) -> Self {
        Self {
            max_results,
            placeholder_image: placeholder_image.into(),
            detail_page: detail_page.into(),
        }
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Curated matches first (dataset order), then remote records (source order),
    /// never more than `max_results`. Nothing is invented: an empty input gives
    /// an empty output.
    pub fn merge(
        &self,
        local: &[Destination],
        remote: Vec<SourceRecord>,
        keyword: &str,
    ) -> Vec<DisplayRecord> {
        let local_cards = local.iter().map(|destination| self.curated_card(destination));
        let remote_cards = remote
            .into_iter()
            .map(|record| self.remote_card(record, keyword));

        local_cards
            .chain(remote_cards)
            .take(self.max_results)
            .collect()
    }

    pub fn curated_card(&self, destination: &Destination) -> DisplayRecord {
        DisplayRecord {
            image_url: destination.img.clone(),
            title: destination.name.clone(),
            description: Some(destination.desc.clone()).filter(|d| !d.trim().is_empty()),
            detail_link: self.detail_link(&destination.name),
            origin: RecordOrigin::Curated,
        }
    }

    fn remote_card(&self, record: SourceRecord, keyword: &str) -> DisplayRecord {
        let title = if record.title.trim().is_empty() {
            keyword.trim().to_string()
        } else {
            record.title
        };
        DisplayRecord {
            image_url: record
                .image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| self.placeholder_image.clone()),
            detail_link: self.detail_link(&title),
            title,
            description: record.description,
            origin: RecordOrigin::Remote,
        }
    }

    pub fn detail_link(&self, name: &str) -> String {
        let encoded: String = byte_serialize(name.as_bytes()).collect();
        format!("{}?destination={}", self.detail_page, encoded)
    }
}

/// Combine the two remote lookups into source records.
///
/// - photos found: one record per photo, the shared description winning over alt text
/// - zero photos: a single placeholder record so the card still has an image
/// - photo lookup failed: a placeholder record only if a description exists
pub fn assemble_remote(
    title: &str,
    images: FetchOutcome<Vec<SourceRecord>>,
    description: Option<String>,
    placeholder_image: &str,
) -> Vec<SourceRecord> {
    let placeholder = |description: Option<String>| SourceRecord {
        image_url: Some(placeholder_image.to_string()),
        title: title.to_string(),
        description,
    };

    match images {
        FetchOutcome::Found(records) => records
            .into_iter()
            .map(|record| SourceRecord {
                description: description.clone().or(record.description),
                ..record
            })
            .collect(),
        FetchOutcome::Empty => vec![placeholder(description)],
        _ => description
            .map(|text| vec![placeholder(Some(text))])
            .unwrap_or_default(),
    }
}

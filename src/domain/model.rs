use serde::{Deserialize, Serialize};

/// Image shown on a card when no photo could be found.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=800&q=60";

/// Gallery used on the details view when fewer than three photos come back.
pub const DEFAULT_GALLERY: [&str; 3] = [
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=800&q=60",
    "https://images.unsplash.com/photo-1471619445258-5c9c9b13c34a?auto=format&fit=crop&w=400&q=60",
    "https://images.unsplash.com/photo-1499856871958-5b9627545d1a?auto=format&fit=crop&w=400&q=60",
];

pub const DEFAULT_RETRY_HINT: &str = "Please try again later.";

pub const NO_DESCRIPTION: &str = "No description available for this destination.";

// 本地精选数据集中的一条记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub img: String,
    pub desc: String,
}

// 任意远程来源产出的统一结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRecord {
    pub image_url: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

/// Render-ready card produced by the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayRecord {
    pub image_url: String,
    pub title: String,
    pub description: Option<String>,
    pub detail_link: String,
    pub origin: RecordOrigin,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordOrigin {
    Curated,
    Remote,
}

/// Topic summary as returned by the description provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub extract: String,
    pub article_link: Option<String>,
}

/// Classified result of a single call to an external source.
///
/// Only unexpected conditions (malformed bodies, bad configuration) are
/// reported through `Err`; every classified upstream state is a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Found(T),
    /// 2xx with zero results, or a confirmed "not found".
    Empty,
    RateLimited { retry_hint: String },
    ServerError { status: u16 },
    /// Credentials or request refused (401, 403, other 4xx).
    Rejected { status: u16 },
    Transport { message: String },
    /// The token was superseded while the call was in flight.
    Cancelled,
}

impl<T> FetchOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Found(value) => FetchOutcome::Found(f(value)),
            Self::Empty => FetchOutcome::Empty,
            Self::RateLimited { retry_hint } => FetchOutcome::RateLimited { retry_hint },
            Self::ServerError { status } => FetchOutcome::ServerError { status },
            Self::Rejected { status } => FetchOutcome::Rejected { status },
            Self::Transport { message } => FetchOutcome::Transport { message },
            Self::Cancelled => FetchOutcome::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-visible status line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Status {
    pub severity: Severity,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// What a search ended with, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Records (possibly none) were published, with an optional degraded status.
    Published {
        records: Vec<DisplayRecord>,
        status: Option<Status>,
    },
    /// Input was rejected before any network call.
    Rejected(Status),
    /// A newer search took over; nothing was published.
    Superseded,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Validating,
    AwaitingSources,
    Aggregating,
}

/// Everything the details view needs for one destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationDetails {
    pub name: String,
    pub images: Vec<String>,
    pub description: String,
    pub article_link: Option<String>,
}

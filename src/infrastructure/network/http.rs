// HTTP client utilities and upstream status classification
use crate::domain::error::WeGoError;
use crate::domain::model::{FetchOutcome, DEFAULT_RETRY_HINT};
use crate::infrastructure::config::Config;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Proxy, StatusCode};

/// How an upstream response status should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    RateLimited { retry_hint: String },
    ServerError(u16),
    NotFound,
    Rejected(u16),
}

/// Create the shared HTTP client
pub fn create_client(config: &Config) -> Result<Client, WeGoError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("wego/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}

pub fn classify_status(status: StatusCode, headers: &HeaderMap) -> StatusClass {
    if status.is_success() {
        StatusClass::Success
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        StatusClass::RateLimited {
            retry_hint: retry_hint(headers),
        }
    } else if status.is_server_error() {
        StatusClass::ServerError(status.as_u16())
    } else if status == StatusCode::NOT_FOUND {
        StatusClass::NotFound
    } else {
        StatusClass::Rejected(status.as_u16())
    }
}

/// Human-readable hint from a `Retry-After` header (delta seconds or HTTP date).
pub fn retry_hint(headers: &HeaderMap) -> String {
    let Some(value) = headers.get(RETRY_AFTER).and_then(|v| v.to_str().ok()) else {
        return DEFAULT_RETRY_HINT.to_string();
    };
    let value = value.trim();

    match value.parse::<u64>() {
        Ok(1) => "Please try again in 1 second.".to_string(),
        Ok(seconds) => format!("Please try again in {} seconds.", seconds),
        Err(_) if !value.is_empty() => format!("Please try again after {}.", value),
        Err(_) => DEFAULT_RETRY_HINT.to_string(),
    }
}

/// A request that never produced a response.
pub fn transport_outcome<T>(source: &str, err: &reqwest::Error) -> FetchOutcome<T> {
    tracing::warn!("{} request failed before a response: {}", source, err);
    FetchOutcome::Transport {
        message: err.to_string(),
    }
}

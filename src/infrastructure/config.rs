use crate::domain::error::WeGoError;
use crate::domain::model::PLACEHOLDER_IMAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub unsplash: UnsplashConfig,
    #[serde(default)]
    pub wikipedia: WikipediaConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_description_max_chars")]
    pub description_max_chars: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UnsplashConfig {
    pub access_key: Option<String>,
    #[serde(default = "default_unsplash_base_url")]
    pub base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_orientation")]
    pub orientation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WikipediaConfig {
    #[serde(default = "default_wikipedia_base_url")]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataConfig {
    /// JSON file `{ "cities": [...], "countries": [...] }`; embedded list when unset.
    pub locations: Option<PathBuf>,
    /// JSON array of `{ name, country, img, desc }`; embedded dataset when unset.
    pub destinations: Option<PathBuf>,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default = "default_detail_page")]
    pub detail_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: true,
            http_proxy: None,
            logging: Logging::default(),
            search: SearchConfig::default(),
            unsplash: UnsplashConfig::default(),
            wikipedia: WikipediaConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_results: default_max_results(),
            description_max_chars: default_description_max_chars(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_unsplash_base_url(),
            per_page: default_per_page(),
            orientation: default_orientation(),
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_wikipedia_base_url(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            locations: None,
            destinations: None,
            placeholder_image: default_placeholder_image(),
            detail_page: default_detail_page(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "default".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_debounce_ms() -> u64 {
    300
}
fn default_max_results() -> usize {
    6
}
fn default_description_max_chars() -> usize {
    150
}
fn default_unsplash_base_url() -> String {
    "https://api.unsplash.com".to_string()
}
fn default_per_page() -> usize {
    6
}
fn default_orientation() -> Option<String> {
    Some("landscape".to_string())
}
fn default_wikipedia_base_url() -> String {
    "https://en.wikipedia.org/api/rest_v1".to_string()
}
fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}
fn default_detail_page() -> String {
    "details.html".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wego").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, WeGoError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Fill in values that may come from the environment instead of the file.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(key) = std::env::var(ACCESS_KEY_ENV) {
        if !key.trim().is_empty() {
            config.unsplash.access_key = Some(key.trim().to_string());
        }
    }
    config
}

/// Read the config file if there is one, then apply environment overrides.
/// An unparsable file falls back to defaults with a warning.
pub fn load_config() -> Result<Config, WeGoError> {
    let from_file = get_config_path()
        .filter(|path| path.exists())
        .map(|path| fs::read_to_string(&path).map_err(WeGoError::from))
        .transpose()?
        .map(|content| parse_config(&content));

    let config = match from_file {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("Warning: Failed to parse config file: {}. Using defaults.", e);
            Config::default()
        }
        None => Config::default(),
    };

    Ok(apply_env_overrides(config))
}

/// Write a sample config with every default spelled out.
/// Returns `false` without touching an existing file.
pub fn write_config_sample(path: &Path) -> Result<bool, WeGoError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let rendered = toml::to_string_pretty(&Config::default())
        .map_err(|e| WeGoError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, rendered)?;
    Ok(true)
}

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{TableSchema, DEFAULT_MAX_ROWS, DEFAULT_ROW_SELECTOR};

pub const CMC_URL: &str = "https://coinmarketcap.com";
pub const CMC_ROBOTS_URL: &str = "https://coinmarketcap.com/robots.txt";
pub const DEFAULT_USER_AGENT: &str = concat!("cmc_scraper/", env!("CARGO_PKG_VERSION"));

/// Scrape settings. Every key is optional in the TOML file; missing keys
/// fall back to the built-in CoinMarketCap defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub page_url: String,
    pub robots_url: String,
    /// Sent as `User-Agent` on both requests.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub row_selector: String,
    pub max_rows: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_url: CMC_URL.to_string(),
            robots_url: CMC_ROBOTS_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            row_selector: DEFAULT_ROW_SELECTOR.to_string(),
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl ScrapeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn schema(&self) -> TableSchema {
        TableSchema {
            row_selector: self.row_selector.clone(),
            max_rows: self.max_rows,
            ..TableSchema::default()
        }
    }
}

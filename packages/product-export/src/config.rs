use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::export::CsvStyle;

pub const DEFAULT_API_VERSION: &str = "2023-01";
pub const DEFAULT_PUBLISHED_STATUS: &str = "any";
pub const DEFAULT_PAGE_LIMIT: u32 = 250;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FILE_NAME: &str = "products.csv";

/// Export configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub access_token: String,
    pub api_version: String,
    pub published_status: String,
    pub page_limit: u32,
    pub timeout: Duration,
    pub file_name: String,
    pub csv_style: CsvStyle,
    pub allow_list_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` is this over the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            store_url: lookup("SHOPIFY_STORE_URL").context("SHOPIFY_STORE_URL must be set")?,
            access_token: lookup("SHOPIFY_ACCESS_TOKEN")
                .context("SHOPIFY_ACCESS_TOKEN must be set")?,
            api_version: lookup("SHOPIFY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            published_status: lookup("SHOPIFY_PUBLISHED_STATUS")
                .unwrap_or_else(|| DEFAULT_PUBLISHED_STATUS.to_string()),
            page_limit: lookup("SHOPIFY_PAGE_LIMIT")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("SHOPIFY_PAGE_LIMIT must be a valid number")?
                .unwrap_or(DEFAULT_PAGE_LIMIT),
            timeout: Duration::from_secs(
                lookup("SHOPIFY_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("SHOPIFY_TIMEOUT_SECS must be a valid number")?
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            file_name: lookup("EXPORT_FILE_NAME").unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            csv_style: lookup("EXPORT_CSV_STYLE")
                .map(|v| v.parse::<CsvStyle>())
                .transpose()
                .map_err(|e| anyhow!("EXPORT_CSV_STYLE: {}", e))?
                .unwrap_or_default(),
            allow_list_path: lookup("ALLOW_LIST_PATH").map(PathBuf::from),
        })
    }
}

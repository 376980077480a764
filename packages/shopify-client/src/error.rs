//! Error types for the Shopify client.

use thiserror::Error;

/// Result type for Shopify client operations.
pub type Result<T> = std::result::Result<T, ShopifyError>;

/// Shopify client errors.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Configuration error (bad token, client could not be built)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (body is not the expected JSON)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Store URL could not be turned into a products endpoint
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

impl ShopifyError {
    /// True when the request never produced an HTTP response in time.
    pub fn is_network(&self) -> bool {
        matches!(self, ShopifyError::Network(_))
    }
}

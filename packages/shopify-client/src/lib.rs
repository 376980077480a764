//! Pure Shopify Admin REST API client.
//!
//! A minimal client for the Admin API product catalog. Supports fetching a
//! single page and walking every page via the `Link` header cursor.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use shopify_client::ShopifyClient;
//!
//! let client = ShopifyClient::new("shpat_...", Duration::from_secs(10))?;
//! let url = ShopifyClient::products_url("https://my-store.myshopify.com", "2023-01", "any", 250)?;
//!
//! let products = client.fetch_all_products(url.as_str()).await?;
//! for product in &products {
//!     println!("{} {}", product.id, product.handle.as_deref().unwrap_or("(no handle)"));
//! }
//! ```

pub mod error;
pub mod pagination;
pub mod types;

pub use error::{Result, ShopifyError};
pub use pagination::extract_next_url;
pub use types::{Product, ProductPage, Variant};

use std::time::Duration;

use reqwest::header::LINK;
use tracing::{debug, info, warn};
use types::ProductsResponse;
use url::Url;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

#[derive(Clone)]
pub struct ShopifyClient {
    client: reqwest::Client,
    access_token: String,
}

impl ShopifyClient {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn new(access_token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShopifyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            access_token: access_token.into(),
        })
    }

    /// `{store}/admin/api/{version}/products.json?published_status=..&limit=..`
    pub fn products_url(
        store_url: &str,
        api_version: &str,
        published_status: &str,
        limit: u32,
    ) -> Result<Url> {
        let base = Url::parse(store_url).map_err(|_| ShopifyError::InvalidUrl {
            url: store_url.to_string(),
        })?;

        let mut url = base
            .join(&format!("/admin/api/{}/products.json", api_version))
            .map_err(|_| ShopifyError::InvalidUrl {
                url: store_url.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("published_status", published_status)
            .append_pair("limit", &limit.to_string());

        Ok(url)
    }

    /// Fetch one page of products and the cursor to the next one.
    pub async fn fetch_page(&self, url: &str) -> Result<ProductPage> {
        let resp = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Shopify request failed");
                ShopifyError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Shopify API error");
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Missing or unreadable header means this is the last page.
        let next_page_url = resp
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_next_url);

        let body = resp.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read Shopify response body");
            ShopifyError::Network(e.to_string())
        })?;

        let parsed: ProductsResponse = serde_json::from_str(&body)
            .map_err(|e| ShopifyError::Parse(format!("Failed to deserialize products: {}", e)))?;

        Ok(ProductPage {
            products: parsed.products,
            next_page_url,
        })
    }

    /// Walk every page starting at `url` and return all products in page order.
    ///
    /// Pages are fetched one after another. A failure on any page aborts the
    /// whole walk and the products gathered so far are dropped.
    pub async fn fetch_all_products(&self, url: &str) -> Result<Vec<Product>> {
        let start = std::time::Instant::now();
        let mut products = Vec::new();
        let mut next_url = Some(url.to_string());
        let mut page_number = 0usize;

        while let Some(current) = next_url.take().filter(|u| !u.is_empty()) {
            page_number += 1;
            debug!(page = page_number, url = %current, "Fetching products page");

            let page = self.fetch_page(&current).await.map_err(|e| {
                warn!(page = page_number, error = %e, "Aborting product fetch");
                e
            })?;

            debug!(
                page = page_number,
                count = page.products.len(),
                has_next = !page.is_last(),
                "Fetched products page"
            );

            products.extend(page.products);
            next_url = page.next_page_url;
        }

        info!(
            pages = page_number,
            count = products.len(),
            duration_ms = start.elapsed().as_millis(),
            "Fetched all Shopify products"
        );

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url() {
        let url = ShopifyClient::products_url("https://my-store.myshopify.com", "2023-01", "any", 250)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://my-store.myshopify.com/admin/api/2023-01/products.json?published_status=any&limit=250"
        );
    }

    #[test]
    fn test_products_url_rejects_garbage() {
        let err = ShopifyClient::products_url("not a url", "2023-01", "any", 250).unwrap_err();
        assert!(matches!(err, ShopifyError::InvalidUrl { .. }));
    }
}

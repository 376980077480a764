//! Fetch → filter → export, each stage fully materialized before the next.

use std::path::{Path, PathBuf};

use shopify_client::{ShopifyClient, ShopifyError};
use thiserror::Error;
use tracing::info;

use crate::allow_list::AllowList;
use crate::config::Config;
use crate::export::write_csv;
use crate::filter::filter_by_handle;

/// Why an export run stopped early.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Catalog could not be fetched; nothing was written.
    #[error("failed to retrieve products from Shopify: {0}")]
    Fetch(#[from] ShopifyError),

    /// Output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub fetched: usize,
    pub exported: usize,
    pub path: PathBuf,
}

/// Run one export against the store in `config`, writing to `output_path`.
pub async fn run(
    config: &Config,
    allow_list: &AllowList,
    output_path: &Path,
) -> Result<ExportSummary, PipelineError> {
    let client = ShopifyClient::new(config.access_token.as_str(), config.timeout)?;
    let url = ShopifyClient::products_url(
        &config.store_url,
        &config.api_version,
        &config.published_status,
        config.page_limit,
    )?;

    info!(url = %url, "Fetching Shopify products");
    let products = client.fetch_all_products(url.as_str()).await?;

    let rows = filter_by_handle(&products, allow_list);
    info!(
        fetched = products.len(),
        exported = rows.len(),
        allow_list = allow_list.len(),
        "Filtered products by handle"
    );

    write_csv(&rows, output_path, config.csv_style).map_err(|source| PipelineError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!(path = %output_path.display(), rows = rows.len(), "Wrote product export");

    Ok(ExportSummary {
        fetched: products.len(),
        exported: rows.len(),
        path: output_path.to_path_buf(),
    })
}

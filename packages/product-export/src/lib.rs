//! Export allow-listed Shopify product ids to CSV.
//!
//! Pulls the full product catalog through [`shopify_client`], keeps the
//! products whose handle is on the [`AllowList`], and writes their ids to a
//! one-column CSV in the user's download directory.

pub mod allow_list;
pub mod config;
pub mod export;
pub mod filter;
pub mod paths;
pub mod pipeline;

pub use allow_list::{AllowList, DEFAULT_HANDLES};
pub use config::Config;
pub use export::{render_csv, write_csv, CsvStyle};
pub use filter::{filter_by_handle, ExportRow};
pub use pipeline::{run, ExportSummary, PipelineError};

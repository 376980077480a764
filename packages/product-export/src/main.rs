// Entry point for the product id export

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use product_export::{paths, AllowList, Config, PipelineError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "product-export")]
#[command(about = "Export allow-listed Shopify product ids to CSV")]
struct Cli {
    /// Write here instead of <downloads>/<EXPORT_FILE_NAME>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Handle allow-list, one per line (overrides ALLOW_LIST_PATH)
    #[arg(long)]
    allow_list: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_export=debug,shopify_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Export failed");
            if matches!(e.downcast_ref::<PipelineError>(), Some(PipelineError::Fetch(_))) {
                println!("Failed to retrieve products from Shopify.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(store = %config.store_url, "Configuration loaded");

    let allow_list = match cli.allow_list.or_else(|| config.allow_list_path.clone()) {
        Some(path) => AllowList::from_file(&path)?,
        None => AllowList::default(),
    };
    tracing::debug!(handles = allow_list.len(), "Allow-list ready");

    let output_path = match cli.output {
        Some(path) => path,
        None => paths::default_output_path(&config.file_name)?,
    };

    let summary = product_export::run(&config, &allow_list, &output_path).await?;

    tracing::info!(
        fetched = summary.fetched,
        exported = summary.exported,
        path = %summary.path.display(),
        "Export complete"
    );
    println!("Products imported and saved to CSV.");

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};

/// The user's download directory, or `~/Downloads` when the platform has no
/// notion of one (headless Linux without XDG user dirs).
pub fn download_dir() -> Result<PathBuf> {
    resolve_download_dir(dirs::download_dir(), dirs::home_dir())
}

fn resolve_download_dir(download: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = download {
        return Ok(dir);
    }

    home.map(|home| home.join("Downloads"))
        .context("Could not determine the home directory")
}

/// Where the export lands unless `--output` says otherwise.
pub fn default_output_path(file_name: &str) -> Result<PathBuf> {
    Ok(download_dir()?.join(file_name))
}

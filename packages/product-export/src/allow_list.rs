//! Handles whose products end up in the export.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Handles exported when no allow-list file is configured.
///
/// Entries are kept verbatim, including the stray `"Item Sku"` header that
/// came along with the spreadsheet this list was pasted from.
pub const DEFAULT_HANDLES: &[&str] = &[
    "W928101066",
    "W928101065",
    "W928101005",
    "TH9001LSJ-8",
    "K-4012-NS",
    "K-4012-MB",
    "K-4012-BG",
    "TH4003MB",
    "TH4003NS",
    "TH2806W",
    "TH94027MB02",
    "TH94026NS02",
    "TH94026MB02",
    "TH9013LSJ",
    "TH9013MB",
    "TH9013NS",
    "TH9001LSJ",
    "TH9001MB",
    "TH9001NS",
    "TH8020NS",
    "TH8020MB",
    "Item Sku",
    "W138164227",
    "W92864164",
    "W92864163",
    "W127263094",
    "W122562738",
    "W122562735",
    "W122552781",
    "W122552138",
    "W92852027",
    "W92851685",
    "W92850585",
    "W92850260",
    "W92850257",
    "W92850252",
    "W92850238",
    "W92850236",
    "W92850227",
    "W92850211",
    "W92850157",
    "W108347967",
    "W123243770",
    "W122543477",
    "TH94027MB02-8",
    "TH94026NS02-8",
    "TH94026MB02-8",
    "JYBB41202BG",
    "TH-8806D-MB",
    "TH-8806D-BG",
    "TH9013NS-8",
    "TH9001NS-8",
    "TH9001MB-8",
    "W928100995",
    "W928100989",
    "W928100986",
    "W928100985",
    "W928100960",
    "W928100959",
    "W122581051",
    "W92877189",
    "W92869107",
    "W105668269",
    "W92867780",
    "W108366782",
    "W138164919",
    "W138164917",
    "W138164916",
    "W138164228",
    "TH-4001NS9",
    "TH-4001NS8",
    "TH4006--BG",
    "TH4006-NS",
    "TH4006-MB",
    "TH-4006WH",
    "TH94027NS02",
    "20S05101MBL",
    "TH8041CH",
    "TH8041NS",
    "TH8041MB",
    "THQ7006TMB",
    "THSP002NS",
    "THSP002CH",
    "THSP002MB",
    "THSP002BG",
    "TH-4014MB02",
    "TH8046NS",
    "THQ7006TCP",
    "TH4026NS01",
    "TH-4026MB01",
    "TH4003MB02",
    "TH-4003LSJ",
    "TH-8045MB",
    "TH-8045LSJ",
    "TH15016NS",
    "TH4001MB",
    "THQ7006NS",
    "TH8046MB",
    "TH8046BG",
    "W54331545",
    "W928101067",
];

/// Immutable set of handles, matched case-insensitively and exactly.
#[derive(Debug, Clone)]
pub struct AllowList {
    // lowercased
    handles: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            handles: handles
                .into_iter()
                .map(|h| h.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Load one handle per line. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read allow-list {}", path.display()))?;

        Ok(Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        ))
    }

    /// Exact, case-insensitive membership. An empty handle never matches.
    pub fn contains(&self, handle: &str) -> bool {
        !handle.is_empty() && self.handles.contains(&handle.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLES.iter().copied())
    }
}

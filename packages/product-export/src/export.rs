//! CSV output for exported product ids.
//!
//! The downstream import expects every line, header included, to end with a
//! dangling `,` before the newline:
//!
//! ```text
//! Id,
//! 101,
//! 202,
//! ```
//!
//! That is the default. [`CsvStyle::Standard`] writes a plain one-column CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::filter::ExportRow;

pub const ID_COLUMN: &str = "Id";
const SEPARATOR: char = ',';

/// Line layout of the exported file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvStyle {
    /// Every line ends with a separator: `Id,\n101,\n`.
    #[default]
    TrailingSeparator,
    /// Plain single-column CSV: `Id\n101\n`.
    Standard,
}

impl FromStr for CsvStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trailing" | "trailing-separator" => Ok(CsvStyle::TrailingSeparator),
            "standard" => Ok(CsvStyle::Standard),
            other => Err(format!(
                "unknown CSV style '{}' (expected 'trailing' or 'standard')",
                other
            )),
        }
    }
}

fn write_line<W: Write>(writer: &mut W, value: &dyn std::fmt::Display, style: CsvStyle) -> io::Result<()> {
    match style {
        CsvStyle::TrailingSeparator => writeln!(writer, "{}{}", value, SEPARATOR),
        CsvStyle::Standard => writeln!(writer, "{}", value),
    }
}

/// Write the header and one line per row to `writer`.
pub fn render_csv<W: Write>(rows: &[ExportRow], writer: &mut W, style: CsvStyle) -> io::Result<()> {
    write_line(writer, &ID_COLUMN, style)?;
    for row in rows {
        write_line(writer, &row.id, style)?;
    }
    Ok(())
}

/// Create or truncate `path` and write the rows to it.
pub fn write_csv(rows: &[ExportRow], path: &Path, style: CsvStyle) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    render_csv(rows, &mut writer, style)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[i64]) -> Vec<ExportRow> {
        ids.iter().map(|&id| ExportRow { id }).collect()
    }

    fn render(ids: &[i64], style: CsvStyle) -> String {
        let mut out = Vec::new();
        render_csv(&rows(ids), &mut out, style).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_trailing_separator_layout() {
        assert_eq!(render(&[101, 202], CsvStyle::TrailingSeparator), "Id,\n101,\n202,\n");
    }

    #[test]
    fn test_empty_is_header_only() {
        assert_eq!(render(&[], CsvStyle::TrailingSeparator), "Id,\n");
        assert_eq!(render(&[], CsvStyle::Standard), "Id\n");
    }

    #[test]
    fn test_standard_layout() {
        assert_eq!(render(&[101, 202], CsvStyle::Standard), "Id\n101\n202\n");
    }

    #[test]
    fn test_large_and_negative_ids_are_decimal() {
        assert_eq!(
            render(&[9_007_199_254_740_993, -1], CsvStyle::TrailingSeparator),
            "Id,\n9007199254740993,\n-1,\n"
        );
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("trailing".parse::<CsvStyle>(), Ok(CsvStyle::TrailingSeparator));
        assert_eq!(" Standard ".parse::<CsvStyle>(), Ok(CsvStyle::Standard));
        assert!("tsv".parse::<CsvStyle>().is_err());
    }
}

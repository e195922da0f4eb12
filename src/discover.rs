//! Input discovery: monthly report file naming.
//!
//! Input PDFs follow the `<MONTH>_<YEAR>.pdf` convention, with month names
//! from the fixed Italian set used by the source reports (`GENNAIO_2024.pdf`,
//! `MARZO_2024.pdf`, ...). Anything else in the input directory is skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Italian month names as they appear in report file names, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "GENNAIO",
    "FEBBRAIO",
    "MARZO",
    "APRILE",
    "MAGGIO",
    "GIUGNO",
    "LUGLIO",
    "AGOSTO",
    "SETTEMBRE",
    "OTTOBRE",
    "NOVEMBRE",
    "DICEMBRE",
];

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^([A-Z]+)_([0-9]{4})\.pdf$").expect("valid pattern"))
}

/// Calendar index (0-based) of a normalized month name.
pub fn month_index(month: &str) -> Option<usize> {
    MONTH_NAMES.iter().position(|m| *m == month)
}

/// Check whether a file name matches the monthly report convention.
pub fn is_report_name(name: &str) -> bool {
    name_pattern()
        .captures(name)
        .map(|caps| month_index(&caps[1].to_uppercase()).is_some())
        .unwrap_or(false)
}

/// A monthly report PDF discovered in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// Path to the PDF file.
    pub path: PathBuf,
    /// Month name, normalized to uppercase.
    pub month: String,
    /// Report year.
    pub year: i32,
}

impl InputDocument {
    /// Parse a path whose file name follows `<MONTH>_<YEAR>.pdf`.
    ///
    /// The month is normalized to uppercase and must be one of [`MONTH_NAMES`].
    ///
    /// # Example
    ///
    /// ```
    /// use tabella::discover::InputDocument;
    ///
    /// let doc = InputDocument::from_path("reports/GENNAIO_2024.pdf").unwrap();
    /// assert_eq!(doc.month, "GENNAIO");
    /// assert_eq!(doc.year, 2024);
    /// ```
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidName(path.display().to_string()))?;

        let caps = name_pattern()
            .captures(name)
            .ok_or_else(|| Error::InvalidName(name.to_string()))?;

        let month = caps[1].to_uppercase();
        if month_index(&month).is_none() {
            return Err(Error::InvalidName(name.to_string()));
        }
        // Four digits guaranteed by the pattern
        let year: i32 = caps[2].parse().expect("four-digit year");

        Ok(Self { path, month, year })
    }

    /// File name of the corresponding output spreadsheet (`<MONTH> <YEAR>.xlsx`).
    pub fn output_name(&self) -> String {
        format!("{} {}.xlsx", self.month, self.year)
    }
}

/// Scan a directory for monthly report PDFs.
///
/// Files whose names do not match the convention are skipped (logged at
/// debug level). The result is sorted by file name so batch runs are
/// deterministic.
pub fn discover(input_dir: &Path) -> Result<Vec<InputDocument>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match InputDocument::from_path(entry.path()) {
            Ok(doc) => documents.push(doc),
            Err(_) => {
                log::debug!("skipping {}: not a monthly report", entry.path().display());
            }
        }
    }

    documents.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(documents)
}

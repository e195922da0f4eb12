//! # tabella
//!
//! Batch conversion of monthly PDF reports into pre-formatted xlsx templates.
//!
//! Each input PDF named `<MONTH>_<YEAR>.pdf` is matched to a spreadsheet
//! template from the prior year (`<MONTH> <YEAR-1>.xlsx`, or the default
//! `<YEAR-1>.xlsx`), its table rows are extracted page by page, and the rows
//! are written into a copy of the template starting at a fixed cell offset.
//! The template's formatting and header rows are preserved.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabella::Converter;
//!
//! fn main() -> tabella::Result<()> {
//!     let summary = Converter::new("data_2024", "templates_2023", "output_2024").run()?;
//!     for report in &summary.reports {
//!         println!("{} {}: {:?}", report.document.month, report.document.year, report.outcome);
//!     }
//!     std::process::exit(if summary.is_success() { 0 } else { 1 });
//! }
//! ```
//!
//! Extraction is heuristic (aligned-text column splitting, no schema), so
//! rows may be ragged; see [`table`] for the model.

pub mod convert;
pub mod discover;
pub mod error;
pub mod extract;
pub mod table;
pub mod template;
pub mod write;

// Re-export commonly used types
pub use convert::{BatchSummary, Converter, DocumentReport, Outcome};
pub use discover::{discover, InputDocument, MONTH_NAMES};
pub use error::{Error, Result};
pub use extract::extract_table;
pub use table::{CellValue, ExtractedTable, TableRow};
pub use template::{resolve_template, Template, TemplateKind};
pub use write::{write_output, DEFAULT_START_COLUMN, DEFAULT_START_ROW};

use std::path::{Path, PathBuf};

/// Convert a single monthly report PDF with default offsets.
///
/// Resolves the template, extracts the table, and writes
/// `<MONTH> <YEAR>.xlsx` into `output_dir` (which must already exist).
/// Returns the output path.
///
/// # Example
///
/// ```no_run
/// use tabella::convert_month;
///
/// let out = convert_month("data_2024/GENNAIO_2024.pdf", "templates_2023", "output_2024")?;
/// println!("wrote {}", out.display());
/// # Ok::<(), tabella::Error>(())
/// ```
pub fn convert_month(
    pdf_path: impl AsRef<Path>,
    template_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let document = InputDocument::from_path(pdf_path.as_ref())?;
    let template = resolve_template(&document, template_dir.as_ref())?;
    let table = extract_table(&document.path)?;
    let output = output_dir.as_ref().join(document.output_name());
    write_output(
        &template.path,
        &table,
        &output,
        DEFAULT_START_ROW,
        DEFAULT_START_COLUMN,
    )?;
    Ok(output)
}

//! Table extraction from PDF reports.
//!
//! The reports are text-based PDFs whose tables render as aligned text
//! lines. Extraction is heuristic: page text is pulled with lopdf and every
//! line that splits into two or more fragments on a column gap (a tab or a
//! run of two-plus spaces) becomes a table row. Prose lines produce a single
//! fragment and are dropped. Column alignment is not verified, so rows may
//! come out ragged.

use std::path::Path;
use std::sync::OnceLock;

use lopdf::Document;
use regex::Regex;

use crate::error::Result;
use crate::table::{ExtractedTable, TableRow};

fn column_gap() -> &'static Regex {
    static GAP: OnceLock<Regex> = OnceLock::new();
    GAP.get_or_init(|| Regex::new(r"\t| {2,}").expect("valid pattern"))
}

/// Extract the table rows from every page of a PDF, in page order.
///
/// Fails with [`Error::Extraction`](crate::Error::Extraction) when the file
/// cannot be opened or parsed as a PDF. A page whose text extraction fails
/// inside an otherwise readable document is skipped with a warning. A
/// readable document with no detectable rows yields an empty table, not an
/// error.
pub fn extract_table(pdf_path: &Path) -> Result<ExtractedTable> {
    let document = Document::load(pdf_path)?;

    let mut table = ExtractedTable::new();
    for (page_number, _object_id) in document.get_pages() {
        let text = match document.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(err) => {
                log::warn!(
                    "skipping page {} of {}: {}",
                    page_number,
                    pdf_path.display(),
                    err
                );
                continue;
            }
        };

        let before = table.row_count();
        for row in parse_page_text(&text) {
            table.add_row(row);
        }
        log::debug!(
            "page {} of {}: {} rows",
            page_number,
            pdf_path.display(),
            table.row_count() - before
        );
    }

    Ok(table)
}

/// Split one page's text into table rows.
///
/// A line becomes a row when it contains at least two column fragments;
/// anything else (titles, prose, blank lines) is ignored.
fn parse_page_text(text: &str) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fragments: Vec<&str> = column_gap()
            .split(line)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if fragments.len() >= 2 {
            rows.push(TableRow::from_fragments(fragments));
        }
    }

    rows
}

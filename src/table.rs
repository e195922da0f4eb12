//! Extracted table model.
//!
//! Tables produced by the extraction heuristic carry no schema: rows may
//! have different cell counts and cells are typed loosely. Downstream
//! consumers must tolerate ragged rows.

use serde::{Deserialize, Serialize};

/// A single cell value produced by the extraction heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A value that parsed as a number.
    Number(f64),
    /// Any other non-empty value.
    Text(String),
    /// A blank cell.
    Empty,
}

impl CellValue {
    /// Parse a raw extracted fragment into a typed cell value.
    ///
    /// Whitespace is trimmed; integers and decimals become [`CellValue::Number`],
    /// blanks become [`CellValue::Empty`], everything else stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }
        CellValue::Text(trimmed.to_string())
    }

    /// Check if the cell is blank.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Plain text representation of the value.
    pub fn plain_text(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

/// A single extracted table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row, left to right.
    pub cells: Vec<CellValue>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Create a row by parsing raw text fragments.
    pub fn from_fragments<S: AsRef<str>>(fragments: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            fragments
                .into_iter()
                .map(|f| CellValue::parse(f.as_ref()))
                .collect(),
        )
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Tab-joined plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// An ordered sequence of rows detected across the pages of one PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTable {
    /// Rows in page order, then top-to-bottom within a page.
    pub rows: Vec<TableRow>,
}

impl ExtractedTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows were detected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row in the table. Rows are not required to be rectangular.
    pub fn max_cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Newline-joined plain text representation.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

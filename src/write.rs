//! Writing extracted rows into template copies.

use std::path::Path;

use umya_spreadsheet::{reader, writer};

use crate::error::{Error, Result};
use crate::table::{CellValue, ExtractedTable};

/// Default 1-indexed row where extracted data starts (below template headers).
pub const DEFAULT_START_ROW: u32 = 4;

/// Default 1-indexed column where extracted data starts.
pub const DEFAULT_START_COLUMN: u32 = 1;

/// Populate a copy of `template_path` with `table` and save it to `output_path`.
///
/// The template workbook is loaded whole, so all formatting and content it
/// carries — headers, styles, everything above `start_row` — survive in the
/// output. Rows are written into the first sheet starting at
/// (`start_row`, `start_column`), one sheet row per table row, columns
/// filled left to right. Numeric cells are written as numbers, text cells
/// as strings, empty cells are left alone. Nothing below the written region
/// is cleared.
///
/// The workbook is saved to a temporary file next to `output_path` and
/// renamed into place, so a failed save never leaves a half-written output.
pub fn write_output(
    template_path: &Path,
    table: &ExtractedTable,
    output_path: &Path,
    start_row: u32,
    start_column: u32,
) -> Result<()> {
    let mut book = reader::xlsx::read(template_path)?;
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| Error::Write("template workbook has no sheets".into()))?;

    for (i, row) in table.rows.iter().enumerate() {
        let sheet_row = start_row + i as u32;
        for (j, cell) in row.cells.iter().enumerate() {
            let sheet_column = start_column + j as u32;
            match cell {
                CellValue::Number(n) => {
                    sheet.get_cell_mut((sheet_column, sheet_row)).set_value_number(*n);
                }
                CellValue::Text(s) => {
                    sheet
                        .get_cell_mut((sheet_column, sheet_row))
                        .set_value_string(s.as_str());
                }
                CellValue::Empty => {}
            }
        }
    }

    let output_dir = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    // umya's writer requires the target path to carry an extension.
    let staging = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile_in(output_dir)?;
    writer::xlsx::write(&book, staging.path())?;
    staging
        .persist(output_path)
        .map_err(|err| Error::Io(err.error))?;

    log::debug!(
        "wrote {} rows into {} from row {}",
        table.row_count(),
        output_path.display(),
        start_row
    );
    Ok(())
}

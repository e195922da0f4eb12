//! Error types for the tabella library.

use std::io;
use thiserror::Error;

/// Result type alias for tabella operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a monthly report conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file name does not match the `<MONTH>_<YEAR>.pdf` convention.
    #[error("file name does not match <MONTH>_<YEAR>.pdf: {0}")]
    InvalidName(String),

    /// Neither the month-specific nor the default template exists.
    #[error("no template for {month} {year}: neither \"{month} {year}.xlsx\" nor \"{year}.xlsx\" found")]
    TemplateNotFound {
        /// Month name of the document being converted.
        month: String,
        /// Template year (the year before the report year).
        year: i32,
    },

    /// The PDF could not be opened or parsed.
    #[error("table extraction failed: {0}")]
    Extraction(String),

    /// The template workbook could not be loaded or the output could not be saved.
    #[error("spreadsheet write failed: {0}")]
    Write(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Extraction(err.to_string()),
        }
    }
}

impl From<umya_spreadsheet::XlsxError> for Error {
    fn from(err: umya_spreadsheet::XlsxError) -> Self {
        Error::Write(err.to_string())
    }
}

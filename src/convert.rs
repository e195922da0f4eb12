//! Batch orchestration: discover → resolve template → extract → write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::discover::{discover, InputDocument};
use crate::error::{Error, Result};
use crate::extract::extract_table;
use crate::template::{resolve_template, TemplateKind};
use crate::write::{write_output, DEFAULT_START_COLUMN, DEFAULT_START_ROW};

/// Batch converter for a directory of monthly report PDFs.
///
/// Each document's conversion is an independent, stateless transformation;
/// the batch processes documents sequentially and a per-document failure
/// does not stop the remaining documents (skip-and-continue).
///
/// # Example
///
/// ```no_run
/// use tabella::Converter;
///
/// fn main() -> tabella::Result<()> {
///     let summary = Converter::new("data_2024", "templates_2023", "output_2024")
///         .with_start_row(4)
///         .run()?;
///     println!("{} converted, {} failed", summary.converted(), summary.failed());
///     Ok(())
/// }
/// ```
pub struct Converter {
    input_dir: PathBuf,
    template_dir: PathBuf,
    output_dir: PathBuf,
    start_row: u32,
    start_column: u32,
    skip_existing: bool,
}

impl Converter {
    /// Create a converter over the three directories of a batch run.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        template_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            start_row: DEFAULT_START_ROW,
            start_column: DEFAULT_START_COLUMN,
            skip_existing: false,
        }
    }

    /// Set the 1-indexed row where extracted data starts.
    pub fn with_start_row(mut self, row: u32) -> Self {
        self.start_row = row.max(1);
        self
    }

    /// Set the 1-indexed column where extracted data starts.
    pub fn with_start_column(mut self, column: u32) -> Self {
        self.start_column = column.max(1);
        self
    }

    /// Skip documents whose output file already exists instead of
    /// overwriting it (the default is to overwrite).
    pub fn with_skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = skip;
        self
    }

    /// Discover the monthly reports in the input directory.
    pub fn documents(&self) -> Result<Vec<InputDocument>> {
        discover(&self.input_dir)
    }

    /// Output path for a document (`<MONTH> <YEAR>.xlsx` in the output directory).
    pub fn output_path(&self, document: &InputDocument) -> PathBuf {
        self.output_dir.join(document.output_name())
    }

    /// Convert a single document, honoring the skip-existing policy.
    ///
    /// Never returns an error: per-document failures are captured in the
    /// report so the caller can continue with the rest of the batch.
    pub fn process(&self, document: &InputDocument) -> DocumentReport {
        let outcome = self.try_process(document);
        match &outcome {
            Outcome::Converted { output, rows } => {
                log::info!(
                    "{} {}: {} rows -> {}",
                    document.month,
                    document.year,
                    rows,
                    output.display()
                );
            }
            Outcome::Skipped { output } => {
                log::info!(
                    "{} {}: output {} exists, skipped",
                    document.month,
                    document.year,
                    output.display()
                );
            }
            Outcome::Failed { error } => {
                log::error!("{} {}: {}", document.month, document.year, error);
            }
        }
        DocumentReport {
            document: document.clone(),
            outcome,
        }
    }

    fn try_process(&self, document: &InputDocument) -> Outcome {
        let output = self.output_path(document);
        if self.skip_existing && output.exists() {
            return Outcome::Skipped { output };
        }
        match self.convert_document(document, &output) {
            Ok(rows) => Outcome::Converted { output, rows },
            Err(error) => Outcome::Failed { error },
        }
    }

    fn convert_document(&self, document: &InputDocument, output: &Path) -> Result<usize> {
        let template = resolve_template(document, &self.template_dir)?;
        if template.kind == TemplateKind::Default {
            log::info!(
                "{} {}: using default template {}",
                document.month,
                document.year,
                template.path.display()
            );
        }

        let table = extract_table(&document.path)?;
        if table.is_empty() {
            log::warn!(
                "no table rows detected in {}; output will be a plain template copy",
                document.path.display()
            );
        }

        write_output(
            &template.path,
            &table,
            output,
            self.start_row,
            self.start_column,
        )?;
        Ok(table.row_count())
    }

    /// Run the whole batch: create the output directory, discover the
    /// reports, and convert each one in file-name order.
    ///
    /// Returns `Err` only for batch-level failures (unreadable input
    /// directory, uncreatable output directory); per-document failures are
    /// recorded in the summary.
    pub fn run(&self) -> Result<BatchSummary> {
        fs::create_dir_all(&self.output_dir)?;
        let documents = self.documents()?;
        log::info!(
            "found {} monthly reports in {}",
            documents.len(),
            self.input_dir.display()
        );

        let reports = documents.iter().map(|doc| self.process(doc)).collect();
        Ok(BatchSummary { reports })
    }
}

/// Outcome of one document's conversion.
#[derive(Debug)]
pub enum Outcome {
    /// The output spreadsheet was written.
    Converted {
        /// Path of the written spreadsheet.
        output: PathBuf,
        /// Number of table rows written.
        rows: usize,
    },
    /// The output already existed and `skip_existing` was set.
    Skipped {
        /// Path of the pre-existing spreadsheet.
        output: PathBuf,
    },
    /// The conversion failed; no output file was produced.
    Failed {
        /// The per-document error.
        error: Error,
    },
}

/// Per-document record in a [`BatchSummary`].
#[derive(Debug)]
pub struct DocumentReport {
    /// The discovered input document.
    pub document: InputDocument,
    /// What happened to it.
    pub outcome: Outcome,
}

/// Result of a batch run, one report per discovered document.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Per-document reports in batch order.
    pub reports: Vec<DocumentReport>,
}

impl BatchSummary {
    /// Number of documents converted.
    pub fn converted(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Converted { .. }))
            .count()
    }

    /// Number of documents skipped because their output already existed.
    pub fn skipped(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Skipped { .. }))
            .count()
    }

    /// Number of documents that failed.
    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
            .count()
    }

    /// True when no document failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_builder() {
        let converter = Converter::new("in", "tpl", "out")
            .with_start_row(6)
            .with_start_column(2)
            .with_skip_existing(true);

        assert_eq!(converter.start_row, 6);
        assert_eq!(converter.start_column, 2);
        assert!(converter.skip_existing);
    }

    #[test]
    fn test_converter_clamps_one_indexed_offsets() {
        let converter = Converter::new("in", "tpl", "out")
            .with_start_row(0)
            .with_start_column(0);

        assert_eq!(converter.start_row, 1);
        assert_eq!(converter.start_column, 1);
    }

    #[test]
    fn test_output_path() {
        let converter = Converter::new("in", "tpl", "out");
        let doc = InputDocument::from_path("in/GENNAIO_2024.pdf").unwrap();
        assert_eq!(
            converter.output_path(&doc),
            PathBuf::from("out/GENNAIO 2024.xlsx")
        );
    }

    #[test]
    fn test_summary_counts() {
        let doc = InputDocument::from_path("GENNAIO_2024.pdf").unwrap();
        let summary = BatchSummary {
            reports: vec![
                DocumentReport {
                    document: doc.clone(),
                    outcome: Outcome::Converted {
                        output: "out/GENNAIO 2024.xlsx".into(),
                        rows: 3,
                    },
                },
                DocumentReport {
                    document: doc.clone(),
                    outcome: Outcome::Skipped {
                        output: "out/GENNAIO 2024.xlsx".into(),
                    },
                },
                DocumentReport {
                    document: doc,
                    outcome: Outcome::Failed {
                        error: Error::Extraction("corrupt".into()),
                    },
                },
            ],
        };

        assert_eq!(summary.converted(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_run_fails_on_missing_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new(
            dir.path().join("missing"),
            dir.path().join("tpl"),
            dir.path().join("out"),
        );
        assert!(converter.run().is_err());
    }
}

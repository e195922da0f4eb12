//! Template resolution.
//!
//! Each output spreadsheet starts as a copy of a pre-formatted template from
//! the prior year: the month-specific `<MONTH> <YEAR-1>.xlsx` when present,
//! otherwise the default `<YEAR-1>.xlsx`.

use std::path::{Path, PathBuf};

use crate::discover::InputDocument;
use crate::error::{Error, Result};

/// How a template was matched to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Month-specific template (`<MONTH> <YEAR-1>.xlsx`).
    Exact,
    /// Year-wide default template (`<YEAR-1>.xlsx`).
    Default,
}

/// A resolved spreadsheet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Path to the template file.
    pub path: PathBuf,
    /// Whether the exact or the default template matched.
    pub kind: TemplateKind,
}

/// Resolve the template for a monthly report.
///
/// Prefers the exact `<MONTH> <YEAR-1>.xlsx` match; falls back to the
/// default `<YEAR-1>.xlsx`. Fails with [`Error::TemplateNotFound`] when
/// neither exists.
pub fn resolve_template(document: &InputDocument, template_dir: &Path) -> Result<Template> {
    let template_year = document.year - 1;

    let exact = template_dir.join(format!("{} {}.xlsx", document.month, template_year));
    if exact.is_file() {
        return Ok(Template {
            path: exact,
            kind: TemplateKind::Exact,
        });
    }

    let default = template_dir.join(format!("{}.xlsx", template_year));
    if default.is_file() {
        log::debug!(
            "no exact template for {} {}, using {}",
            document.month,
            template_year,
            default.display()
        );
        return Ok(Template {
            path: default,
            kind: TemplateKind::Default,
        });
    }

    Err(Error::TemplateNotFound {
        month: document.month.clone(),
        year: template_year,
    })
}

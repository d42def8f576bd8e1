//! Rendered report documents

use super::format::ReportFormat;

/// One rendered report: created once, never mutated, handed to the caller
/// for persistence.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub format: ReportFormat,
    /// File name by convention: `<run_name>.<ext>`
    pub file_name: String,
    /// Serialized report content in the document's format
    pub content: String,
}

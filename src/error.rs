//! Error types shared across the reporting pipeline.

use thiserror::Error;

/// Failures that abort a report run.
///
/// There is no recovery path: every variant is logged, reported through the
/// notifier where the contract asks for it, and then propagated out of the
/// process as a nonzero exit code.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required input column is absent from the header row.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// The input could not be parsed as tabular data at all (wrong file,
    /// ragged rows).  Individual unparsable currency values never surface
    /// here; those rows are dropped during cleaning.
    #[error("Failed to parse sales data: {0}")]
    Csv(#[from] csv::Error),

    /// Input or output file could not be opened, read, or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The chart document could not be assembled or saved.
    #[error("Failed to render report: {0}")]
    Pdf(String),
}

//! Fixed paths and column names used by the reporting pipeline.
//!
//! The utility is deliberately configuration-free: it consumes no CLI
//! arguments and no environment variables.  All locations are relative to the
//! working directory it is invoked from.  Tests construct a [`ReportPaths`]
//! pointing into a scratch directory instead.

use std::path::PathBuf;

/// Input sales export, comma-delimited with a header row.
pub const INPUT_CSV: &str = "sales-report.csv";

/// Generated multi-page chart document.
pub const OUTPUT_PDF: &str = "charts/sales_by_state_charts.pdf";

/// Append-style run log.
pub const LOG_FILE: &str = "charts/sales-report.log";

/// Grouping key column.
pub const STATE_COLUMN: &str = "State";

/// Identifier column; only its presence matters, rows are merely counted.
pub const ORDER_ID_COLUMN: &str = "Order Id";

/// Currency-formatted monetary column, e.g. `"$1,200.50"`.
pub const EARNINGS_COLUMN: &str = "Your Earnings";

/// Required columns in the fixed order they are validated in.
pub const REQUIRED_COLUMNS: [&str; 3] = [STATE_COLUMN, ORDER_ID_COLUMN, EARNINGS_COLUMN];

/// The file locations one pipeline run reads from and writes to.
#[derive(Clone, Debug)]
pub struct ReportPaths {
    /// Sales export to ingest.
    pub input: PathBuf,
    /// Chart document to produce (overwritten on every run).
    pub output: PathBuf,
    /// Log file the run appends to.
    pub log: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_CSV),
            output: PathBuf::from(OUTPUT_PDF),
            log: PathBuf::from(LOG_FILE),
        }
    }
}

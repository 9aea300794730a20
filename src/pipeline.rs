//! End-to-end orchestration: load, aggregate + render, notify.

use log::error;

use crate::config::ReportPaths;
use crate::error::ReportError;
use crate::loader;
use crate::notify::Notifier;
use crate::report::{self, ReportSummary};

/// Runs the whole pipeline once.
///
/// Loading failures are logged and reported through `notifier` before the
/// error propagates; on success a single notification is sent after the
/// document has been fully written.  Any failure aborts the run, there is no
/// partial output or retry.
pub fn run(paths: &ReportPaths, notifier: &dyn Notifier) -> Result<ReportSummary, ReportError> {
    let dataset = match loader::load_dataset(&paths.input) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("Error loading data: {err}");
            notifier.notify("Error", &format!("Failed to process data: {err}"));
            return Err(err);
        }
    };

    let summary = report::render_report(&dataset, &paths.output)?;

    notifier.notify(
        "Charts Generated",
        &format!("Sales charts saved at {}", paths.output.display()),
    );
    Ok(summary)
}

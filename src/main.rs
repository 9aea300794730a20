use std::process::ExitCode;

use log::error;

use sales_charts::config::ReportPaths;
use sales_charts::notify::DesktopNotifier;
use sales_charts::{logging, pipeline};

/// Generates the sales chart report for the fixed input, output and log
/// paths.  No arguments or environment variables are consumed; diagnostics go
/// to the log file and the desktop notification rather than the console.
fn main() -> ExitCode {
    let paths = ReportPaths::default();

    if let Err(err) = logging::init(&paths.log) {
        eprintln!("Failed to open log file {}: {err}", paths.log.display());
        return ExitCode::FAILURE;
    }

    match pipeline::run(&paths, &DesktopNotifier) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Report run failed: {err}");
            ExitCode::FAILURE
        }
    }
}

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use sales_charts::aggregate::{aggregate, Statistic};
use sales_charts::config::ReportPaths;
use sales_charts::error::ReportError;
use sales_charts::loader;
use sales_charts::notify::Notifier;
use sales_charts::pipeline;

/// Records every notification instead of touching OS notification APIs.
#[derive(Default)]
struct RecordingNotifier {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.calls
            .lock()
            .expect("notifier lock")
            .push((title.to_string(), body.to_string()));
    }
}

fn scratch_paths(dir: &Path, csv: &str) -> ReportPaths {
    let input = dir.join("sales-report.csv");
    fs::write(&input, csv).expect("write input csv");
    ReportPaths {
        input,
        output: dir.join("charts/sales_by_state_charts.pdf"),
        log: dir.join("charts/sales-report.log"),
    }
}

fn page_count(path: &Path) -> usize {
    let document = lopdf::Document::load(path).expect("load generated pdf");
    document.get_pages().len()
}

const SCENARIO_CSV: &str = "State,Order Id,Your Earnings\n\
    CA,1,$100.00\n\
    CA,2,$50.50\n\
    NY,3,abc\n";

#[test]
fn scenario_produces_two_page_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = scratch_paths(dir.path(), SCENARIO_CSV);
    let notifier = RecordingNotifier::default();

    let summary = pipeline::run(&paths, &notifier).expect("pipeline run");

    assert_eq!(summary.pages, 2);
    assert_eq!(page_count(&paths.output), 2);

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Charts Generated");
    assert!(calls[0].1.contains("sales_by_state_charts.pdf"));
}

#[test]
fn scenario_aggregates_drop_the_unparsable_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = scratch_paths(dir.path(), SCENARIO_CSV);

    let dataset = loader::load_dataset(&paths.input).expect("load dataset");
    assert_eq!(dataset.len(), 2);

    let counts = aggregate(&dataset, Statistic::Count);
    assert_eq!(counts.entries(), &[("CA".to_string(), 2.0)]);

    let sums = aggregate(&dataset, Statistic::Sum);
    assert_eq!(sums.entries(), &[("CA".to_string(), 150.5)]);
}

#[test]
fn missing_earnings_column_fails_before_rendering() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = scratch_paths(dir.path(), "State,Order Id\nCA,1\n");
    let notifier = RecordingNotifier::default();

    let err = pipeline::run(&paths, &notifier).expect_err("missing column");
    match err {
        ReportError::MissingColumn(column) => assert_eq!(column, "Your Earnings"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(!paths.output.exists(), "no output document on load failure");

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Error");
    assert!(calls[0].1.contains("Missing column: Your Earnings"));
}

#[test]
fn missing_input_file_notifies_and_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = ReportPaths {
        input: dir.path().join("does-not-exist.csv"),
        output: dir.path().join("charts/out.pdf"),
        log: dir.path().join("charts/run.log"),
    };
    let notifier = RecordingNotifier::default();

    let err = pipeline::run(&paths, &notifier).expect_err("missing input");
    assert!(matches!(err, ReportError::Io(_)));
    assert_eq!(notifier.calls().len(), 1);
    assert_eq!(notifier.calls()[0].0, "Error");
}

#[test]
fn empty_dataset_finalizes_a_document_without_pages() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = scratch_paths(dir.path(), "State,Order Id,Your Earnings\n");
    let notifier = RecordingNotifier::default();

    let summary = pipeline::run(&paths, &notifier).expect("pipeline run");

    assert_eq!(summary.pages, 0);
    assert!(paths.output.exists());
    assert_eq!(page_count(&paths.output), 0);
    assert_eq!(notifier.calls().len(), 1);
    assert_eq!(notifier.calls()[0].0, "Charts Generated");
}

#[test]
fn all_rows_unparsable_behaves_like_empty_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = "State,Order Id,Your Earnings\nCA,1,abc\nNY,2,\n";
    let paths = scratch_paths(dir.path(), csv);
    let notifier = RecordingNotifier::default();

    let summary = pipeline::run(&paths, &notifier).expect("pipeline run");
    assert_eq!(summary.pages, 0);
}

#[test]
fn rerun_overwrites_the_previous_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = scratch_paths(dir.path(), SCENARIO_CSV);
    let notifier = RecordingNotifier::default();

    let first = pipeline::run(&paths, &notifier).expect("first run");
    let second = pipeline::run(&paths, &notifier).expect("second run");

    assert_eq!(first.pages, second.pages);
    // Overwritten, not appended: still exactly two pages.
    assert_eq!(page_count(&paths.output), 2);
    assert_eq!(notifier.calls().len(), 2);
}

#[test]
fn log_file_receives_formatted_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("charts/sales-report.log");

    sales_charts::logging::init(&log_path).expect("install file logger");
    log::info!("log format check");
    log::logger().flush();

    let contents = fs::read_to_string(&log_path).expect("read log file");
    let line = contents
        .lines()
        .find(|line| line.ends_with("log format check"))
        .expect("logged line present");
    // `<timestamp> - <LEVEL> - <message>`
    assert!(line.contains(" - INFO - "), "unexpected line: {line}");
}

#[test]
fn more_than_ten_states_render_ten_bars_per_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut csv = String::from("State,Order Id,Your Earnings\n");
    for index in 0..12 {
        csv.push_str(&format!("S{index:02},{index},${}.00\n", (index + 1) * 10));
    }
    let paths = scratch_paths(dir.path(), &csv);

    let dataset = loader::load_dataset(&paths.input).expect("load dataset");
    let sums = aggregate(&dataset, Statistic::Sum);
    assert_eq!(sums.entries().len(), 10);

    let notifier = RecordingNotifier::default();
    let summary = pipeline::run(&paths, &notifier).expect("pipeline run");
    assert_eq!(summary.pages, 2);
}

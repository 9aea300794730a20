//! CSV ingestion: header validation, currency normalization, row cleaning.

use std::fs::File;
use std::path::Path;

use log::{debug, error, info};
use serde::Deserialize;

use crate::config::REQUIRED_COLUMNS;
use crate::dataset::{Dataset, SaleRecord};
use crate::error::ReportError;

/// Raw shape of one input row before cleaning.  Earnings stay textual here
/// because the export carries them as currency-formatted strings.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Order Id")]
    order_id: String,
    #[serde(rename = "Your Earnings")]
    earnings: String,
}

/// Loads the sales export at `path` and returns the cleaned [`Dataset`].
///
/// The header row must contain the `State`, `Order Id` and `Your Earnings`
/// columns; validation checks them in that order and fails on the first one
/// missing.  Rows whose monetary value does not parse after stripping `$` and
/// thousands separators are dropped.  Every invocation writes a summary log
/// line; failures are logged before they propagate.
pub fn load_dataset(path: &Path) -> Result<Dataset, ReportError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            error!("Missing column: {column}");
            return Err(ReportError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize::<RawRow>() {
        let row = row?;
        match parse_currency(&row.earnings) {
            Some(earnings) => records.push(SaleRecord {
                state: row.state,
                order_id: row.order_id,
                earnings,
            }),
            None => {
                debug!(
                    "Dropping row with unparsable earnings {:?} (state {:?})",
                    row.earnings, row.state
                );
                dropped += 1;
            }
        }
    }

    info!(
        "Loaded {} sales records from {} ({} rows dropped)",
        records.len(),
        path.display(),
        dropped
    );
    Ok(Dataset::new(records))
}

/// Parses a currency-formatted amount such as `"$1,234.56"` into its numeric
/// value.  Returns `None` for empty or non-numeric input.  `"nan"` parses as
/// a float but is not a monetary amount, so it is rejected too.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn parses_currency_formats() {
        assert_eq!(parse_currency("$1,234.56"), Some(1234.56));
        assert_eq!(parse_currency(" $50.50 "), Some(50.50));
        assert_eq!(parse_currency("1200"), Some(1200.0));
        assert_eq!(parse_currency("-$10.00"), Some(-10.0));
    }

    #[test]
    fn rejects_unparsable_currency() {
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("   "), None);
        assert_eq!(parse_currency("abc"), None);
        assert_eq!(parse_currency("$1.2.3"), None);
        assert_eq!(parse_currency("nan"), None);
    }

    #[test]
    fn drops_rows_with_bad_earnings() {
        let file = write_csv(
            "State,Order Id,Your Earnings\n\
             CA,1,$100.00\n\
             CA,2,$50.50\n\
             NY,3,abc\n",
        );

        let dataset = load_dataset(file.path()).expect("load dataset");
        assert_eq!(dataset.len(), 2);
        assert!(dataset.records().iter().all(|record| record.state == "CA"));
    }

    #[test]
    fn keeps_extra_columns_out_of_the_way() {
        let file = write_csv(
            "Order Date,State,Order Id,Your Earnings\n\
             2024-01-01,TX,9,$12.00\n",
        );

        let dataset = load_dataset(file.path()).expect("load dataset");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].earnings, 12.0);
    }

    #[test]
    fn reports_first_missing_column_in_check_order() {
        let file = write_csv("Your Earnings\n$1.00\n");

        let err = load_dataset(file.path()).expect_err("missing columns");
        match err {
            ReportError::MissingColumn(column) => assert_eq!(column, "State"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reports_missing_earnings_column() {
        let file = write_csv("State,Order Id\nCA,1\n");

        let err = load_dataset(file.path()).expect_err("missing earnings");
        match err {
            ReportError::MissingColumn(column) => assert_eq!(column, "Your Earnings"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let err = load_dataset(Path::new("no-such-sales-report.csv")).expect_err("missing file");
        assert!(matches!(err, ReportError::Io(_)));
    }
}

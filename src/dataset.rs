//! Data structures describing the cleaned contents of one sales export.
//!
//! The types in this module deliberately avoid referencing the CSV or PDF
//! crates so that aggregation and rendering operate on a plain in-memory
//! model.  A [`Dataset`] is produced once per run by [`crate::loader`] and is
//! immutable afterwards; cleaning (dropping rows with unparsable monetary
//! values) happens entirely during loading.

/// One cleaned row of the sales export.
#[derive(Clone, Debug, PartialEq)]
pub struct SaleRecord {
    /// Grouping key, compared by exact string match.
    pub state: String,
    /// Order identifier.  Only its existence matters; rows are counted, the
    /// value itself is never interpreted.
    pub order_id: String,
    /// Monetary amount with currency formatting already stripped and parsed.
    pub earnings: f64,
}

/// The ordered collection of cleaned records for one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    /// Wraps the given records, preserving their input order.
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// Returns the cleaned records in input order.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Returns the number of cleaned records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

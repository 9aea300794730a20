//! Grouping and summary statistics over a cleaned [`Dataset`].

use std::collections::BTreeMap;

use crate::dataset::Dataset;

/// How many groups an [`Aggregate`] retains at most.
pub const TOP_GROUPS: usize = 10;

/// The summary statistic computed per group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statistic {
    /// Number of records in the group.
    Count,
    /// Arithmetic sum of the earnings in the group.
    Sum,
}

/// A grouping-key-to-statistic mapping, top-10 filtered and ordered for
/// rendering.
///
/// Entries are sorted ascending by statistic value so that a horizontal bar
/// chart drawn bottom-up places the largest group at the top of the page.
/// Ties are broken alphabetically by group key; the selection of the top 10
/// uses the same deterministic tie-break.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregate {
    entries: Vec<(String, f64)>,
}

impl Aggregate {
    /// Returns the `(group, value)` pairs in display order (ascending value).
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Returns `true` if no groups exist; the corresponding chart is skipped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the largest statistic value, used to scale the value axis.
    pub fn max_value(&self) -> f64 {
        self.entries.last().map(|(_, value)| *value).unwrap_or(0.0)
    }
}

/// Groups `dataset` by state and computes `statistic` per group, keeping the
/// [`TOP_GROUPS`] largest values.
pub fn aggregate(dataset: &Dataset, statistic: Statistic) -> Aggregate {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in dataset.records() {
        let slot = groups.entry(record.state.as_str()).or_insert(0.0);
        match statistic {
            Statistic::Count => *slot += 1.0,
            Statistic::Sum => *slot += record.earnings,
        }
    }

    let mut entries: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(state, value)| (state.to_string(), value))
        .collect();

    // Largest first for selection, alphabetical on ties.
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(TOP_GROUPS);

    // Smallest first for display.
    entries.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    Aggregate { entries }
}

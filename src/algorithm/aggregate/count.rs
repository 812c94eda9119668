//! Grouped counts
//!
//! Counts come back ordered by descending count, ties broken by canonical
//! category order, so the first entry is always the deterministic
//! "highest" group.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::algorithm::aggregate::dimension::{Category, Dimension};
use crate::models::{CaseRecord, RegionId};
use crate::utils::logging::log_stage;

/// Key of one group: a single category or a pair from two dimensions
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    /// Grouped by one dimension
    Single(Category),
    /// Grouped by two dimensions
    Pair(Category, Category),
}

impl From<Category> for GroupKey {
    fn from(category: Category) -> Self {
        Self::Single(category)
    }
}

impl From<(Category, Category)> for GroupKey {
    fn from((first, second): (Category, Category)) -> Self {
        Self::Pair(first, second)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(category) => write!(f, "{category}"),
            Self::Pair(first, second) => write!(f, "({first}, {second})"),
        }
    }
}

/// Ordered `(key, count)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    entries: Vec<(GroupKey, u64)>,
}

impl AggregationResult {
    /// Build a result from raw counts, ordering by count then key
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (GroupKey, u64)>) -> Self {
        let mut entries: Vec<(GroupKey, u64)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// The ordered entries
    #[must_use]
    pub fn entries(&self) -> &[(GroupKey, u64)] {
        &self.entries
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Count for a key; unseen keys count zero
    #[must_use]
    pub fn get(&self, key: &GroupKey) -> u64 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, count)| *count)
    }

    /// The group with the highest count, canonical order breaking ties
    #[must_use]
    pub fn highest(&self) -> Option<(&GroupKey, u64)> {
        self.entries.first().map(|(key, count)| (key, *count))
    }

    /// Zero-fill against a universe of keys
    ///
    /// The result lists the universe in its given order, each with its count
    /// or zero, followed by any observed key outside the universe.
    #[must_use]
    pub fn zero_filled(&self, universe: impl IntoIterator<Item = GroupKey>) -> Self {
        let mut remaining: BTreeMap<&GroupKey, u64> =
            self.entries.iter().map(|(key, count)| (key, *count)).collect();

        let mut entries: Vec<(GroupKey, u64)> = universe
            .into_iter()
            .map(|key| {
                let count = remaining.remove(&key).unwrap_or(0);
                (key, count)
            })
            .collect();
        entries.extend(remaining.into_iter().map(|(key, count)| (key.clone(), count)));

        Self { entries }
    }

    /// Zero-fill a single-dimension result against the dimension's known
    /// categories; dimensions without a universe are returned unchanged
    #[must_use]
    pub fn zero_filled_for(&self, dimension: Dimension) -> Self {
        match dimension.universe() {
            Some(universe) => self.zero_filled(universe.into_iter().map(GroupKey::Single)),
            None => self.clone(),
        }
    }

    /// Each group's share of the total, in percent
    #[must_use]
    pub fn shares(&self) -> Vec<(GroupKey, f64)> {
        let total = self.total();
        self.entries
            .iter()
            .map(|(key, count)| {
                let share = if total > 0 {
                    (*count as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                (key.clone(), share)
            })
            .collect()
    }
}

/// Count records per category of one dimension
///
/// Categories with no records are absent; use `zero_filled_for` when a
/// stable axis is needed.
///
/// # Arguments
/// * `records` - Records to group, owned or borrowed
/// * `dimension` - The field to group by
///
/// # Returns
/// Counts ordered by descending count
pub fn group_count<R: Borrow<CaseRecord>>(
    records: &[R],
    dimension: Dimension,
) -> AggregationResult {
    let mut counts: FxHashMap<Category, u64> = FxHashMap::default();
    for record in records {
        *counts
            .entry(dimension.category_of(record.borrow()))
            .or_insert(0) += 1;
    }

    log_stage(&format!("group by {dimension}"), records.len(), counts.len());
    AggregationResult::from_counts(counts.into_iter().map(|(k, v)| (GroupKey::Single(k), v)))
}

/// Count records per combination of two dimensions
pub fn group_count_pair<R: Borrow<CaseRecord>>(
    records: &[R],
    first: Dimension,
    second: Dimension,
) -> AggregationResult {
    let mut counts: FxHashMap<(Category, Category), u64> = FxHashMap::default();
    for record in records {
        let case = record.borrow();
        *counts
            .entry((first.category_of(case), second.category_of(case)))
            .or_insert(0) += 1;
    }

    log_stage(
        &format!("group by {first} x {second}"),
        records.len(),
        counts.len(),
    );
    AggregationResult::from_counts(counts.into_iter().map(|(k, v)| (GroupKey::from(k), v)))
}

/// Number of records per region, in canonical region order
pub fn counts_by_region<R: Borrow<CaseRecord>>(records: &[R]) -> BTreeMap<RegionId, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        let case: &CaseRecord = record.borrow();
        *counts.entry(case.region.clone()).or_insert(0) += 1;
    }
    counts
}

/// The region with the most records
///
/// Ties go to the region that comes first in the canonical region list,
/// regardless of record order.
pub fn highest_region<R: Borrow<CaseRecord>>(records: &[R]) -> Option<(RegionId, u64)> {
    counts_by_region(records)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}

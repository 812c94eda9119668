//! Resampling records into calendar buckets

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::algorithm::aggregate::{Category, Dimension};
use crate::algorithm::temporal::bucket::{Frequency, bucket_range};
use crate::algorithm::temporal::series::{TimePoint, TimeSeries};
use crate::models::CaseRecord;
use crate::utils::logging::log_stage;

/// Output of [`resample`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resampled {
    /// One series over all records
    Single(TimeSeries),
    /// One series per category, all over the same bucket range
    ByCategory(BTreeMap<Category, TimeSeries>),
}

/// Count records per calendar bucket, optionally split by a dimension
///
/// # Arguments
/// * `records` - Records to resample, owned or borrowed
/// * `frequency` - Bucket width
/// * `by` - Optional dimension to split the series by
///
/// # Returns
/// A single series, or one series per observed category. Empty input gives
/// an empty series (or an empty map).
pub fn resample<R: Borrow<CaseRecord>>(
    records: &[R],
    frequency: Frequency,
    by: Option<Dimension>,
) -> Resampled {
    match by {
        None => Resampled::Single(resample_series(records, frequency)),
        Some(dimension) => Resampled::ByCategory(resample_by(records, frequency, dimension)),
    }
}

/// Count records per calendar bucket
///
/// The series runs from the bucket of the earliest record to the bucket of
/// the latest, with zero for buckets that have no records.
pub fn resample_series<R: Borrow<CaseRecord>>(records: &[R], frequency: Frequency) -> TimeSeries {
    let Some((first, last)) = date_span(records) else {
        return TimeSeries::empty(frequency);
    };

    let mut counts: FxHashMap<NaiveDate, u64> = FxHashMap::default();
    for record in records {
        let date = diagnosis_date(record);
        *counts.entry(frequency.bucket_start(date)).or_insert(0) += 1;
    }

    let series = fill(frequency, &bucket_range(first, last, frequency), &counts);
    log_stage(&format!("resample {frequency}"), records.len(), series.len());
    series
}

/// Count records per calendar bucket, one series per category
///
/// Every series covers the bucket range of the whole input, so the series
/// line up bucket for bucket.
pub fn resample_by<R: Borrow<CaseRecord>>(
    records: &[R],
    frequency: Frequency,
    dimension: Dimension,
) -> BTreeMap<Category, TimeSeries> {
    let Some((first, last)) = date_span(records) else {
        return BTreeMap::new();
    };
    let buckets = bucket_range(first, last, frequency);

    let mut counts: BTreeMap<Category, FxHashMap<NaiveDate, u64>> = BTreeMap::new();
    for record in records {
        let case: &CaseRecord = record.borrow();
        *counts
            .entry(dimension.category_of(case))
            .or_default()
            .entry(frequency.bucket_start(case.diagnosis_date))
            .or_insert(0) += 1;
    }

    log_stage(
        &format!("resample {frequency} by {dimension}"),
        records.len(),
        counts.len() * buckets.len(),
    );
    counts
        .into_iter()
        .map(|(category, per_bucket)| (category, fill(frequency, &buckets, &per_bucket)))
        .collect()
}

fn fill(
    frequency: Frequency,
    buckets: &[NaiveDate],
    counts: &FxHashMap<NaiveDate, u64>,
) -> TimeSeries {
    let points = buckets
        .iter()
        .map(|start| TimePoint {
            period_start: *start,
            value: counts.get(start).copied().unwrap_or(0) as f64,
        })
        .collect();
    TimeSeries::from_points(frequency, points)
}

fn date_span<R: Borrow<CaseRecord>>(records: &[R]) -> Option<(NaiveDate, NaiveDate)> {
    match records.iter().map(diagnosis_date).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(d) => Some((d, d)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

fn diagnosis_date<R: Borrow<CaseRecord>>(record: &R) -> NaiveDate {
    let case: &CaseRecord = record.borrow();
    case.diagnosis_date
}

//! Policy Impact Evaluator
//!
//! Compares monthly case counts before and after a cutoff date. The two
//! periods are summarised independently: each is zero-filled over its own
//! observed range, and they are compared by mean, not bucket by bucket.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::borrow::Borrow;

use crate::algorithm::temporal::{Frequency, TimeSeries, population_stats, resample_series};
use crate::error::Result;
use crate::filter::parse_date;
use crate::models::CaseRecord;

/// Before/after comparison around a cutoff date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyImpact {
    /// First day of the "post" period
    pub cutoff: NaiveDate,
    /// Monthly counts before the cutoff
    pub pre: TimeSeries,
    /// Monthly counts from the cutoff on
    pub post: TimeSeries,
    /// Mean monthly count before the cutoff
    pub pre_mean: f64,
    /// Population standard deviation before the cutoff
    pub pre_stddev: f64,
    /// Mean monthly count from the cutoff on
    pub post_mean: f64,
    /// Population standard deviation from the cutoff on
    pub post_stddev: f64,
    /// Relative change of the mean in percent; `None` when the pre-period
    /// mean is zero
    pub percent_change: Option<f64>,
}

/// Split records at `cutoff` and compare monthly counts
///
/// Records dated before the cutoff form the pre period; records on or after
/// it form the post period. An empty period has an empty series with mean
/// and standard deviation zero.
pub fn assess<R: Borrow<CaseRecord>>(records: &[R], cutoff: NaiveDate) -> PolicyImpact {
    let (pre_records, post_records): (Vec<&CaseRecord>, Vec<&CaseRecord>) = records
        .iter()
        .map(|record| {
            let case: &CaseRecord = record.borrow();
            case
        })
        .partition(|case| case.diagnosis_date < cutoff);

    let pre = resample_series(&pre_records, Frequency::Month);
    let post = resample_series(&post_records, Frequency::Month);

    let (pre_mean, pre_stddev) = population_stats(&pre.values());
    let (post_mean, post_stddev) = population_stats(&post.values());
    let percent_change = (pre_mean > 0.0).then(|| (post_mean - pre_mean) / pre_mean * 100.0);

    debug!(
        "Policy cutoff {cutoff}: {} records before, {} after",
        pre_records.len(),
        post_records.len()
    );

    PolicyImpact {
        cutoff,
        pre,
        post,
        pre_mean,
        pre_stddev,
        post_mean,
        post_stddev,
        percent_change,
    }
}

/// [`assess`] with the cutoff supplied as text
///
/// # Errors
/// Returns `InvalidDateFormat` for field `policy_date` if the cutoff does
/// not match `format`.
pub fn assess_str<R: Borrow<CaseRecord>>(
    records: &[R],
    cutoff: &str,
    format: &str,
) -> Result<PolicyImpact> {
    let cutoff = parse_date("policy_date", cutoff, format)?;
    Ok(assess(records, cutoff))
}

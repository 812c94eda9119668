//! Threshold-based risk classification

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::aggregate::ranked_rates;
use crate::error::{AnalysisError, Result};
use crate::models::RegionId;

/// One region's rate and whether it meets the risk threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskEntry {
    /// The region
    pub region: RegionId,
    /// Its rate
    pub rate: f64,
    /// Whether `rate >= threshold`
    pub at_risk: bool,
}

/// Check that a threshold lies in (0, 1]
///
/// # Errors
/// Returns `ValueOutOfRange` otherwise, including for NaN.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::out_of_range("threshold", threshold, "(0, 1]"))
    }
}

/// Regions whose rate meets or exceeds the threshold
///
/// # Errors
/// Returns `ValueOutOfRange` for a threshold outside (0, 1].
pub fn high_risk(rates: &BTreeMap<RegionId, f64>, threshold: f64) -> Result<BTreeSet<RegionId>> {
    validate_threshold(threshold)?;
    Ok(rates
        .iter()
        .filter(|(_, rate)| **rate >= threshold)
        .map(|(region, _)| region.clone())
        .collect())
}

/// Every region with its rate and risk flag, highest rate first
///
/// # Errors
/// Returns `ValueOutOfRange` for a threshold outside (0, 1].
pub fn classify_risk(rates: &BTreeMap<RegionId, f64>, threshold: f64) -> Result<Vec<RiskEntry>> {
    validate_threshold(threshold)?;
    Ok(ranked_rates(rates)
        .into_iter()
        .map(|(region, rate)| RiskEntry {
            region,
            rate,
            at_risk: rate >= threshold,
        })
        .collect())
}

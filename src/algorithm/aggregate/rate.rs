//! Population-normalised rates

use log::warn;
use std::collections::BTreeMap;

use crate::error::{AnalysisError, Result};
use crate::models::{RegionId, RegionProfile};

/// Cases per `per` residents for every profiled region
///
/// A region with a profile but no entry in `counts` gets a rate of zero.
/// Counts for regions without a profile are dropped with a warning.
///
/// # Arguments
/// * `counts` - Case counts per region
/// * `profiles` - One profile per region
/// * `per` - Population base, e.g. 100 000; 1 gives plain prevalence
///
/// # Errors
/// Returns `InvalidRegionProfile` for a profile with zero population and
/// `ValueOutOfRange` for a zero base.
pub fn rate_per_capita<'a>(
    counts: &BTreeMap<RegionId, u64>,
    profiles: impl IntoIterator<Item = &'a RegionProfile>,
    per: u32,
) -> Result<BTreeMap<RegionId, f64>> {
    if per == 0 {
        return Err(AnalysisError::out_of_range("per", 0.0, ">= 1"));
    }

    let mut rates = BTreeMap::new();
    for profile in profiles {
        if profile.population == 0 {
            return Err(AnalysisError::InvalidRegionProfile {
                region: profile.region.to_string(),
                reason: "population is zero".to_string(),
            });
        }
        let count = counts.get(&profile.region).copied().unwrap_or(0);
        let rate = (count as f64 * f64::from(per)) / profile.population as f64;
        rates.insert(profile.region.clone(), rate);
    }

    for region in counts.keys().filter(|r| !rates.contains_key(*r)) {
        warn!("Dropping counts for region '{region}' without a profile");
    }
    Ok(rates)
}

/// Rates sorted by descending value, canonical region order breaking ties
#[must_use]
pub fn ranked_rates(rates: &BTreeMap<RegionId, f64>) -> Vec<(RegionId, f64)> {
    let mut ranked: Vec<(RegionId, f64)> =
        rates.iter().map(|(region, rate)| (region.clone(), *rate)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Population density per region
pub fn densities<'a>(
    profiles: impl IntoIterator<Item = &'a RegionProfile>,
) -> BTreeMap<RegionId, f64> {
    profiles
        .into_iter()
        .map(|profile| (profile.region.clone(), profile.density()))
        .collect()
}

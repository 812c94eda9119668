//! Linear correlation between region-level metrics
//!
//! Pearson's r and the ordinary least-squares line are always computed over
//! the same paired observations.

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::algorithm::aggregate::{counts_by_region, densities, rate_per_capita};
use crate::error::{AnalysisError, Result};
use crate::models::{CaseRecord, RegionId};
use crate::store::RecordStore;

/// Minimum number of paired observations
pub const MIN_OBSERVATIONS: usize = 2;

/// Correlation and least-squares fit of `y` on `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// Pearson correlation coefficient, in [-1, 1]
    pub r: f64,
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Number of paired observations used
    pub n: usize,
}

impl CorrelationResult {
    /// Value of the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Correlate two equally long series
///
/// Pairs where either value is not finite are treated as missing and
/// dropped from both series before anything is computed.
///
/// # Errors
/// Returns `ValueOutOfRange` if the series differ in length,
/// `InsufficientData` with fewer than two usable pairs and `ZeroVariance`
/// if either series is constant.
pub fn correlate(xs: &[f64], ys: &[f64]) -> Result<CorrelationResult> {
    if xs.len() != ys.len() {
        return Err(AnalysisError::out_of_range(
            "ys.len",
            ys.len() as f64,
            format!("equal to xs.len ({})", xs.len()),
        ));
    }

    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (*x, *y))
        .collect();

    fit(&pairs)
}

/// Correlate two region-keyed metrics
///
/// Only regions present in both maps take part.
///
/// # Errors
/// See [`correlate`].
pub fn correlate_regions(
    xs: &BTreeMap<RegionId, f64>,
    ys: &BTreeMap<RegionId, f64>,
) -> Result<CorrelationResult> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .filter_map(|(region, x)| ys.get(region).map(|y| (*x, *y)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    fit(&pairs)
}

/// Correlate population density with prevalence (cases per resident)
///
/// Every profiled region takes part; regions without cases have zero
/// prevalence.
///
/// # Errors
/// Returns a profile error for a zero-population region, or any error
/// from [`correlate`].
pub fn density_prevalence<R: Borrow<CaseRecord>>(
    store: &RecordStore,
    cases: &[R],
) -> Result<CorrelationResult> {
    let density = densities(store.profiles());
    let prevalence = rate_per_capita(&counts_by_region(cases), store.profiles(), 1)?;
    correlate_regions(&density, &prevalence)
}

fn fit(pairs: &[(f64, f64)]) -> Result<CorrelationResult> {
    let n = pairs.len();
    if n < MIN_OBSERVATIONS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        });
    }

    let count = n as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / count;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / count;

    let (sxx, syy, sxy) = pairs.iter().fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });

    if sxx == 0.0 {
        return Err(AnalysisError::ZeroVariance {
            series: "x".to_string(),
        });
    }
    if syy == 0.0 {
        return Err(AnalysisError::ZeroVariance {
            series: "y".to_string(),
        });
    }

    let slope = sxy / sxx;
    Ok(CorrelationResult {
        r: (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0),
        slope,
        intercept: mean_y - slope * mean_x,
        n,
    })
}

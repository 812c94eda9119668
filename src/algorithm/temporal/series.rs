//! Time series values and descriptive statistics

use chrono::NaiveDate;
use serde::Serialize;

use crate::algorithm::temporal::bucket::Frequency;

/// One bucket of a time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    /// First day of the bucket
    pub period_start: NaiveDate,
    /// Value for the bucket
    pub value: f64,
}

/// Ordered, gap-free sequence of bucket values
///
/// Points ascend by `period_start`; buckets without records carry zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    frequency: Frequency,
    points: Vec<TimePoint>,
}

impl TimeSeries {
    /// An empty series
    #[must_use]
    pub const fn empty(frequency: Frequency) -> Self {
        Self {
            frequency,
            points: Vec::new(),
        }
    }

    pub(crate) fn from_points(frequency: Frequency, points: Vec<TimePoint>) -> Self {
        Self { frequency, points }
    }

    /// Bucket width
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The points, oldest first
    #[must_use]
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// Number of buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bucket values, oldest first
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Sum of all bucket values
    #[must_use]
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Value of the bucket starting on `period_start`
    #[must_use]
    pub fn value_at(&self, period_start: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.period_start.cmp(&period_start))
            .ok()
            .map(|idx| self.points[idx].value)
    }

    /// Display labels of every bucket
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| self.frequency.label(p.period_start))
            .collect()
    }

    /// Descriptive statistics, or `None` for an empty series
    #[must_use]
    pub fn summary(&self) -> Option<SeriesSummary> {
        let values = self.values();
        let latest = *values.last()?;
        let (mean, stddev) = population_stats(&values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let change_from_previous = match values.as_slice() {
            [.., previous, last] if *previous != 0.0 => Some((last - previous) / previous * 100.0),
            _ => None,
        };

        Some(SeriesSummary {
            mean,
            stddev,
            min,
            max,
            latest,
            change_from_previous,
        })
    }
}

/// Descriptive statistics of a time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Mean bucket value
    pub mean: f64,
    /// Population standard deviation of bucket values
    pub stddev: f64,
    /// Smallest bucket value
    pub min: f64,
    /// Largest bucket value
    pub max: f64,
    /// Value of the last bucket
    pub latest: f64,
    /// Percent change from the second-to-last bucket to the last; `None`
    /// with fewer than two buckets or when the earlier bucket is zero
    pub change_from_previous: Option<f64>,
}

/// Population mean and standard deviation; both zero for no values
#[must_use]
pub fn population_stats(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

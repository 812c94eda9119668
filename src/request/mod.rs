//! Analysis requests
//!
//! A request bundles a filter with the analysis to run on its result. It is
//! a plain value passed into the pipeline; no selection state lives in the
//! core between requests.

pub mod analyzer;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::aggregate::{AggregationResult, Dimension};
use crate::algorithm::correlation::CorrelationResult;
use crate::algorithm::policy::PolicyImpact;
use crate::algorithm::risk::RiskEntry;
use crate::algorithm::temporal::{Frequency, Resampled, SeriesSummary};
use crate::filter::FilterSpec;
use crate::models::RegionId;

pub use analyzer::Analyzer;

/// The analysis to run on the filtered records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Counts per category of one dimension
    Count(Dimension),
    /// Counts per combination of two dimensions
    CountPair(Dimension, Dimension),
    /// The region with the most cases
    HighestRegion,
    /// Cases per `per` residents for every region; `None` uses the
    /// configured base
    RatePerCapita {
        /// Population base
        per: Option<u32>,
    },
    /// Population density against prevalence
    DensityCorrelation,
    /// Regions whose prevalence meets a threshold; `None` uses the
    /// configured threshold
    HighRisk {
        /// Prevalence threshold in (0, 1]
        threshold: Option<f64>,
    },
    /// Counts per calendar bucket
    Trend {
        /// Bucket width
        frequency: Frequency,
        /// Optional dimension to split by
        by: Option<Dimension>,
    },
    /// Monthly counts before and after a date
    PolicyImpact {
        /// First day of the post period
        cutoff: NaiveDate,
    },
}

/// A filter plus the analysis to run on its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Which records to analyse
    #[serde(default)]
    pub filter: FilterSpec,
    /// What to compute
    pub kind: AnalysisKind,
}

impl AnalysisRequest {
    /// Create a request
    #[must_use]
    pub const fn new(filter: FilterSpec, kind: AnalysisKind) -> Self {
        Self { filter, kind }
    }

    /// Run an analysis over every record
    #[must_use]
    pub fn unfiltered(kind: AnalysisKind) -> Self {
        Self::new(FilterSpec::default(), kind)
    }
}

/// Result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisOutput {
    /// Grouped counts
    Counts(AggregationResult),
    /// Region with the most cases and its count; `None` when no records
    /// matched
    Highest(Option<(RegionId, u64)>),
    /// Rate per region
    Rates(BTreeMap<RegionId, f64>),
    /// Density/prevalence correlation
    Correlation(CorrelationResult),
    /// Risk classification
    Risk {
        /// Threshold used
        threshold: f64,
        /// Regions meeting the threshold
        high_risk: BTreeSet<RegionId>,
        /// Every region, highest prevalence first
        regions: Vec<RiskEntry>,
    },
    /// Time series
    Trend {
        /// The resampled series
        series: Resampled,
        /// Statistics of an unsplit series
        summary: Option<SeriesSummary>,
    },
    /// Before/after comparison
    Policy(PolicyImpact),
}

/// An analysis result with the context a presentation layer shows with it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Active filters, human-readable
    pub filters: String,
    /// Number of records in the store
    pub total_cases: usize,
    /// Number of records that passed the filter
    pub filtered_cases: usize,
    /// Date relative windows were measured back from
    pub reference_date: NaiveDate,
    /// The result
    pub output: AnalysisOutput,
}

//! Configuration for the analysis pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AnalysisError, Result};

/// How relative time windows ("Last Year", "Last 5 Years") find their "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeAnchor {
    /// The local calendar date at evaluation time. Results change from one
    /// day to the next even for identical data.
    #[default]
    WallClock,
    /// The latest diagnosis date in the data being filtered
    DatasetMax,
}

/// Configuration for the `Analyzer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Population base for per-capita rates (cases per N people)
    pub per_capita_base: u32,
    /// Default prevalence threshold for high-risk classification, in (0, 1]
    pub risk_threshold: f64,
    /// `chrono` format string for dates supplied as text
    pub date_format: String,
    /// Reference point for relative time windows
    pub relative_anchor: RelativeAnchor,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            per_capita_base: 100_000,
            risk_threshold: 0.01,
            date_format: "%Y-%m-%d".to_string(),
            relative_anchor: RelativeAnchor::WallClock,
        }
    }
}

impl AnalysisConfig {
    /// Check that every setting is usable
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` for a threshold outside (0, 1] or a zero
    /// per-capita base.
    pub fn validate(&self) -> Result<()> {
        if !(self.risk_threshold > 0.0 && self.risk_threshold <= 1.0) {
            return Err(AnalysisError::out_of_range(
                "risk_threshold",
                self.risk_threshold,
                "(0, 1]",
            ));
        }
        if self.per_capita_base == 0 {
            return Err(AnalysisError::out_of_range("per_capita_base", 0.0, ">= 1"));
        }
        Ok(())
    }
}

impl fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Configuration:")?;
        writeln!(f, "  Per-capita Base: {}", self.per_capita_base)?;
        writeln!(f, "  Risk Threshold: {:.2}%", self.risk_threshold * 100.0)?;
        writeln!(f, "  Date Format: {}", self.date_format)?;
        writeln!(f, "  Relative Anchor: {:?}", self.relative_anchor)?;
        Ok(())
    }
}

//! Region profile entity model

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::models::types::RegionId;

/// Population and area of one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// The region this profile describes
    pub region: RegionId,
    /// Number of residents
    pub population: u64,
    /// Land area in square kilometres
    pub area_sqkm: f64,
}

impl RegionProfile {
    /// Create a new region profile
    #[must_use]
    pub fn new(region: impl Into<RegionId>, population: u64, area_sqkm: f64) -> Self {
        Self {
            region: region.into(),
            population,
            area_sqkm,
        }
    }

    /// Residents per square kilometre
    #[must_use]
    pub fn density(&self) -> f64 {
        self.population as f64 / self.area_sqkm
    }

    /// Check the area invariant
    ///
    /// # Errors
    /// Returns `InvalidRegionProfile` if the area is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !(self.area_sqkm.is_finite() && self.area_sqkm > 0.0) {
            return Err(AnalysisError::InvalidRegionProfile {
                region: self.region.to_string(),
                reason: format!("area must be positive, got {}", self.area_sqkm),
            });
        }
        Ok(())
    }
}

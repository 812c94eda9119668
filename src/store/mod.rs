//! Read-only record store
//!
//! The store owns every case record, region profile and facility record for
//! the lifetime of the process. It is populated once by a loader and never
//! mutated afterwards, so analyses borrow from it freely.

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use log::{info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

use crate::error::{AnalysisError, Result};
use crate::models::{CaseRecord, FacilityRecord, RegionId, RegionProfile};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Serialized form of a record store, as read by `RecordStore::load_json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    /// Case records
    #[serde(default)]
    pub cases: Vec<CaseRecord>,
    /// One profile per region
    #[serde(default)]
    pub profiles: Vec<RegionProfile>,
    /// Facility registry
    #[serde(default)]
    pub facilities: Vec<FacilityRecord>,
}

/// Immutable in-memory table of cases, region profiles and facilities
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    cases: Vec<CaseRecord>,
    /// Sorted by region, one entry per region
    profiles: Vec<RegionProfile>,
    facilities: Vec<FacilityRecord>,
}

impl RecordStore {
    /// Create a store, validating the region profiles
    ///
    /// Records that refer to a region without a profile are kept but logged,
    /// since rates for such regions cannot be computed.
    ///
    /// # Errors
    /// Returns `InvalidRegionProfile` for a profile with a non-positive area
    /// and `DuplicateRegionProfile` when a region has more than one profile.
    pub fn new(
        cases: Vec<CaseRecord>,
        mut profiles: Vec<RegionProfile>,
        facilities: Vec<FacilityRecord>,
    ) -> Result<Self> {
        for profile in &profiles {
            profile.validate()?;
        }

        profiles.sort_by(|a, b| a.region.cmp(&b.region));
        if let Some((dup, _)) = profiles
            .iter()
            .tuple_windows()
            .find(|(a, b)| a.region == b.region)
        {
            return Err(AnalysisError::DuplicateRegionProfile {
                region: dup.region.to_string(),
            });
        }

        let store = Self {
            cases,
            profiles,
            facilities,
        };
        store.warn_unprofiled_regions();
        Ok(store)
    }

    /// Build a store from its serialized form
    ///
    /// # Errors
    /// Returns an error if the profiles are invalid.
    pub fn from_data(data: StoreData) -> Result<Self> {
        Self::new(data.cases, data.profiles, data.facilities)
    }

    /// Parse a store from a JSON document
    ///
    /// # Errors
    /// Returns `Json` if the document is malformed, or a profile error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: StoreData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Load a store from a JSON file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Json` if it is malformed,
    /// or a profile error.
    pub fn load_json(path: &Path) -> Result<Self> {
        log_operation_start("Loading record store from", path);
        let start = Instant::now();

        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;

        log_operation_complete(
            "loaded",
            path,
            store.cases.len() + store.profiles.len() + store.facilities.len(),
            Some(start.elapsed()),
        );
        Ok(store)
    }

    /// All case records
    #[must_use]
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// All region profiles, in canonical region order
    #[must_use]
    pub fn profiles(&self) -> &[RegionProfile] {
        &self.profiles
    }

    /// All facility records
    #[must_use]
    pub fn facilities(&self) -> &[FacilityRecord] {
        &self.facilities
    }

    /// Number of case records
    #[must_use]
    pub fn total_cases(&self) -> usize {
        self.cases.len()
    }

    /// Profile for a region
    #[must_use]
    pub fn profile(&self, region: &RegionId) -> Option<&RegionProfile> {
        self.profiles
            .binary_search_by(|p| p.region.cmp(region))
            .ok()
            .map(|idx| &self.profiles[idx])
    }

    /// Regions that have a profile, in canonical order
    #[must_use]
    pub fn regions(&self) -> Vec<&RegionId> {
        self.profiles.iter().map(|p| &p.region).collect()
    }

    /// Earliest and latest diagnosis dates, or `None` for an empty store
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self.cases.iter().map(|c| c.diagnosis_date).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(d) => Some((d, d)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }

    fn warn_unprofiled_regions(&self) {
        let missing: FxHashSet<&RegionId> = self
            .cases
            .iter()
            .map(|c| &c.region)
            .chain(self.facilities.iter().map(|f| &f.region))
            .filter(|region| self.profile(region).is_none())
            .collect();

        for region in missing.into_iter().sorted() {
            log_warning(&format!("No profile for region '{region}'"), None);
        }

        if self.profiles.is_empty() && !self.cases.is_empty() {
            warn!("Record store has cases but no region profiles");
        }
        info!(
            "Record store ready: {} cases, {} regions, {} facilities",
            self.cases.len(),
            self.profiles.len(),
            self.facilities.len()
        );
    }
}

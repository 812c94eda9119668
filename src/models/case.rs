//! Case record entity model
//!
//! A `CaseRecord` is one diagnosed case, located at a point and attributed to
//! a region and district. Records are immutable once loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::types::{AgeGroup, DiagnosisStatus, Gender, RegionId};

/// Representation of a single diagnosed case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Region the case was recorded in
    pub region: RegionId,
    /// District within the region
    pub district: String,
    /// Gender of the individual
    pub gender: Gender,
    /// Age band at diagnosis
    pub age_group: AgeGroup,
    /// Date of diagnosis
    pub diagnosis_date: NaiveDate,
    /// New or previously diagnosed
    pub diagnosis_status: DiagnosisStatus,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Whether the individual is receiving treatment
    pub on_treatment: bool,
}

impl CaseRecord {
    /// Create a new case record at the origin with default demographics
    ///
    /// Intended as a starting point for the builder-style setters below.
    #[must_use]
    pub fn new(region: impl Into<RegionId>, diagnosis_date: NaiveDate) -> Self {
        Self {
            region: region.into(),
            district: String::new(),
            gender: Gender::Female,
            age_group: AgeGroup::Age25To34,
            diagnosis_date,
            diagnosis_status: DiagnosisStatus::New,
            latitude: 0.0,
            longitude: 0.0,
            on_treatment: false,
        }
    }

    /// Set the district
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the age group
    #[must_use]
    pub const fn with_age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = age_group;
        self
    }

    /// Set the diagnosis status
    #[must_use]
    pub const fn with_status(mut self, status: DiagnosisStatus) -> Self {
        self.diagnosis_status = status;
        self
    }

    /// Set the location
    #[must_use]
    pub const fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set the treatment flag
    #[must_use]
    pub const fn with_treatment(mut self, on_treatment: bool) -> Self {
        self.on_treatment = on_treatment;
        self
    }
}

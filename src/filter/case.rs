//! Case-record filtering
//!
//! A `FilterSpec` is an immutable request value. Every active field must be
//! satisfied for a record to pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::filter::constraint::Constraint;
use crate::filter::criteria::{FilterCriteria, all_of};
use crate::filter::date::TimeWindow;
use crate::models::{AgeGroup, CaseRecord, DiagnosisStatus, Gender, RegionId};
use crate::utils::logging::log_stage;

/// Accepted values for each case-record field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Region constraint
    pub region: Constraint<RegionId>,
    /// District constraint
    pub district: Constraint<String>,
    /// Gender constraint
    pub gender: Constraint<Gender>,
    /// Age-group constraint
    pub age_group: Constraint<AgeGroup>,
    /// Diagnosis-status constraint
    pub diagnosis_status: Constraint<DiagnosisStatus>,
    /// Treatment-status constraint
    pub on_treatment: Constraint<bool>,
    /// Diagnosis-date window
    pub window: TimeWindow,
}

impl FilterSpec {
    /// A filter with no active constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<RegionId>) -> Self {
        self.region = Constraint::Equals(region.into());
        self
    }

    /// Restrict to one district
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Constraint::Equals(district.into());
        self
    }

    /// Restrict to one gender
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Constraint::Equals(gender);
        self
    }

    /// Restrict to a set of age groups
    #[must_use]
    pub fn with_age_groups(mut self, groups: impl IntoIterator<Item = AgeGroup>) -> Self {
        self.age_group = Constraint::OneOf(groups.into_iter().collect());
        self
    }

    /// Restrict to one diagnosis status
    #[must_use]
    pub fn with_status(mut self, status: DiagnosisStatus) -> Self {
        self.diagnosis_status = Constraint::Equals(status);
        self
    }

    /// Restrict by treatment status
    #[must_use]
    pub fn with_treatment(mut self, on_treatment: bool) -> Self {
        self.on_treatment = Constraint::Equals(on_treatment);
        self
    }

    /// Restrict the diagnosis date
    #[must_use]
    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Whether no field is constrained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.region.is_active()
            || self.district.is_active()
            || self.gender.is_active()
            || self.age_group.is_active()
            || self.diagnosis_status.is_active()
            || self.on_treatment.is_active()
            || self.window.is_active())
    }

    /// Fix relative windows against a reference date
    #[must_use]
    pub fn resolve(&self, reference: NaiveDate) -> ResolvedFilter<'_> {
        ResolvedFilter {
            spec: self,
            dates: self.window.resolve(reference),
        }
    }

    /// Human-readable list of active constraints
    #[must_use]
    pub fn describe(&self) -> String {
        let window = self
            .window
            .is_active()
            .then(|| format!("Time: {}", self.window));
        let parts: Vec<String> = [
            window,
            self.region.describe("Region"),
            self.district.describe("District"),
            self.age_group.describe("Age"),
            self.gender.describe("Gender"),
            self.diagnosis_status.describe("Status"),
            self.on_treatment.describe("On treatment"),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "No filters applied".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A `FilterSpec` with its time window fixed to absolute dates
#[derive(Debug, Clone)]
pub struct ResolvedFilter<'a> {
    spec: &'a FilterSpec,
    dates: Constraint<NaiveDate>,
}

impl ResolvedFilter<'_> {
    /// The absolute diagnosis-date constraint
    #[must_use]
    pub const fn dates(&self) -> &Constraint<NaiveDate> {
        &self.dates
    }
}

impl FilterCriteria<CaseRecord> for ResolvedFilter<'_> {
    fn meets_criteria(&self, case: &CaseRecord) -> bool {
        let spec = self.spec;
        all_of([
            spec.region.admits(&case.region),
            spec.district.admits(&case.district),
            spec.gender.admits(&case.gender),
            spec.age_group.admits(&case.age_group),
            spec.diagnosis_status.admits(&case.diagnosis_status),
            spec.on_treatment.admits(&case.on_treatment),
            self.dates.admits(&case.diagnosis_date),
        ])
    }
}

/// Select the records that satisfy every active constraint
///
/// Relative windows are measured back from `reference`; pass the same
/// reference to get the same result. Records are borrowed, never copied,
/// and the input order is preserved.
///
/// # Arguments
/// * `records` - Records to filter, owned or borrowed
/// * `spec` - The constraints to apply
/// * `reference` - "Now" for relative windows
///
/// # Returns
/// References to the passing records
pub fn apply<'a, R: Borrow<CaseRecord>>(
    records: &'a [R],
    spec: &FilterSpec,
    reference: NaiveDate,
) -> Vec<&'a CaseRecord> {
    if spec.is_empty() {
        return records.iter().map(as_case).collect();
    }

    let resolved = spec.resolve(reference);
    let passed: Vec<&CaseRecord> = records
        .iter()
        .map(as_case)
        .filter(|case| resolved.meets_criteria(case))
        .collect();

    log_stage("case filter", records.len(), passed.len());
    passed
}

fn as_case<R: Borrow<CaseRecord>>(record: &R) -> &CaseRecord {
    record.borrow()
}

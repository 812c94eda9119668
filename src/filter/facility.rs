//! Facility-registry filtering
//!
//! Location and type constraints must all hold, but the service selection
//! passes a facility that offers any one of the selected services.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;

use crate::filter::constraint::Constraint;
use crate::filter::criteria::{FilterCriteria, all_of, any_of};
use crate::models::{FacilityRecord, FacilityType, RegionId, ServiceTag};
use crate::utils::logging::log_stage;

/// Accepted values for each facility field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilitySpec {
    /// Region constraint
    pub region: Constraint<RegionId>,
    /// District constraint
    pub district: Constraint<String>,
    /// Facility-type constraint
    pub facility_type: Constraint<FacilityType>,
    /// Selected services; empty means unconstrained
    pub services: BTreeSet<ServiceTag>,
    /// Case-insensitive substring the name must contain
    pub name_contains: Option<String>,
}

impl FacilitySpec {
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

    /// Restrict to one facility type
    #[must_use]
    pub fn with_type(mut self, facility_type: FacilityType) -> Self {
        self.facility_type = Constraint::Equals(facility_type);
        self
    }

    /// Select services; a facility needs only one of them to pass
    #[must_use]
    pub fn with_services(mut self, services: impl IntoIterator<Item = ServiceTag>) -> Self {
        self.services = services.into_iter().collect();
        self
    }

    /// Search by name
    #[must_use]
    pub fn with_name(mut self, query: impl Into<String>) -> Self {
        self.name_contains = Some(query.into());
        self
    }

    /// Whether no field is constrained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.region.is_active()
            || self.district.is_active()
            || self.facility_type.is_active()
            || !self.services.is_empty()
            || self.name_query().is_some())
    }

    /// Human-readable list of active constraints
    #[must_use]
    pub fn describe(&self) -> String {
        let services = (!self.services.is_empty()).then(|| {
            let labels: Vec<&str> = self.services.iter().map(|s| s.label()).collect();
            format!("Services: {}", labels.join(", "))
        });
        let name = self.name_query().map(|q| format!("Name: {q}"));
        let parts: Vec<String> = [
            self.region.describe("Region"),
            self.district.describe("District"),
            self.facility_type.describe("Type"),
            services,
            name,
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "All Facilities".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Normalise the name query for matching
    #[must_use]
    pub fn resolve(&self) -> ResolvedFacilityFilter<'_> {
        ResolvedFacilityFilter {
            spec: self,
            name_query: self.name_query(),
        }
    }

    fn name_query(&self) -> Option<String> {
        self.name_contains
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn offers_selected(&self, facility: &FacilityRecord) -> bool {
        self.services.is_empty() || any_of(self.services.iter().map(|tag| facility.offers(*tag)))
    }
}

/// A facility filter with its name query normalised once
#[derive(Debug, Clone)]
pub struct ResolvedFacilityFilter<'a> {
    spec: &'a FacilitySpec,
    name_query: Option<String>,
}

impl FilterCriteria<FacilityRecord> for ResolvedFacilityFilter<'_> {
    fn meets_criteria(&self, facility: &FacilityRecord) -> bool {
        let spec = self.spec;
        let name_matches = self
            .name_query
            .as_deref()
            .is_none_or(|q| facility.name.to_lowercase().contains(q));
        all_of([
            spec.region.admits(&facility.region),
            spec.district.admits(&facility.district),
            spec.facility_type.admits(&facility.facility_type),
            spec.offers_selected(facility),
            name_matches,
        ])
    }
}

/// Select the facilities that satisfy the filter
///
/// # Arguments
/// * `facilities` - Facilities to filter, owned or borrowed
/// * `spec` - The constraints to apply
///
/// # Returns
/// References to the passing facilities, in input order
pub fn apply_facilities<'a, R: Borrow<FacilityRecord>>(
    facilities: &'a [R],
    spec: &FacilitySpec,
) -> Vec<&'a FacilityRecord> {
    if spec.is_empty() {
        return facilities.iter().map(as_facility).collect();
    }

    let resolved = spec.resolve();
    let passed: Vec<&FacilityRecord> = facilities
        .iter()
        .map(as_facility)
        .filter(|facility| resolved.meets_criteria(facility))
        .collect();

    log_stage("facility filter", facilities.len(), passed.len());
    passed
}

fn as_facility<R: Borrow<FacilityRecord>>(record: &R) -> &FacilityRecord {
    record.borrow()
}

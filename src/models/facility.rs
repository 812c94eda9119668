//! Health facility entity model

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::models::types::{FacilityType, RegionId, ServiceTag};

/// Service tags offered by one facility, sorted and without duplicates
pub type ServiceSet = SmallVec<[ServiceTag; 8]>;

/// Representation of a health facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Facility name
    pub name: String,
    /// Region the facility is located in
    pub region: RegionId,
    /// District within the region
    pub district: String,
    /// Kind of facility
    pub facility_type: FacilityType,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Services offered
    #[serde(deserialize_with = "deserialize_services")]
    pub services: ServiceSet,
    /// Contact phone number
    pub contact: String,
    /// Opening hours, free text
    pub hours: String,
}

impl FacilityRecord {
    /// Create a new facility with no services or contact details
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: impl Into<RegionId>,
        facility_type: FacilityType,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            district: String::new(),
            facility_type,
            latitude: 0.0,
            longitude: 0.0,
            services: ServiceSet::new(),
            contact: String::new(),
            hours: String::new(),
        }
    }

    /// Set the offered services
    #[must_use]
    pub fn with_services(mut self, services: impl IntoIterator<Item = ServiceTag>) -> Self {
        self.services = service_set(services);
        self
    }

    /// Set the district
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    /// Whether the facility offers a service
    #[must_use]
    pub fn offers(&self, tag: ServiceTag) -> bool {
        self.services.contains(&tag)
    }
}

fn service_set(services: impl IntoIterator<Item = ServiceTag>) -> ServiceSet {
    let mut set: ServiceSet = services.into_iter().collect();
    set.sort_unstable();
    set.dedup();
    set
}

fn deserialize_services<'de, D>(deserializer: D) -> Result<ServiceSet, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<ServiceTag>::deserialize(deserializer).map(service_set)
}

//! Domain models
//!
//! Case records, region profiles and facility records, plus the categorical
//! types they share.

pub mod case;
pub mod facility;
pub mod region;
pub mod types;

pub use case::CaseRecord;
pub use facility::{FacilityRecord, ServiceSet};
pub use region::RegionProfile;
pub use types::{
    AgeGroup, CANONICAL_REGIONS, DiagnosisStatus, FacilityType, Gender, RegionId, ServiceTag,
};

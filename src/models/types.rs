//! Common domain type definitions
//!
//! This module contains the categorical types shared by case records,
//! facility records and filters. Every enum is declared in its canonical
//! display order, so the derived `Ord` is the order charts and tables use.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// The fixed list of administrative regions, in canonical order
pub const CANONICAL_REGIONS: [&str; 14] = [
    "Erongo",
    "Hardap",
    "Karas",
    "Kavango East",
    "Kavango West",
    "Khomas",
    "Kunene",
    "Ohangwena",
    "Omaheke",
    "Omusati",
    "Oshana",
    "Oshikoto",
    "Otjozondjupa",
    "Zambezi",
];

/// Opaque region identifier
///
/// Regions from the canonical list order by their position in it; any other
/// region sorts after them, by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Create a region identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The region's name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position in `CANONICAL_REGIONS`, if the region is one of them
    #[must_use]
    pub fn canonical_index(&self) -> Option<usize> {
        CANONICAL_REGIONS.iter().position(|name| *name == self.0)
    }

    /// All canonical regions, in order
    #[must_use]
    pub fn canonical() -> Vec<Self> {
        CANONICAL_REGIONS.iter().map(|name| Self::new(*name)).collect()
    }
}

impl Ord for RegionId {
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = |r: &Self| r.canonical_index().unwrap_or(usize::MAX);
        rank(self)
            .cmp(&rank(other))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for RegionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for RegionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for RegionId {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(AnalysisError::unknown_category("region", s));
        }
        Ok(Self::new(name))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gender of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
}

impl Gender {
    /// All genders, in canonical order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(AnalysisError::unknown_category("gender", s)),
        }
    }
}

/// Age band of a case at diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 0 to 14 years
    #[serde(rename = "0-14")]
    Age0To14,
    /// 15 to 24 years
    #[serde(rename = "15-24")]
    Age15To24,
    /// 25 to 34 years
    #[serde(rename = "25-34")]
    Age25To34,
    /// 35 to 44 years
    #[serde(rename = "35-44")]
    Age35To44,
    /// 45 to 54 years
    #[serde(rename = "45-54")]
    Age45To54,
    /// 55 years and over
    #[serde(rename = "55+")]
    Age55Plus,
}

impl AgeGroup {
    /// All age groups, youngest first
    pub const ALL: [Self; 6] = [
        Self::Age0To14,
        Self::Age15To24,
        Self::Age25To34,
        Self::Age35To44,
        Self::Age45To54,
        Self::Age55Plus,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age0To14 => "0-14",
            Self::Age15To24 => "15-24",
            Self::Age25To34 => "25-34",
            Self::Age35To44 => "35-44",
            Self::Age45To54 => "45-54",
            Self::Age55Plus => "55+",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.label() == s.trim())
            .ok_or_else(|| AnalysisError::unknown_category("age_group", s))
    }
}

/// Whether a case is a new diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosisStatus {
    /// First diagnosis
    New,
    /// Diagnosed before this record
    #[serde(rename = "Previously diagnosed")]
    PreviouslyDiagnosed,
}

impl DiagnosisStatus {
    /// All statuses, in canonical order
    pub const ALL: [Self; 2] = [Self::New, Self::PreviouslyDiagnosed];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::PreviouslyDiagnosed => "Previously diagnosed",
        }
    }
}

impl FromStr for DiagnosisStatus {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "previously diagnosed" | "previouslydiagnosed" | "previous" => {
                Ok(Self::PreviouslyDiagnosed)
            }
            _ => Err(AnalysisError::unknown_category("diagnosis_status", s)),
        }
    }
}

/// Kind of health facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacilityType {
    /// Hospital
    Hospital,
    /// Clinic
    Clinic,
    /// Dedicated testing site
    #[serde(rename = "Testing Center")]
    TestingCenter,
    /// Mobile or community outreach programme
    #[serde(rename = "Community Outreach")]
    CommunityOutreach,
}

impl FacilityType {
    /// All facility types, in canonical order
    pub const ALL: [Self; 4] = [
        Self::Hospital,
        Self::Clinic,
        Self::TestingCenter,
        Self::CommunityOutreach,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::Clinic => "Clinic",
            Self::TestingCenter => "Testing Center",
            Self::CommunityOutreach => "Community Outreach",
        }
    }
}

impl FromStr for FacilityType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalysisError::unknown_category("facility_type", s))
    }
}

/// A service a facility offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceTag {
    /// HIV testing
    #[serde(rename = "HIV Testing")]
    HivTesting,
    /// Antiretroviral treatment
    #[serde(rename = "HIV Treatment")]
    HivTreatment,
    /// Counseling
    Counseling,
    /// Pre-exposure prophylaxis
    #[serde(rename = "PrEP")]
    Prep,
    /// Prevention of mother-to-child transmission
    #[serde(rename = "PMTCT")]
    Pmtct,
    /// Youth-friendly services
    #[serde(rename = "Youth Services")]
    YouthServices,
    /// Support groups
    #[serde(rename = "Support Groups")]
    SupportGroups,
}

impl ServiceTag {
    /// All service tags, in canonical order
    pub const ALL: [Self; 7] = [
        Self::HivTesting,
        Self::HivTreatment,
        Self::Counseling,
        Self::Prep,
        Self::Pmtct,
        Self::YouthServices,
        Self::SupportGroups,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HivTesting => "HIV Testing",
            Self::HivTreatment => "HIV Treatment",
            Self::Counseling => "Counseling",
            Self::Prep => "PrEP",
            Self::Pmtct => "PMTCT",
            Self::YouthServices => "Youth Services",
            Self::SupportGroups => "Support Groups",
        }
    }
}

impl FromStr for ServiceTag {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalysisError::unknown_category("service", s))
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_via_label!(Gender, AgeGroup, DiagnosisStatus, FacilityType, ServiceTag);

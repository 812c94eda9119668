//! Categorical dimensions of a case record

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::models::{AgeGroup, CaseRecord, DiagnosisStatus, Gender, RegionId};

/// A categorical field records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Administrative region
    Region,
    /// District within a region
    District,
    /// Gender
    Gender,
    /// Age band
    AgeGroup,
    /// New or previously diagnosed
    DiagnosisStatus,
    /// On treatment or not
    Treatment,
}

impl Dimension {
    /// The category a record falls into along this dimension
    #[must_use]
    pub fn category_of(self, case: &CaseRecord) -> Category {
        match self {
            Self::Region => Category::Region(case.region.clone()),
            Self::District => Category::District(case.district.clone()),
            Self::Gender => Category::Gender(case.gender),
            Self::AgeGroup => Category::AgeGroup(case.age_group),
            Self::DiagnosisStatus => Category::DiagnosisStatus(case.diagnosis_status),
            Self::Treatment => Category::Treatment(case.on_treatment),
        }
    }

    /// Every known category, in canonical order
    ///
    /// Districts are only known from the data, so `District` has no universe.
    #[must_use]
    pub fn universe(self) -> Option<Vec<Category>> {
        match self {
            Self::Region => Some(RegionId::canonical().into_iter().map(Category::Region).collect()),
            Self::District => None,
            Self::Gender => Some(Gender::ALL.into_iter().map(Category::Gender).collect()),
            Self::AgeGroup => Some(AgeGroup::ALL.into_iter().map(Category::AgeGroup).collect()),
            Self::DiagnosisStatus => Some(
                DiagnosisStatus::ALL
                    .into_iter()
                    .map(Category::DiagnosisStatus)
                    .collect(),
            ),
            Self::Treatment => Some(vec![Category::Treatment(false), Category::Treatment(true)]),
        }
    }

    /// Field name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::District => "district",
            Self::Gender => "gender",
            Self::AgeGroup => "age_group",
            Self::DiagnosisStatus => "diagnosis_status",
            Self::Treatment => "on_treatment",
        }
    }
}

impl FromStr for Dimension {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "region" => Ok(Self::Region),
            "district" => Ok(Self::District),
            "gender" => Ok(Self::Gender),
            "age_group" | "age" => Ok(Self::AgeGroup),
            "diagnosis_status" | "status" => Ok(Self::DiagnosisStatus),
            "on_treatment" | "treatment" | "treatment_status" => Ok(Self::Treatment),
            _ => Err(AnalysisError::unknown_category("dimension", s)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value of a dimension
///
/// Within a dimension, categories order canonically: regions by the
/// canonical region list, enums by declaration, districts by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A region
    Region(RegionId),
    /// A district
    District(String),
    /// A gender
    Gender(Gender),
    /// An age band
    AgeGroup(AgeGroup),
    /// A diagnosis status
    DiagnosisStatus(DiagnosisStatus),
    /// Treatment status
    Treatment(bool),
}

impl Category {
    /// The dimension this category belongs to
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Region(_) => Dimension::Region,
            Self::District(_) => Dimension::District,
            Self::Gender(_) => Dimension::Gender,
            Self::AgeGroup(_) => Dimension::AgeGroup,
            Self::DiagnosisStatus(_) => Dimension::DiagnosisStatus,
            Self::Treatment(_) => Dimension::Treatment,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(region) => write!(f, "{region}"),
            Self::District(district) => f.write_str(district),
            Self::Gender(gender) => write!(f, "{gender}"),
            Self::AgeGroup(group) => write!(f, "{group}"),
            Self::DiagnosisStatus(status) => write!(f, "{status}"),
            Self::Treatment(true) => f.write_str("On Treatment"),
            Self::Treatment(false) => f.write_str("Not on Treatment"),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

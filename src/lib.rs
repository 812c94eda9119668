//! An analytical core for regional epidemiological case data: filtering,
//! grouped counts, per-capita rates, correlation, risk classification,
//! calendar resampling and before/after policy comparison.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod request;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AnalysisConfig, RelativeAnchor};
pub use error::{AnalysisError, Result};
pub use models::{
    AgeGroup, CaseRecord, DiagnosisStatus, FacilityRecord, FacilityType, Gender, RegionId,
    RegionProfile, ServiceTag,
};
pub use store::{RecordStore, StoreData};

// Filtering capabilities
pub use filter::{Constraint, FacilitySpec, FilterSpec, TimeWindow, apply, apply_facilities};

// Analysis
pub use algorithm::{
    AggregationResult, Category, CorrelationResult, Dimension, Frequency, GroupKey, PolicyImpact,
    Resampled, RiskEntry, TimeSeries,
};
pub use request::{AnalysisKind, AnalysisOutput, AnalysisReport, AnalysisRequest, Analyzer};

//! Analysis algorithms
//!
//! Every function here is a pure computation over borrowed records and
//! profiles; none of them mutate their inputs.

pub mod aggregate;
pub mod correlation;
pub mod policy;
pub mod risk;
pub mod temporal;

pub use aggregate::{AggregationResult, Category, Dimension, GroupKey};
pub use correlation::{CorrelationResult, correlate, correlate_regions, density_prevalence};
pub use policy::{PolicyImpact, assess, assess_str};
pub use risk::{RiskEntry, classify_risk, high_risk};
pub use temporal::{Frequency, Resampled, TimeSeries, resample};

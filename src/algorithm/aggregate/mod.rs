//! Aggregation Engine
//!
//! Groups filtered records by categorical dimensions and normalises
//! regional counts by population.

pub mod count;
pub mod dimension;
pub mod rate;

pub use count::{
    AggregationResult, GroupKey, counts_by_region, group_count, group_count_pair, highest_region,
};
pub use dimension::{Category, Dimension};
pub use rate::{densities, ranked_rates, rate_per_capita};

//! Temporal Resampler
//!
//! Buckets records into calendar months, quarters or years and produces
//! zero-filled, ascending series.

pub mod bucket;
pub mod resample;
pub mod series;

pub use bucket::{Frequency, bucket_range};
pub use resample::{Resampled, resample, resample_by, resample_series};
pub use series::{SeriesSummary, TimePoint, TimeSeries, population_stats};

//! Error handling for the analytical core.
//!
//! Every failure the core can report is a data-validity problem rather than a
//! transient one, so there is no retry information here: callers either fix
//! the input or surface the message.

use std::io;

/// Specialized error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A date string at the filter boundary could not be parsed
    #[error("Invalid date format for '{field}': '{raw}'")]
    InvalidDateFormat {
        /// Name of the field the string was supplied for
        field: String,
        /// The offending raw string
        raw: String,
    },

    /// Not enough paired observations to compute a statistic
    #[error("Insufficient data: {required} observations required, {actual} available")]
    InsufficientData {
        /// Minimum number of observations
        required: usize,
        /// Number of observations actually available
        actual: usize,
    },

    /// A numeric argument fell outside its accepted range
    #[error("Value out of range for '{name}': {value} (expected {expected})")]
    ValueOutOfRange {
        /// Name of the argument
        name: String,
        /// Supplied value
        value: f64,
        /// Human-readable description of the accepted range
        expected: String,
    },

    /// A region profile violates the population/area invariant
    #[error("Invalid profile for region '{region}': {reason}")]
    InvalidRegionProfile {
        /// Region the profile belongs to
        region: String,
        /// What is wrong with it
        reason: String,
    },

    /// Two profiles were supplied for the same region
    #[error("Duplicate profile for region '{region}'")]
    DuplicateRegionProfile {
        /// The repeated region
        region: String,
    },

    /// A selection string names no known category
    #[error("Unknown value for '{field}': '{raw}'")]
    UnknownCategory {
        /// Field the selection was made for
        field: String,
        /// The unrecognised string
        raw: String,
    },

    /// A correlation input series is constant, so Pearson's r is undefined
    #[error("Series '{series}' has zero variance")]
    ZeroVariance {
        /// Which input series is constant (`x` or `y`)
        series: String,
    },

    /// Error reading record data
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding record data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create an `InvalidDateFormat` error
    #[must_use]
    pub fn invalid_date(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// Create a `ValueOutOfRange` error
    #[must_use]
    pub fn out_of_range(name: impl Into<String>, value: f64, expected: impl Into<String>) -> Self {
        Self::ValueOutOfRange {
            name: name.into(),
            value,
            expected: expected.into(),
        }
    }

    /// Create an `UnknownCategory` error
    #[must_use]
    pub fn unknown_category(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::UnknownCategory {
            field: field.into(),
            raw: raw.into(),
        }
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

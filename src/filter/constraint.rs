//! Per-field constraints
//!
//! A `Constraint` replaces the "All" sentinel of a selection box with an
//! explicit variant: a field is either unconstrained or restricted to one
//! value, a set of values or an inclusive range.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{AnalysisError, Result};

/// Accepted values for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint<T> {
    /// Any value passes
    Unconstrained,
    /// Only this value passes
    Equals(T),
    /// Any value in the set passes
    OneOf(Vec<T>),
    /// Any value between the bounds passes, both ends inclusive
    DateRange(T, T),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Self::Unconstrained
    }
}

impl<T: PartialOrd> Constraint<T> {
    /// Whether a value satisfies the constraint
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Equals(expected) => value == expected,
            Self::OneOf(accepted) => accepted.contains(value),
            Self::DateRange(lo, hi) => lo <= value && value <= hi,
        }
    }
}

impl<T> Constraint<T> {
    /// Whether the constraint restricts anything
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Unconstrained)
    }
}

impl<T: FromStr> Constraint<T> {
    /// Build a constraint from a selection string
    ///
    /// `"All"` (any case) and the empty string leave the field unconstrained;
    /// anything else must parse as a value of the field.
    ///
    /// # Errors
    /// Returns `UnknownCategory` if the string is not a valid value.
    pub fn from_selection(field: &str, raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::Unconstrained);
        }
        trimmed
            .parse()
            .map(Self::Equals)
            .map_err(|_| AnalysisError::unknown_category(field, raw))
    }
}

impl<T: Display> Constraint<T> {
    /// Human-readable form of an active constraint, e.g. `Gender: Male`
    #[must_use]
    pub fn describe(&self, name: &str) -> Option<String> {
        match self {
            Self::Unconstrained => None,
            Self::Equals(value) => Some(format!("{name}: {value}")),
            Self::OneOf(values) => {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!("{name}: {joined}"))
            }
            Self::DateRange(lo, hi) => Some(format!("{name}: {lo} to {hi}")),
        }
    }
}

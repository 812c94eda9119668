//! Date parsing and time windows
//!
//! All date strings are parsed here, at the filter boundary. Relative
//! windows are resolved against a reference date that the caller supplies,
//! so a single evaluation is deterministic; the reference itself may be
//! the wall clock, in which case results drift from one day to the next.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::config::RelativeAnchor;
use crate::error::{AnalysisError, Result};
use crate::filter::constraint::Constraint;
use crate::models::CaseRecord;

/// Days in one year of a relative window
pub const DAYS_PER_YEAR: u64 = 365;

/// Parse a date string for a named field
///
/// # Errors
/// Returns `InvalidDateFormat` carrying the field name and the raw string.
pub fn parse_date(field: &str, raw: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), format)
        .map_err(|_| AnalysisError::invalid_date(field, raw))
}

/// Diagnosis-date window of a case filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    /// No date restriction
    #[default]
    AllTime,
    /// From `n * 365` days before the reference date onwards
    LastYears(u32),
    /// Fixed inclusive range
    Custom {
        /// First admitted date
        start: NaiveDate,
        /// Last admitted date
        end: NaiveDate,
    },
}

impl TimeWindow {
    /// The "Last Year" preset
    #[must_use]
    pub const fn last_year() -> Self {
        Self::LastYears(1)
    }

    /// Parse a preset label ("All Time", "Last Year", "Last 3 Years", ...)
    ///
    /// # Errors
    /// Returns `UnknownCategory` for an unrecognised label.
    pub fn from_selection(raw: &str) -> Result<Self> {
        let label = raw.trim().to_lowercase();
        match label.as_str() {
            "" | "all" | "all time" => Ok(Self::AllTime),
            "last year" => Ok(Self::last_year()),
            _ => label
                .strip_prefix("last ")
                .and_then(|rest| rest.strip_suffix(" years"))
                .and_then(|n| n.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .map(Self::LastYears)
                .ok_or_else(|| AnalysisError::unknown_category("time_frame", raw)),
        }
    }

    /// Build a custom window from two date strings
    ///
    /// # Errors
    /// Returns `InvalidDateFormat` naming `start_date` or `end_date`.
    pub fn custom_from_strs(start: &str, end: &str, format: &str) -> Result<Self> {
        Ok(Self::Custom {
            start: parse_date("start_date", start, format)?,
            end: parse_date("end_date", end, format)?,
        })
    }

    /// Resolve to an absolute inclusive date constraint
    ///
    /// Relative windows have no upper bound. A custom window whose start is
    /// after its end admits nothing.
    #[must_use]
    pub fn resolve(self, reference: NaiveDate) -> Constraint<NaiveDate> {
        match self {
            Self::AllTime => Constraint::Unconstrained,
            Self::LastYears(years) => {
                let lo = reference
                    .checked_sub_days(Days::new(u64::from(years) * DAYS_PER_YEAR))
                    .unwrap_or(NaiveDate::MIN);
                Constraint::DateRange(lo, NaiveDate::MAX)
            }
            Self::Custom { start, end } => Constraint::DateRange(start, end),
        }
    }

    /// Whether the window restricts anything
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::AllTime)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTime => write!(f, "All Time"),
            Self::LastYears(1) => write!(f, "Last Year"),
            Self::LastYears(n) => write!(f, "Last {n} Years"),
            Self::Custom { start, end } => write!(f, "{start} to {end}"),
        }
    }
}

/// The date relative windows are measured back from
///
/// With `DatasetMax` an empty record set falls back to the wall clock.
pub fn reference_date<R: Borrow<CaseRecord>>(anchor: RelativeAnchor, records: &[R]) -> NaiveDate {
    let today = || Local::now().date_naive();
    match anchor {
        RelativeAnchor::WallClock => today(),
        RelativeAnchor::DatasetMax => records
            .iter()
            .map(|r| <R as Borrow<CaseRecord>>::borrow(r).diagnosis_date)
            .max()
            .unwrap_or_else(today),
    }
}

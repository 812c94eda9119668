//! Calendar-aligned time buckets

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// Bucket width for resampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Calendar months
    Month,
    /// Calendar quarters starting January, April, July and October
    Quarter,
    /// Calendar years
    Year,
}

impl Frequency {
    /// First day of the bucket containing `date`
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        let month_start = date - Days::new(u64::from(date.day0()));
        match self {
            Self::Month => month_start,
            Self::Quarter => month_start - Months::new(date.month0() % 3),
            Self::Year => date - Days::new(u64::from(date.ordinal0())),
        }
    }

    /// First day of the bucket after the one starting at `start`, or `None`
    /// past the last representable date
    #[must_use]
    pub fn next_bucket(self, start: NaiveDate) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(self.months()))
    }

    /// Display label of the bucket containing `date`: `2020-01`, `2020-Q1`
    /// or `2020`
    #[must_use]
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            Self::Month => date.format("%Y-%m").to_string(),
            Self::Quarter => format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
            Self::Year => date.year().to_string(),
        }
    }

    const fn months(self) -> u32 {
        match self {
            Self::Month => 1,
            Self::Quarter => 3,
            Self::Year => 12,
        }
    }
}

impl FromStr for Frequency {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "month" | "monthly" => Ok(Self::Month),
            "q" | "quarter" | "quarterly" => Ok(Self::Quarter),
            "y" | "year" | "yearly" => Ok(Self::Year),
            _ => Err(AnalysisError::unknown_category("frequency", s)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => f.write_str("Monthly"),
            Self::Quarter => f.write_str("Quarterly"),
            Self::Year => f.write_str("Yearly"),
        }
    }
}

/// Start dates of every bucket from the one containing `first` to the one
/// containing `last`, inclusive
///
/// Empty when `first` is after `last`.
#[must_use]
pub fn bucket_range(first: NaiveDate, last: NaiveDate, frequency: Frequency) -> Vec<NaiveDate> {
    let end = frequency.bucket_start(last);
    std::iter::successors(Some(frequency.bucket_start(first)), |start| {
        frequency.next_bucket(*start)
    })
    .take_while(|start| *start <= end)
    .collect()
}

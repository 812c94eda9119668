//! Filter Engine
//!
//! Narrows case records and facility records to the subset a request asks
//! for. Date strings are parsed here and nowhere deeper in the pipeline.

pub mod case;
pub mod constraint;
pub mod criteria;
pub mod date;
pub mod facility;

pub use case::{FilterSpec, ResolvedFilter, apply};
pub use constraint::Constraint;
pub use criteria::{FilterCriteria, all_of, any_of};
pub use date::{DAYS_PER_YEAR, TimeWindow, parse_date, reference_date};
pub use facility::{FacilitySpec, ResolvedFacilityFilter, apply_facilities};

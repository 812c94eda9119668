//! Composition rules for filter criteria
//!
//! Case filtering and facility-service filtering combine their checks in
//! opposite ways, so the two rules are kept as separately named functions
//! rather than folded into one generic combinator.

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// Conjunction: holds iff every check holds. An empty set of checks holds.
pub fn all_of(checks: impl IntoIterator<Item = bool>) -> bool {
    checks.into_iter().all(|passed| passed)
}

/// Disjunction: holds iff at least one check holds. An empty set of checks
/// does not hold, so callers treat "nothing selected" separately.
pub fn any_of(checks: impl IntoIterator<Item = bool>) -> bool {
    checks.into_iter().any(|passed| passed)
}

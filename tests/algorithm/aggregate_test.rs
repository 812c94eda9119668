//! Tests for grouped counts and per-capita rates

use crate::utils::{assert_close, case, sample_cases, sample_profiles};
use epi_core::algorithm::aggregate::{
    Category, Dimension, GroupKey, counts_by_region, densities, group_count, group_count_pair,
    highest_region, ranked_rates, rate_per_capita,
};
use epi_core::{AgeGroup, AnalysisError, CaseRecord, Gender, RegionId, RegionProfile};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn region(name: &str) -> GroupKey {
    GroupKey::Single(Category::Region(RegionId::from(name)))
}

#[test]
fn test_group_count_by_region() {
    let result = group_count(&sample_cases(), Dimension::Region);
    assert_eq!(result.len(), 3);
    assert_eq!(result.total(), 6);
    assert_eq!(result.get(&region("Khomas")), 3);
    assert_eq!(result.get(&region("Erongo")), 2);
    assert_eq!(result.get(&region("Oshana")), 0);
    assert_eq!(result.highest(), Some((&region("Khomas"), 3)));
}

#[test]
fn test_group_count_empty() {
    let result = group_count::<CaseRecord>(&[], Dimension::Gender);
    assert!(result.is_empty());
    assert_eq!(result.total(), 0);
    assert!(result.highest().is_none());
}

#[test]
fn test_ties_order_canonically() {
    let cases = vec![case("Zambezi", 2024, 1, 1), case("Erongo", 2024, 1, 1)];
    let result = group_count(&cases, Dimension::Region);
    let keys: Vec<&GroupKey> = result.entries().iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![&region("Erongo"), &region("Zambezi")]);
}

#[test]
fn test_group_count_pair() {
    let result = group_count_pair(&sample_cases(), Dimension::Gender, Dimension::AgeGroup);
    assert_eq!(result.total(), 6);
    let key = GroupKey::from((
        Category::Gender(Gender::Male),
        Category::AgeGroup(AgeGroup::Age25To34),
    ));
    assert_eq!(result.get(&key), 1);
    assert_eq!(key.to_string(), "(Male, 25-34)");
}

#[test]
fn test_zero_filled_and_shares() {
    let result = group_count(&sample_cases(), Dimension::Gender).zero_filled_for(Dimension::Gender);
    assert_eq!(
        result.entries(),
        &[
            (GroupKey::Single(Category::Gender(Gender::Male)), 2),
            (GroupKey::Single(Category::Gender(Gender::Female)), 4),
        ]
    );

    let ages =
        group_count(&sample_cases(), Dimension::AgeGroup).zero_filled_for(Dimension::AgeGroup);
    assert_eq!(ages.len(), AgeGroup::ALL.len());
    assert_eq!(
        ages.get(&GroupKey::Single(Category::AgeGroup(AgeGroup::Age45To54))),
        0
    );

    let shares = result.shares();
    assert_close(shares.iter().map(|(_, s)| s).sum(), 100.0);
    assert_close(shares[0].1, 100.0 / 3.0);
}

#[test]
fn test_highest_region_tie_break() {
    let cases = vec![
        case("Zambezi", 2024, 1, 1),
        case("Zambezi", 2024, 1, 2),
        case("Hardap", 2024, 1, 1),
        case("Hardap", 2024, 1, 2),
    ];
    assert_eq!(
        highest_region(&cases),
        Some((RegionId::from("Hardap"), 2))
    );
    assert_eq!(highest_region::<CaseRecord>(&[]), None);
}

#[test]
fn test_rate_per_capita() {
    let counts = BTreeMap::from([(RegionId::from("A"), 50), (RegionId::from("B"), 50)]);
    let profiles = vec![
        RegionProfile::new("A", 100_000, 10.0),
        RegionProfile::new("B", 50_000, 10.0),
    ];
    let rates = rate_per_capita(&counts, &profiles, 100_000).unwrap();
    assert_eq!(rates[&RegionId::from("A")], 50.0);
    assert_eq!(rates[&RegionId::from("B")], 100.0);

    let ranked = ranked_rates(&rates);
    assert_eq!(ranked[0].0, RegionId::from("B"));
}

#[test]
fn test_rate_zero_fills_profiled_regions() {
    let counts = counts_by_region(&[case("Khomas", 2024, 1, 1), case("Atlantis", 2024, 1, 1)]);
    let rates = rate_per_capita(&counts, &sample_profiles(), 100_000).unwrap();
    assert_eq!(rates.len(), 3);
    assert_eq!(rates[&RegionId::from("Erongo")], 0.0);
    assert!(!rates.contains_key(&RegionId::from("Atlantis")));
}

#[test]
fn test_rate_errors() {
    let counts = BTreeMap::from([(RegionId::from("A"), 5)]);
    let empty = vec![RegionProfile::new("A", 0, 10.0)];
    assert!(matches!(
        rate_per_capita(&counts, &empty, 1000),
        Err(AnalysisError::InvalidRegionProfile { .. })
    ));
    assert!(matches!(
        rate_per_capita(&counts, &sample_profiles(), 0),
        Err(AnalysisError::ValueOutOfRange { .. })
    ));
}

#[test]
fn test_densities() {
    let density = densities(&sample_profiles());
    assert_close(density[&RegionId::from("Zambezi")], 100_000.0 / 14_500.0);
}

proptest! {
    #[test]
    fn prop_counts_sum_to_input(regions in proptest::collection::vec(0usize..14, 0..80)) {
        let cases: Vec<CaseRecord> = regions
            .iter()
            .map(|i| case(epi_core::models::CANONICAL_REGIONS[*i], 2024, 1, 1))
            .collect();
        for dimension in [Dimension::Region, Dimension::Gender, Dimension::Treatment] {
            prop_assert_eq!(group_count(&cases, dimension).total(), cases.len() as u64);
        }
    }
}

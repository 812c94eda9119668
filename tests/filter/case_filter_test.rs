//! Tests for case-record filtering

use crate::utils::{case, date, sample_cases};
use epi_core::filter::{Constraint, FilterSpec, TimeWindow, apply};
use epi_core::{AgeGroup, AnalysisError, CaseRecord, DiagnosisStatus, Gender, RegionId};
use proptest::prelude::*;

#[test]
fn test_empty_filter_is_identity() {
    let cases = sample_cases();
    let filtered = apply(&cases, &FilterSpec::default(), date(2024, 6, 1));
    assert_eq!(filtered.len(), cases.len());
    assert!(filtered.iter().zip(&cases).all(|(a, b)| *a == b));
}

#[test]
fn test_last_year_window() {
    let cases = vec![
        case("Khomas", 2023, 5, 1),
        case("Khomas", 2023, 12, 1),
        case("Khomas", 2024, 5, 1),
    ];
    let spec = FilterSpec::new().with_window(TimeWindow::last_year());
    let filtered = apply(&cases, &spec, date(2024, 6, 1));
    let dates: Vec<_> = filtered.iter().map(|c| c.diagnosis_date).collect();
    assert_eq!(dates, vec![date(2023, 12, 1), date(2024, 5, 1)]);
}

#[test]
fn test_custom_window_is_inclusive() {
    let cases = vec![
        case("Khomas", 2022, 12, 31),
        case("Khomas", 2023, 1, 1),
        case("Khomas", 2023, 12, 31),
        case("Khomas", 2024, 1, 1),
    ];
    let window = TimeWindow::custom_from_strs("2023-01-01", "2023-12-31", "%Y-%m-%d").unwrap();
    let filtered = apply(&cases, &FilterSpec::new().with_window(window), date(2024, 6, 1));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_reversed_custom_window_admits_nothing() {
    let cases = sample_cases();
    let window = TimeWindow::Custom {
        start: date(2024, 12, 31),
        end: date(2023, 1, 1),
    };
    let filtered = apply(&cases, &FilterSpec::new().with_window(window), date(2024, 6, 1));
    assert!(filtered.is_empty());
}

#[test]
fn test_bad_custom_date_names_field() {
    let err = TimeWindow::custom_from_strs("2023-01-01", "31/12/2023", "%Y-%m-%d").unwrap_err();
    match err {
        AnalysisError::InvalidDateFormat { field, raw } => {
            assert_eq!(field, "end_date");
            assert_eq!(raw, "31/12/2023");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fields_combine_with_and() {
    let cases = sample_cases();
    let spec = FilterSpec::new()
        .with_region("Khomas")
        .with_gender(Gender::Female);
    let filtered = apply(&cases, &spec, date(2024, 6, 1));
    assert_eq!(filtered.len(), 2);
    assert!(
        filtered
            .iter()
            .all(|c| c.region.as_str() == "Khomas" && c.gender == Gender::Female)
    );

    let narrower = spec.with_status(DiagnosisStatus::PreviouslyDiagnosed);
    assert_eq!(apply(&cases, &narrower, date(2024, 6, 1)).len(), 1);
}

#[test]
fn test_age_groups_one_of() {
    let cases = sample_cases();
    let spec = FilterSpec::new().with_age_groups([AgeGroup::Age0To14, AgeGroup::Age55Plus]);
    let filtered = apply(&cases, &spec, date(2024, 6, 1));
    let regions: Vec<&str> = filtered.iter().map(|c| c.region.as_str()).collect();
    assert_eq!(regions, vec!["Erongo", "Zambezi"]);
}

#[test]
fn test_treatment_and_district() {
    let cases = sample_cases();
    let on_treatment = apply(&cases, &FilterSpec::new().with_treatment(true), date(2024, 6, 1));
    assert_eq!(on_treatment.len(), 3);

    let east = apply(
        &cases,
        &FilterSpec::new().with_district("Windhoek East"),
        date(2024, 6, 1),
    );
    assert_eq!(east.len(), 2);
}

#[test]
fn test_borrowed_input_matches_owned() {
    let cases = sample_cases();
    let borrowed: Vec<&CaseRecord> = cases.iter().collect();
    let spec = FilterSpec::new().with_region("Erongo");
    assert_eq!(
        apply(&cases, &spec, date(2024, 6, 1)),
        apply(&borrowed, &spec, date(2024, 6, 1))
    );
}

#[test]
fn test_selection_strings() {
    assert_eq!(
        Constraint::<Gender>::from_selection("gender", "All").unwrap(),
        Constraint::Unconstrained
    );
    assert_eq!(
        Constraint::<Gender>::from_selection("gender", "Male").unwrap(),
        Constraint::Equals(Gender::Male)
    );
    assert_eq!(
        Constraint::<RegionId>::from_selection("region", "Oshana").unwrap(),
        Constraint::Equals(RegionId::from("Oshana"))
    );
    assert!(matches!(
        Constraint::<AgeGroup>::from_selection("age_group", "60-70"),
        Err(AnalysisError::UnknownCategory { .. })
    ));
}

#[test]
fn test_describe() {
    assert_eq!(FilterSpec::default().describe(), "No filters applied");
    let spec = FilterSpec::new()
        .with_window(TimeWindow::LastYears(3))
        .with_region("Khomas")
        .with_gender(Gender::Female);
    assert_eq!(
        spec.describe(),
        "Time: Last 3 Years, Region: Khomas, Gender: Female"
    );
}

fn arb_case() -> impl Strategy<Value = CaseRecord> {
    (
        0usize..4,
        0usize..2,
        0usize..6,
        any::<bool>(),
        0u32..1500,
    )
        .prop_map(|(region, gender, age, treated, offset)| {
            let regions = ["Khomas", "Erongo", "Zambezi", "Oshana"];
            CaseRecord::new(regions[region], date(2020, 1, 1) + chrono::Days::new(offset.into()))
                .with_gender(Gender::ALL[gender])
                .with_age_group(AgeGroup::ALL[age])
                .with_treatment(treated)
        })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        proptest::option::of(0usize..4),
        proptest::option::of(0usize..2),
        proptest::option::of(any::<bool>()),
        proptest::option::of(1u32..4),
    )
        .prop_map(|(region, gender, treated, years)| {
            let regions = ["Khomas", "Erongo", "Zambezi", "Oshana"];
            let mut spec = FilterSpec::new();
            if let Some(r) = region {
                spec = spec.with_region(regions[r]);
            }
            if let Some(g) = gender {
                spec = spec.with_gender(Gender::ALL[g]);
            }
            if let Some(t) = treated {
                spec = spec.with_treatment(t);
            }
            if let Some(n) = years {
                spec = spec.with_window(TimeWindow::LastYears(n));
            }
            spec
        })
}

proptest! {
    #[test]
    fn prop_filter_is_idempotent_subset(
        cases in proptest::collection::vec(arb_case(), 0..60),
        spec in arb_spec(),
    ) {
        let reference = date(2024, 2, 1);
        let once = apply(&cases, &spec, reference);
        let twice = apply(&once, &spec, reference);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= cases.len());
        prop_assert!(once.iter().all(|c| cases.contains(c)));
    }
}

//! Tests for facility filtering

use crate::utils::sample_facilities;
use epi_core::filter::{FacilitySpec, FilterCriteria, apply_facilities};
use epi_core::{FacilityType, ServiceTag};

fn names(spec: &FacilitySpec) -> Vec<String> {
    let facilities = sample_facilities();
    apply_facilities(&facilities, spec)
        .into_iter()
        .map(|f| f.name.clone())
        .collect()
}

#[test]
fn test_empty_spec_keeps_everything() {
    assert_eq!(names(&FacilitySpec::default()).len(), 4);
    assert_eq!(FacilitySpec::default().describe(), "All Facilities");
}

#[test]
fn test_services_match_any_selected() {
    let spec = FacilitySpec::new().with_services([ServiceTag::Pmtct, ServiceTag::Prep]);
    assert_eq!(
        names(&spec),
        vec!["Windhoek Central Hospital", "Zambezi Outreach"]
    );
}

#[test]
fn test_fields_and_services_combine() {
    let spec = FacilitySpec::new()
        .with_region("Khomas")
        .with_services([ServiceTag::HivTesting]);
    assert_eq!(names(&spec), vec!["Windhoek Central Hospital"]);

    let spec = FacilitySpec::new()
        .with_type(FacilityType::Clinic)
        .with_services([ServiceTag::HivTesting]);
    assert!(names(&spec).is_empty());
}

#[test]
fn test_name_search_is_case_insensitive() {
    assert_eq!(
        names(&FacilitySpec::new().with_name("  youth ")),
        vec!["Katutura Youth Clinic"]
    );
    assert_eq!(names(&FacilitySpec::new().with_name("   ")).len(), 4);
}

#[test]
fn test_describe_lists_active_fields() {
    let spec = FacilitySpec::new()
        .with_type(FacilityType::TestingCenter)
        .with_services([ServiceTag::HivTesting, ServiceTag::Counseling]);
    assert_eq!(
        spec.describe(),
        "Type: Testing Center, Services: HIV Testing, Counseling"
    );
}

#[test]
fn test_resolved_filter_normalises_name_once() {
    let facilities = sample_facilities();
    let spec = FacilitySpec::new().with_name("  WALVIS bay ");
    let resolved = spec.resolve();
    let matches: Vec<bool> = facilities
        .iter()
        .map(|f| resolved.meets_criteria(f))
        .collect();
    assert_eq!(matches, vec![false, false, true, false]);
}

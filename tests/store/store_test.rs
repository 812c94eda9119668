//! Tests for the record store and its JSON loader

use crate::utils::{date, sample_cases, sample_facilities, sample_profiles, sample_store};
use epi_core::{AnalysisError, RecordStore, RegionId, RegionProfile, ServiceTag};
use std::io::Write;

const STORE_JSON: &str = r#"{
    "cases": [
        {
            "region": "Oshana",
            "district": "Ongwediva",
            "gender": "Female",
            "age_group": "15-24",
            "diagnosis_date": "2023-04-12",
            "diagnosis_status": "New",
            "latitude": -17.78,
            "longitude": 15.77,
            "on_treatment": true
        },
        {
            "region": "Khomas",
            "district": "Windhoek East",
            "gender": "Male",
            "age_group": "55+",
            "diagnosis_date": "2024-01-30",
            "diagnosis_status": "Previously diagnosed",
            "latitude": -22.56,
            "longitude": 17.08,
            "on_treatment": false
        }
    ],
    "profiles": [
        { "region": "Oshana", "population": 200000, "area_sqkm": 8647.0 },
        { "region": "Khomas", "population": 500000, "area_sqkm": 36964.0 }
    ],
    "facilities": [
        {
            "name": "Oshakati Hospital",
            "region": "Oshana",
            "district": "Oshakati",
            "facility_type": "Hospital",
            "latitude": -17.79,
            "longitude": 15.70,
            "services": ["PMTCT", "HIV Testing", "PMTCT"],
            "contact": "+264 65 223 3000",
            "hours": "24/7"
        }
    ]
}"#;

#[test]
fn test_profiles_are_sorted_canonically() {
    let store = sample_store();
    let regions: Vec<&str> = store.regions().into_iter().map(RegionId::as_str).collect();
    assert_eq!(regions, vec!["Erongo", "Khomas", "Zambezi"]);
    assert_eq!(
        store.profile(&RegionId::from("Zambezi")).map(|p| p.population),
        Some(100_000)
    );
    assert!(store.profile(&RegionId::from("Oshana")).is_none());
}

#[test]
fn test_accessors() {
    let store = sample_store();
    assert_eq!(store.total_cases(), 6);
    assert_eq!(store.facilities().len(), 4);
    assert_eq!(store.date_span(), Some((date(2023, 1, 15), date(2024, 6, 1))));
    assert!(RecordStore::default().date_span().is_none());
}

#[test]
fn test_rejects_non_positive_area() {
    let mut profiles = sample_profiles();
    profiles.push(RegionProfile::new("Hardap", 90_000, 0.0));
    assert!(matches!(
        RecordStore::new(sample_cases(), profiles, sample_facilities()),
        Err(AnalysisError::InvalidRegionProfile { region, .. }) if region == "Hardap"
    ));
}

#[test]
fn test_rejects_duplicate_profiles() {
    let mut profiles = sample_profiles();
    profiles.push(RegionProfile::new("Khomas", 1, 1.0));
    assert!(matches!(
        RecordStore::new(sample_cases(), profiles, vec![]),
        Err(AnalysisError::DuplicateRegionProfile { region }) if region == "Khomas"
    ));
}

#[test]
fn test_load_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(STORE_JSON.as_bytes()).unwrap();

    let store = RecordStore::load_json(file.path()).unwrap();
    assert_eq!(store.total_cases(), 2);
    assert_eq!(store.cases()[1].age_group.label(), "55+");
    assert_eq!(
        store.facilities()[0].services.as_slice(),
        &[ServiceTag::HivTesting, ServiceTag::Pmtct]
    );
    let regions: Vec<&str> = store.regions().into_iter().map(RegionId::as_str).collect();
    assert_eq!(regions, vec!["Khomas", "Oshana"]);
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        RecordStore::load_json(&dir.path().join("missing.json")),
        Err(AnalysisError::Io(_))
    ));
    assert!(matches!(
        RecordStore::from_json_str("{\"cases\": [{\"region\": 3}]}"),
        Err(AnalysisError::Json(_))
    ));
    assert_eq!(RecordStore::from_json_str("{}").unwrap().total_cases(), 0);
}

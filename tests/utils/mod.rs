use chrono::NaiveDate;
use epi_core::{
    AgeGroup, CaseRecord, DiagnosisStatus, FacilityRecord, FacilityType, Gender, RecordStore,
    RegionProfile, ServiceTag,
};

/// Shorthand for a calendar date
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A case in `region` diagnosed on the given date, with default attributes
#[must_use]
pub fn case(region: &str, year: i32, month: u32, day: u32) -> CaseRecord {
    CaseRecord::new(region, date(year, month, day))
}

/// A small mixed sample over three regions and two years
#[must_use]
pub fn sample_cases() -> Vec<CaseRecord> {
    vec![
        case("Khomas", 2023, 1, 15)
            .with_district("Windhoek East")
            .with_gender(Gender::Male)
            .with_age_group(AgeGroup::Age15To24)
            .with_treatment(true),
        case("Khomas", 2023, 3, 2)
            .with_district("Windhoek West")
            .with_gender(Gender::Female)
            .with_age_group(AgeGroup::Age25To34),
        case("Khomas", 2024, 2, 20)
            .with_district("Windhoek East")
            .with_gender(Gender::Female)
            .with_age_group(AgeGroup::Age35To44)
            .with_status(DiagnosisStatus::PreviouslyDiagnosed)
            .with_treatment(true),
        case("Erongo", 2023, 6, 30)
            .with_district("Walvis Bay")
            .with_gender(Gender::Male)
            .with_age_group(AgeGroup::Age25To34)
            .with_treatment(true),
        case("Erongo", 2024, 5, 1)
            .with_district("Swakopmund")
            .with_gender(Gender::Female)
            .with_age_group(AgeGroup::Age55Plus),
        case("Zambezi", 2024, 6, 1)
            .with_district("Katima Mulilo")
            .with_gender(Gender::Female)
            .with_age_group(AgeGroup::Age0To14)
            .with_status(DiagnosisStatus::PreviouslyDiagnosed),
    ]
}

/// Profiles for the regions in `sample_cases`
#[must_use]
pub fn sample_profiles() -> Vec<RegionProfile> {
    vec![
        RegionProfile::new("Khomas", 400_000, 37_000.0),
        RegionProfile::new("Erongo", 200_000, 63_000.0),
        RegionProfile::new("Zambezi", 100_000, 14_500.0),
    ]
}

/// A handful of facilities with overlapping services
#[must_use]
pub fn sample_facilities() -> Vec<FacilityRecord> {
    vec![
        FacilityRecord::new("Windhoek Central Hospital", "Khomas", FacilityType::Hospital)
            .with_district("Windhoek West")
            .with_services([ServiceTag::HivTesting, ServiceTag::HivTreatment, ServiceTag::Pmtct]),
        FacilityRecord::new("Katutura Youth Clinic", "Khomas", FacilityType::Clinic)
            .with_district("Windhoek East")
            .with_services([ServiceTag::YouthServices, ServiceTag::Counseling]),
        FacilityRecord::new("Walvis Bay Testing Center", "Erongo", FacilityType::TestingCenter)
            .with_district("Walvis Bay")
            .with_services([ServiceTag::HivTesting]),
        FacilityRecord::new("Zambezi Outreach", "Zambezi", FacilityType::CommunityOutreach)
            .with_services([ServiceTag::Prep, ServiceTag::SupportGroups]),
    ]
}

/// A store over the sample cases, profiles and facilities
#[must_use]
pub fn sample_store() -> RecordStore {
    RecordStore::new(sample_cases(), sample_profiles(), sample_facilities()).unwrap()
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

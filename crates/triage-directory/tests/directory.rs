use triage_core::models::recommendation::{Department, Recommendation, Severity};
use triage_directory::clinician::{Availability, ClinicianFilter};
use triage_directory::directory::{ClinicianDirectory, InMemoryDirectory};
use triage_directory::error::DirectoryError;
use triage_directory::referral::referrals;

const CLINICIANS: &str = r#"[
    { "id": 1, "name": "Dr. Sarah Mitchell", "specialty": "Orthopedics",
      "subSpecialty": "Sports Medicine", "experience": 15, "rating": 4.9, "reviews": 234,
      "location": "Dubai", "hospital": "Dubai Medical Center", "languages": ["English", "Arabic"],
      "availability": "Available", "consultationFee": 500 },
    { "id": 2, "name": "Dr. Ahmed Al-Hassan", "specialty": "Physical Therapy",
      "subSpecialty": "Rehabilitation", "experience": 12, "rating": 4.8, "reviews": 189,
      "location": "Abu Dhabi", "hospital": "Abu Dhabi Specialist Hospital",
      "languages": ["Arabic", "English", "French"], "availability": "Available",
      "consultationFee": 400 },
    { "id": 3, "name": "Dr. Jennifer Wong", "specialty": "Neurology", "experience": 18,
      "rating": 4.9, "location": "Dubai", "hospital": "Emirates Healthcare",
      "availability": "Busy", "consultationFee": 600 },
    { "id": 4, "name": "Dr. Mohammed Khalil", "specialty": "Orthopedics", "experience": 20,
      "rating": 5.0, "location": "Dubai", "hospital": "Dubai Medical Center",
      "availability": "Available", "consultationFee": 700 },
    { "id": 6, "name": "Dr. Raj Patel", "specialty": "Cardiology", "experience": 22,
      "rating": 4.8, "location": "Abu Dhabi", "hospital": "Abu Dhabi Specialist Hospital",
      "availability": "Off Duty", "consultationFee": 800 },
    { "id": 8, "name": "Dr. Michael Chen", "specialty": "Orthopedics", "experience": 10,
      "rating": 4.9, "location": "Dubai", "hospital": "Dubai Medical Center",
      "availability": "Busy", "consultationFee": 550 },
    { "id": 9, "name": "Dr. Omar Rahman", "specialty": "Orthopedics", "experience": 25,
      "rating": 4.9, "location": "Sharjah", "hospital": "Sharjah Medical Complex",
      "availability": "Available", "consultationFee": 450 }
]"#;

fn directory() -> InMemoryDirectory {
    InMemoryDirectory::from_json(CLINICIANS).unwrap()
}

fn recommendation(department: Department) -> Recommendation {
    Recommendation {
        condition: "Lumbar muscle strain".to_string(),
        department,
        severity: Severity::Moderate,
        confidence: 85,
        actions: vec!["Physical therapy recommended".to_string()],
    }
}

#[test]
fn loads_clinicians_from_json() {
    let dir = directory();
    assert_eq!(dir.len(), 7);
    let wong = dir.find_by_id(3).unwrap();
    assert_eq!(wong.specialty, Department::Neurology);
    assert!(wong.sub_specialty.is_none());
    assert!(wong.languages.is_empty());
    assert_eq!(dir.find_by_id(6).unwrap().availability, Availability::OffDuty);
    assert!(dir.find_by_id(99).is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        { "id": 1, "name": "A", "specialty": "Neurology", "experience": 1, "rating": 4.0,
          "location": "Dubai", "hospital": "H", "availability": "Busy", "consultationFee": 1 },
        { "id": 1, "name": "B", "specialty": "Neurology", "experience": 1, "rating": 4.0,
          "location": "Dubai", "hospital": "H", "availability": "Busy", "consultationFee": 1 }
    ]"#;
    let err = InMemoryDirectory::from_json(json).unwrap_err();
    assert!(matches!(err, DirectoryError::DuplicateClinician(1)));
}

#[test]
fn empty_filter_lists_everyone_in_order() {
    let dir = directory();
    let ids: Vec<_> = dir
        .list(&ClinicianFilter::default())
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 6, 8, 9]);
}

#[test]
fn query_matches_name_specialty_and_sub_specialty() {
    let dir = directory();
    let by_query = |q: &str| -> Vec<u32> {
        dir.list(&ClinicianFilter {
            query: Some(q.to_string()),
            ..ClinicianFilter::default()
        })
        .iter()
        .map(|c| c.id)
        .collect()
    };

    assert_eq!(by_query("wong"), vec![3]);
    assert_eq!(by_query("THERAPY"), vec![2]);
    assert_eq!(by_query("sports"), vec![1]);
    assert!(by_query("dermatology").is_empty());
}

#[test]
fn filters_combine() {
    let dir = directory();
    let filter = ClinicianFilter {
        specialty: Some(Department::Orthopedics),
        location: Some("Dubai".to_string()),
        availability: Some(Availability::Available),
        ..ClinicianFilter::default()
    };
    let ids: Vec<_> = dir.list(&filter).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn referrals_are_available_and_ranked() {
    let dir = directory();
    let ids: Vec<_> = referrals(&dir, &recommendation(Department::Orthopedics))
        .iter()
        .map(|c| c.id)
        .collect();
    // Khalil rates highest; Rahman and Mitchell tie on rating, Rahman has more experience.
    assert_eq!(ids, vec![4, 9, 1]);
}

#[test]
fn referrals_skip_unavailable_departments() {
    let dir = directory();
    assert!(referrals(&dir, &recommendation(Department::Neurology)).is_empty());
    assert!(referrals(&dir, &recommendation(Department::InternalMedicine)).is_empty());
}

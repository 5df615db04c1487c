use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::recommendation::Department;

pub type ClinicianId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Availability {
    Available,
    Busy,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Clinician {
    pub id: ClinicianId,
    pub name: String,
    pub specialty: Department,
    #[serde(default)]
    pub sub_specialty: Option<String>,
    /// Years in practice.
    pub experience: u32,
    /// Average review score, 0.0–5.0.
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    pub location: String,
    pub hospital: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub availability: Availability,
    pub consultation_fee: u32,
}

/// Criteria for listing clinicians. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicianFilter {
    /// Case-insensitive substring of name, specialty, or sub-specialty.
    pub query: Option<String>,
    pub specialty: Option<Department>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
}

impl ClinicianFilter {
    pub fn matches(&self, clinician: &Clinician) -> bool {
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let hit = clinician.name.to_lowercase().contains(&query)
                || clinician.specialty.name().to_lowercase().contains(&query)
                || clinician
                    .sub_specialty
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        if self.specialty.is_some_and(|s| s != clinician.specialty) {
            return false;
        }
        if self
            .location
            .as_ref()
            .is_some_and(|l| *l != clinician.location)
        {
            return false;
        }
        if self
            .availability
            .is_some_and(|a| a != clinician.availability)
        {
            return false;
        }
        true
    }
}

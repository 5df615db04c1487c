use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Advisory text shown alongside every recommendation.
pub const DISCLAIMER: &str = "This screening tool provides preliminary insights based on your \
responses. It is not a substitute for professional medical diagnosis. Please consult with a \
qualified healthcare provider for accurate diagnosis and treatment.";

/// Coarse urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        };
        f.write_str(name)
    }
}

/// Clinical departments a screening can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Department {
    Orthopedics,
    #[serde(rename = "Physical Therapy")]
    PhysicalTherapy,
    Neurology,
    Cardiology,
    #[serde(rename = "Internal Medicine")]
    InternalMedicine,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Orthopedics,
        Department::PhysicalTherapy,
        Department::Neurology,
        Department::Cardiology,
        Department::InternalMedicine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Department::Orthopedics => "Orthopedics",
            Department::PhysicalTherapy => "Physical Therapy",
            Department::Neurology => "Neurology",
            Department::Cardiology => "Cardiology",
            Department::InternalMedicine => "Internal Medicine",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of triaging a complete response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub condition: String,
    pub department: Department,
    pub severity: Severity,
    /// Percentage, 0–100.
    pub confidence: u8,
    /// Ordered next steps. Never empty.
    pub actions: Vec<String>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;
use super::recommendation::Recommendation;

/// A confirmed screening, ready to hand to whatever stores results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub questionnaire_id: String,
    pub questionnaire_version: u32,
    pub answers: Vec<Answer>,
    pub recommendation: Recommendation,
    pub completed_at: jiff::Timestamp,
}

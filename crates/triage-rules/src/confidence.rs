use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::question::{QuestionKind, Questionnaire};
use triage_core::models::response::ResponseSet;

/// Confidence reported when no grading is configured.
pub const BASELINE_CONFIDENCE: u8 = 85;

/// How the confidence percentage of a recommendation is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidencePolicy {
    /// The same value for every recommendation.
    Fixed { value: u8 },
    /// Start from `base` and subtract penalties for answers the rules
    /// could not place or that contradict themselves.
    Graded {
        base: u8,
        /// Subtracted when only the fallback rule matched.
        fallback_penalty: u8,
        /// Subtracted once per multi-choice answer that pairs an
        /// exclusive option with other selections.
        inconsistency_penalty: u8,
        /// Options that rule out every other selection.
        exclusive_options: Vec<String>,
        floor: u8,
    },
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        ConfidencePolicy::Fixed {
            value: BASELINE_CONFIDENCE,
        }
    }
}

impl ConfidencePolicy {
    /// A graded policy with the penalties used by the back-pain screening.
    pub fn graded() -> Self {
        ConfidencePolicy::Graded {
            base: BASELINE_CONFIDENCE,
            fallback_penalty: 25,
            inconsistency_penalty: 10,
            exclusive_options: vec![
                "None of the above".to_string(),
                "No specific activity".to_string(),
            ],
            floor: 30,
        }
    }

    pub fn score(
        &self,
        questionnaire: &Questionnaire,
        responses: &ResponseSet,
        fallback: bool,
    ) -> u8 {
        match self {
            ConfidencePolicy::Fixed { value } => (*value).min(100),
            ConfidencePolicy::Graded {
                base,
                fallback_penalty,
                inconsistency_penalty,
                exclusive_options,
                floor,
            } => {
                let inconsistent = questionnaire
                    .questions
                    .iter()
                    .filter(|q| q.kind == QuestionKind::MultiChoice)
                    .filter_map(|q| responses.get(q.id)?.as_set())
                    .filter(|selected| {
                        selected.len() > 1
                            && selected.iter().any(|s| exclusive_options.contains(s))
                    })
                    .count();
                let inconsistent = u8::try_from(inconsistent).unwrap_or(u8::MAX);

                let mut score = (*base).min(100);
                if fallback {
                    score = score.saturating_sub(*fallback_penalty);
                }
                score = score.saturating_sub(inconsistency_penalty.saturating_mul(inconsistent));
                score.max((*floor).min(100))
            }
        }
    }
}

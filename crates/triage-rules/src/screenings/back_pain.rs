use std::sync::LazyLock;

use triage_core::models::question::{Question, QuestionId, Questionnaire};
use triage_core::models::recommendation::{Department, Severity};

use crate::rules::{Predicate, RecommendationTemplate, Rule, RuleTable};
use crate::Screening;

pub const PAIN_LEVEL: QuestionId = 1;
pub const PAIN_LOCATION: QuestionId = 2;
pub const PAIN_DURATION: QuestionId = 3;
pub const AGGRAVATING_ACTIVITIES: QuestionId = 4;
pub const SYMPTOMS: QuestionId = 5;
pub const PREVIOUS_INJURY: QuestionId = 6;
pub const ADDITIONAL_NOTES: QuestionId = 7;

/// Pain levels at or above this are treated as high severity.
pub const HIGH_SEVERITY_THRESHOLD: i32 = 4;

/// Back-pain pre-diagnosis screening.
/// Seven questions; pain level (1–5) and pain location drive the outcome.
pub struct BackPain;

impl Screening for BackPain {
    fn id(&self) -> &str {
        "back_pain"
    }

    fn name(&self) -> &str {
        "Back Pain Screening"
    }

    fn questionnaire(&self) -> &Questionnaire {
        questionnaire()
    }

    fn rules(&self) -> &RuleTable {
        rule_table()
    }
}

pub fn questionnaire() -> &'static Questionnaire {
    static QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(|| Questionnaire {
        id: "back_pain".to_string(),
        version: 1,
        title: "Pre-Diagnosis Screening".to_string(),
        questions: vec![
            Question::rating(
                PAIN_LEVEL,
                "Rate your pain level (1 = Mild, 5 = Severe)",
                1..=5,
            ),
            Question::single_choice(
                PAIN_LOCATION,
                "Where is the pain located?",
                &["Lower back", "Upper back", "Neck", "Shoulders"],
            ),
            Question::single_choice(
                PAIN_DURATION,
                "How long have you been experiencing this pain?",
                &[
                    "Less than 1 week",
                    "1-4 weeks",
                    "1-3 months",
                    "More than 3 months",
                ],
            ),
            Question::multi_choice(
                AGGRAVATING_ACTIVITIES,
                "Does the pain worsen with any specific activities?",
                &[
                    "Sitting",
                    "Standing",
                    "Walking",
                    "Lifting",
                    "Bending",
                    "No specific activity",
                ],
            ),
            Question::multi_choice(
                SYMPTOMS,
                "Do you experience any of the following symptoms?",
                &[
                    "Numbness",
                    "Tingling",
                    "Weakness",
                    "Stiffness",
                    "None of the above",
                ],
            ),
            Question::single_choice(
                PREVIOUS_INJURY,
                "Have you had any previous injuries to this area?",
                &[
                    "Yes, within the past year",
                    "Yes, more than a year ago",
                    "No previous injuries",
                ],
            ),
            Question::free_text(
                ADDITIONAL_NOTES,
                "Please describe any additional symptoms or concerns",
            ),
        ],
    });
    &QUESTIONNAIRE
}

pub fn rule_table() -> &'static RuleTable {
    static RULES: LazyLock<RuleTable> = LazyLock::new(|| {
        RuleTable::new(vec![
            Rule::new(
                "lower_back_severe",
                Predicate::All {
                    predicates: vec![
                        location("Lower back"),
                        Predicate::RatingAtLeast {
                            question: PAIN_LEVEL,
                            threshold: HIGH_SEVERITY_THRESHOLD,
                        },
                    ],
                },
                template(
                    "Severe lumbar strain or possible disc herniation",
                    Department::Orthopedics,
                    Severity::High,
                    [
                        "Immediate consultation with orthopedic specialist",
                        "Consider MRI scan",
                        "Pain management medication may be required",
                    ],
                ),
            ),
            Rule::new(
                "lower_back",
                location("Lower back"),
                template(
                    "Lumbar muscle strain",
                    Department::Orthopedics,
                    Severity::Moderate,
                    [
                        "Physical therapy recommended",
                        "Anti-inflammatory medication",
                        "Rest and ice therapy",
                    ],
                ),
            ),
            Rule::new(
                "neck",
                location("Neck"),
                template(
                    "Cervical strain",
                    Department::Neurology,
                    Severity::Moderate,
                    [
                        "Neck exercises and stretching",
                        "Ergonomic assessment",
                        "Physical therapy",
                    ],
                ),
            ),
            Rule::new(
                "upper_back",
                location("Upper back"),
                template(
                    "Thoracic spine strain",
                    Department::Orthopedics,
                    Severity::Moderate,
                    [
                        "Posture correction",
                        "Physical therapy",
                        "Strengthening exercises",
                    ],
                ),
            ),
            Rule::new(
                "fallback",
                Predicate::Always,
                template(
                    "Lumbar strain",
                    Department::Orthopedics,
                    Severity::Moderate,
                    [
                        "Consultation with a general practitioner",
                        "Monitor symptoms and keep a pain diary",
                        "Gentle stretching and activity as tolerated",
                    ],
                ),
            ),
        ])
    });
    &RULES
}

fn location(value: &str) -> Predicate {
    Predicate::ChoiceIs {
        question: PAIN_LOCATION,
        value: value.to_string(),
    }
}

fn template(
    condition: &str,
    department: Department,
    severity: Severity,
    actions: [&str; 3],
) -> RecommendationTemplate {
    RecommendationTemplate {
        condition: condition.to_string(),
        department,
        severity,
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

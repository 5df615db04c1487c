use triage_core::models::answer::{Answer, AnswerValue};
use triage_core::models::question::{Question, QuestionKind, Questionnaire};
use triage_core::models::recommendation::{Department, Severity};
use triage_core::models::response::ResponseSet;
use triage_rules::classify::Classifier;
use triage_rules::config::ClassifierConfig;
use triage_rules::error::RuleError;
use triage_rules::rules::{Predicate, RecommendationTemplate, Rule, RuleTable};
use triage_rules::screenings::back_pain;

fn template(condition: &str) -> RecommendationTemplate {
    RecommendationTemplate {
        condition: condition.to_string(),
        department: Department::InternalMedicine,
        severity: Severity::Low,
        actions: vec!["Follow up".to_string()],
    }
}

fn questionnaire() -> Questionnaire {
    Questionnaire::new(
        "chest",
        1,
        "Chest",
        vec![
            Question::rating(1, "Pain level", 1..=10),
            Question::single_choice(2, "Radiates to arm?", &["Yes", "No"]),
        ],
    )
    .unwrap()
}

#[test]
fn built_in_table_is_valid() {
    back_pain::rule_table()
        .validate(back_pain::questionnaire())
        .unwrap();
    back_pain::questionnaire().validate().unwrap();
}

#[test]
fn built_in_table_round_trips_through_json() {
    let json = back_pain::rule_table().to_json().unwrap();
    let parsed = RuleTable::from_json(&json, back_pain::questionnaire()).unwrap();
    assert_eq!(&parsed, back_pain::rule_table());
}

#[test]
fn rules_loaded_from_json_drive_classification() {
    let json = r#"{
        "rules": [
            {
                "name": "cardiac",
                "when": { "type": "all", "predicates": [
                    { "type": "choice_is", "question": 2, "value": "Yes" },
                    { "type": "rating_at_least", "question": 1, "threshold": 7 }
                ] },
                "then": {
                    "condition": "Possible cardiac event",
                    "department": "Cardiology",
                    "severity": "High",
                    "actions": ["Seek emergency care"]
                }
            },
            {
                "name": "fallback",
                "when": { "type": "always" },
                "then": {
                    "condition": "Non-specific chest pain",
                    "department": "Internal Medicine",
                    "severity": "Low",
                    "actions": ["Book a routine appointment"]
                }
            }
        ]
    }"#;
    let q = questionnaire();
    let table = RuleTable::from_json(json, &q).unwrap();
    let config = ClassifierConfig::default();
    let classifier = Classifier::new(&table, &config);

    let severe: ResponseSet = [
        Answer::new(1, AnswerValue::Integer(8)),
        Answer::new(2, AnswerValue::text("Yes")),
    ]
    .into_iter()
    .collect();
    let rec = classifier.classify(&severe, &q).unwrap();
    assert_eq!(rec.department, Department::Cardiology);
    assert_eq!(rec.severity, Severity::High);

    let mild: ResponseSet = [
        Answer::new(1, AnswerValue::Integer(3)),
        Answer::new(2, AnswerValue::text("Yes")),
    ]
    .into_iter()
    .collect();
    let rec = classifier.classify(&mild, &q).unwrap();
    assert_eq!(rec.condition, "Non-specific chest pain");
}

#[test]
fn empty_table_is_rejected() {
    let err = RuleTable::new(Vec::new())
        .validate(&questionnaire())
        .unwrap_err();
    assert!(matches!(err, RuleError::Empty));
}

#[test]
fn table_without_fallback_is_rejected() {
    let table = RuleTable::new(vec![Rule::new(
        "yes",
        Predicate::ChoiceIs {
            question: 2,
            value: "Yes".to_string(),
        },
        template("x"),
    )]);
    let err = table.validate(&questionnaire()).unwrap_err();
    assert!(matches!(err, RuleError::MissingFallback(name) if name == "yes"));
}

#[test]
fn rules_after_fallback_are_unreachable() {
    let table = RuleTable::new(vec![
        Rule::new("catch_all", Predicate::Always, template("a")),
        Rule::new("never", Predicate::Always, template("b")),
    ]);
    let err = table.validate(&questionnaire()).unwrap_err();
    assert!(matches!(err, RuleError::Unreachable(name) if name == "never"));
}

#[test]
fn predicate_on_unknown_question_is_rejected() {
    let table = RuleTable::new(vec![
        Rule::new(
            "ghost",
            Predicate::ChoiceIs {
                question: 9,
                value: "Yes".to_string(),
            },
            template("a"),
        ),
        Rule::new("fallback", Predicate::Always, template("b")),
    ]);
    let err = table.validate(&questionnaire()).unwrap_err();
    assert!(matches!(
        err,
        RuleError::UnknownQuestion { question_id: 9, .. }
    ));
}

#[test]
fn predicate_kind_must_match_question() {
    let table = RuleTable::new(vec![
        Rule::new(
            "wrong",
            Predicate::RatingAtLeast {
                question: 2,
                threshold: 1,
            },
            template("a"),
        ),
        Rule::new("fallback", Predicate::Always, template("b")),
    ]);
    let err = table.validate(&questionnaire()).unwrap_err();
    assert!(matches!(
        err,
        RuleError::KindMismatch {
            expected: QuestionKind::Rating,
            found: QuestionKind::SingleChoice,
            ..
        }
    ));
}

#[test]
fn rule_without_actions_is_rejected() {
    let mut empty = template("a");
    empty.actions.clear();
    let table = RuleTable::new(vec![Rule::new("fallback", Predicate::Always, empty)]);
    let err = table.validate(&questionnaire()).unwrap_err();
    assert!(matches!(err, RuleError::NoActions(_)));
}

#[test]
fn first_match_wins() {
    let table = back_pain::rule_table();
    let responses: ResponseSet = [
        Answer::new(back_pain::PAIN_LEVEL, AnswerValue::Integer(5)),
        Answer::new(back_pain::PAIN_LOCATION, AnswerValue::text("Lower back")),
    ]
    .into_iter()
    .collect();
    assert_eq!(table.first_match(&responses).unwrap().name, "lower_back_severe");
}

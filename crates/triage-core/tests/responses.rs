use triage_core::models::answer::{Answer, AnswerValue};
use triage_core::models::question::{Question, Questionnaire};
use triage_core::models::response::ResponseSet;

fn questionnaire() -> Questionnaire {
    Questionnaire::new(
        "pain",
        1,
        "Pain",
        vec![
            Question::rating(1, "Rate your pain level", 1..=5),
            Question::single_choice(2, "Where is the pain located?", &["Lower back", "Neck"]),
            Question::multi_choice(
                3,
                "Do you experience any of the following symptoms?",
                &["Numbness", "Tingling", "Weakness"],
            ),
            Question::free_text(4, "Anything else?"),
        ],
    )
    .unwrap()
}

#[test]
fn last_write_wins() {
    let mut responses = ResponseSet::new();
    responses.record(Answer::new(2, AnswerValue::text("Neck")));
    responses.record(Answer::new(2, AnswerValue::text("Lower back")));
    assert_eq!(responses.len(), 1);
    assert_eq!(responses.get(2), Some(&AnswerValue::text("Lower back")));
}

#[test]
fn first_unanswered_follows_questionnaire_order() {
    let q = questionnaire();
    let mut responses = ResponseSet::new();
    assert_eq!(responses.first_unanswered(&q), Some(1));

    responses.record(Answer::new(1, AnswerValue::Integer(2)));
    responses.record(Answer::new(4, AnswerValue::text("none")));
    assert_eq!(responses.first_unanswered(&q), Some(2));

    responses.record(Answer::new(2, AnswerValue::text("Neck")));
    responses.record(Answer::new(3, AnswerValue::set(Vec::<String>::new())));
    assert_eq!(responses.first_unanswered(&q), Some(3));

    responses.record(Answer::new(3, AnswerValue::set(["Weakness"])));
    assert!(responses.is_complete(&q));
}

#[test]
fn blank_free_text_is_unanswered() {
    let q = questionnaire();
    let mut responses: ResponseSet = [
        Answer::new(1, AnswerValue::Integer(2)),
        Answer::new(2, AnswerValue::text("Neck")),
        Answer::new(3, AnswerValue::set(["Numbness"])),
        Answer::new(4, AnswerValue::text("  \n")),
    ]
    .into_iter()
    .collect();
    assert_eq!(responses.first_unanswered(&q), Some(4));

    responses.clear();
    assert!(responses.is_empty());
}

#[test]
fn toggle_adds_and_removes_selections() {
    let mut responses = ResponseSet::new();
    responses.toggle(3, "Numbness");
    responses.toggle(3, "Tingling");
    responses.toggle(3, "Numbness");
    assert_eq!(responses.get(3), Some(&AnswerValue::set(["Tingling"])));

    responses.record(Answer::new(5, AnswerValue::text("oops")));
    responses.toggle(5, "Weakness");
    assert_eq!(responses.get(5), Some(&AnswerValue::set(["Weakness"])));
}

#[test]
fn summary_renders_in_questionnaire_and_option_order() {
    let q = questionnaire();
    let responses: ResponseSet = [
        Answer::new(3, AnswerValue::set(["Weakness", "Numbness"])),
        Answer::new(1, AnswerValue::Integer(4)),
        Answer::new(2, AnswerValue::text("Lower back")),
    ]
    .into_iter()
    .collect();

    let summary = responses.summarize(&q);
    assert_eq!(summary.len(), 3);
    assert_eq!(summary[0].prompt, "Rate your pain level");
    assert_eq!(summary[0].answer, "4");
    assert_eq!(summary[1].answer, "Lower back");
    assert_eq!(summary[2].question_id, 3);
    assert_eq!(summary[2].answer, "Numbness, Weakness");
}

#[test]
fn response_set_deserializes_untagged_values() {
    let json = r#"{ "1": 5, "2": "Neck", "3": ["Tingling"] }"#;
    let responses: ResponseSet = serde_json::from_str(json).unwrap();
    assert_eq!(responses.get(1), Some(&AnswerValue::Integer(5)));
    assert_eq!(responses.get(2), Some(&AnswerValue::text("Neck")));
    assert_eq!(responses.get(3), Some(&AnswerValue::set(["Tingling"])));
}

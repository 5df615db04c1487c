use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::{Answer, AnswerValue};
use super::question::{QuestionId, Questionnaire};

/// All answers collected during one screening session.
///
/// Holds at most one answer per question; recording an answer for a
/// question that already has one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet(BTreeMap<QuestionId, AnswerValue>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Last write wins.
    pub fn record(&mut self, answer: Answer) {
        self.0.insert(answer.question_id, answer.value);
    }

    /// Toggle `option` in a multi-choice selection. A missing or
    /// non-set answer is replaced with a fresh selection.
    pub fn toggle(&mut self, question_id: QuestionId, option: &str) {
        let entry = self
            .0
            .entry(question_id)
            .or_insert_with(|| AnswerValue::Set(BTreeSet::new()));
        match entry {
            AnswerValue::Set(selected) => {
                if !selected.remove(option) {
                    selected.insert(option.to_string());
                }
            }
            other => *other = AnswerValue::set([option]),
        }
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&AnswerValue> {
        self.0.get(&question_id)
    }

    pub fn remove(&mut self, question_id: QuestionId) -> Option<AnswerValue> {
        self.0.remove(&question_id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (*id, value))
    }

    pub fn to_answers(&self) -> Vec<Answer> {
        self.iter()
            .map(|(id, value)| Answer::new(id, value.clone()))
            .collect()
    }

    /// The first question, in questionnaire order, that has no answer
    /// satisfying its "answered" predicate.
    pub fn first_unanswered(&self, questionnaire: &Questionnaire) -> Option<QuestionId> {
        questionnaire
            .questions
            .iter()
            .find(|q| {
                !self
                    .0
                    .get(&q.id)
                    .is_some_and(|value| q.is_answered_by(value))
            })
            .map(|q| q.id)
    }

    pub fn is_complete(&self, questionnaire: &Questionnaire) -> bool {
        self.first_unanswered(questionnaire).is_none()
    }

    /// Render the answered questions for a results view, in questionnaire
    /// order. Multi-choice selections follow the order the options were
    /// offered in and are joined with ", ".
    pub fn summarize(&self, questionnaire: &Questionnaire) -> Vec<ResponseLine> {
        questionnaire
            .questions
            .iter()
            .filter_map(|question| {
                let value = self.0.get(&question.id)?;
                let answer = match value {
                    AnswerValue::Integer(level) => level.to_string(),
                    AnswerValue::Text(text) => text.clone(),
                    AnswerValue::Set(selected) => {
                        let mut labels: Vec<&String> = selected.iter().collect();
                        labels.sort_by_key(|label| {
                            question.option_position(label).unwrap_or(usize::MAX)
                        });
                        labels
                            .into_iter()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(", ")
                    }
                };
                Some(ResponseLine {
                    question_id: question.id,
                    prompt: question.prompt.clone(),
                    answer,
                })
            })
            .collect()
    }
}

impl FromIterator<Answer> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        let mut responses = ResponseSet::new();
        for answer in iter {
            responses.record(answer);
        }
        responses
    }
}

/// One row of the "your responses" summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseLine {
    pub question_id: QuestionId,
    pub prompt: String,
    pub answer: String,
}

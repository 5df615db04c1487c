use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::{AnswerShape, AnswerValue};
use crate::error::CoreError;

/// Stable identifier of a question within a questionnaire.
pub type QuestionId = u32;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Pick one level from a numeric scale (e.g., 1–5).
    Rating,
    /// Pick exactly one labelled option.
    SingleChoice,
    /// Pick any non-empty subset of labelled options.
    MultiChoice,
    /// Free-form text.
    FreeText,
}

impl QuestionKind {
    /// The answer shape this kind of question accepts.
    pub fn expected_shape(self) -> AnswerShape {
        match self {
            QuestionKind::Rating => AnswerShape::Integer,
            QuestionKind::SingleChoice | QuestionKind::FreeText => AnswerShape::Text,
            QuestionKind::MultiChoice => AnswerShape::Set,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionKind::Rating => "rating",
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::MultiChoice => "multi_choice",
            QuestionKind::FreeText => "free_text",
        };
        f.write_str(name)
    }
}

/// A selectable value offered by a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum QuestionOption {
    Level(i32),
    Label(String),
}

impl fmt::Display for QuestionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionOption::Level(level) => write!(f, "{level}"),
            QuestionOption::Label(label) => f.write_str(label),
        }
    }
}

/// One item in a fixed, ordered questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn rating(
        id: QuestionId,
        prompt: impl Into<String>,
        levels: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::Rating,
            options: levels.into_iter().map(QuestionOption::Level).collect(),
        }
    }

    pub fn single_choice(id: QuestionId, prompt: impl Into<String>, labels: &[&str]) -> Self {
        Self::labelled(id, prompt, QuestionKind::SingleChoice, labels)
    }

    pub fn multi_choice(id: QuestionId, prompt: impl Into<String>, labels: &[&str]) -> Self {
        Self::labelled(id, prompt, QuestionKind::MultiChoice, labels)
    }

    pub fn free_text(id: QuestionId, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::FreeText,
            options: Vec::new(),
        }
    }

    fn labelled(
        id: QuestionId,
        prompt: impl Into<String>,
        kind: QuestionKind,
        labels: &[&str],
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind,
            options: labels
                .iter()
                .map(|label| QuestionOption::Label(label.to_string()))
                .collect(),
        }
    }

    /// Whether `value` has the shape this question's kind expects.
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        value.shape() == self.kind.expected_shape()
    }

    /// Whether `value` is one of the levels offered by a rating question.
    /// Always true for the other kinds.
    pub fn offers(&self, value: &AnswerValue) -> bool {
        match (self.kind, value) {
            (QuestionKind::Rating, AnswerValue::Integer(level)) => self
                .options
                .iter()
                .any(|o| matches!(o, QuestionOption::Level(l) if l == level)),
            _ => true,
        }
    }

    /// The "answered" predicate used both for advancing a session and for
    /// completeness: the shape must match, multi-choice sets must be
    /// non-empty, and free text must be non-blank.
    pub fn is_answered_by(&self, value: &AnswerValue) -> bool {
        if !self.accepts(value) {
            return false;
        }
        match (self.kind, value) {
            (QuestionKind::MultiChoice, AnswerValue::Set(selected)) => !selected.is_empty(),
            (QuestionKind::FreeText, AnswerValue::Text(text)) => !text.trim().is_empty(),
            _ => true,
        }
    }

    /// Position of a label among this question's options, used to render
    /// multi-choice selections in the order they were offered.
    pub fn option_position(&self, label: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| matches!(o, QuestionOption::Label(l) if l == label))
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.id == 0 {
            return Err(CoreError::InvalidQuestionId);
        }
        match self.kind {
            QuestionKind::FreeText => {
                if !self.options.is_empty() {
                    return Err(CoreError::UnexpectedOptions(self.id));
                }
            }
            kind => {
                if self.options.is_empty() {
                    return Err(CoreError::MissingOptions(self.id));
                }
                let fits = self.options.iter().all(|o| match (kind, o) {
                    (QuestionKind::Rating, QuestionOption::Level(_)) => true,
                    (QuestionKind::Rating, QuestionOption::Label(_)) => false,
                    (_, QuestionOption::Label(_)) => true,
                    (_, QuestionOption::Level(_)) => false,
                });
                if !fits {
                    return Err(CoreError::MismatchedOption {
                        question_id: self.id,
                        kind,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A fixed, versioned, ordered sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub id: String,
    pub version: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// Build a questionnaire, rejecting duplicate ids and malformed options.
    pub fn new(
        id: impl Into<String>,
        version: u32,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, CoreError> {
        let questionnaire = Self {
            id: id.into(),
            version,
            title: title.into(),
            questions,
        };
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    /// Parse a questionnaire from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let questionnaire: Questionnaire = serde_json::from_str(json)?;
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.questions.is_empty() {
            return Err(CoreError::EmptyQuestionnaire);
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            question.validate()?;
            if !seen.insert(question.id) {
                return Err(CoreError::DuplicateQuestion(question.id));
            }
        }
        Ok(())
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

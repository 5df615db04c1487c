use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::QuestionId;

/// The value given for a single question.
///
/// Serialized untagged: a JSON number is a rating, a string is a choice
/// or free text, an array is a multi-choice selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Integer(i32),
    Text(String),
    Set(BTreeSet<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Set(values.into_iter().map(Into::into).collect())
    }

    pub fn shape(&self) -> AnswerShape {
        match self {
            AnswerValue::Integer(_) => AnswerShape::Integer,
            AnswerValue::Text(_) => AnswerShape::Text,
            AnswerValue::Set(_) => AnswerShape::Set,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            AnswerValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            AnswerValue::Set(v) => Some(v),
            _ => None,
        }
    }
}

/// The structural shape of an [`AnswerValue`], used in schema errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerShape {
    Integer,
    Text,
    Set,
}

impl fmt::Display for AnswerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnswerShape::Integer => "integer",
            AnswerShape::Text => "text",
            AnswerShape::Set => "set",
        };
        f.write_str(name)
    }
}

/// A response to exactly one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: QuestionId, value: AnswerValue) -> Self {
        Self { question_id, value }
    }
}

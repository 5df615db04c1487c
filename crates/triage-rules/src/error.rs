use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use triage_core::models::answer::AnswerShape;
use triage_core::models::question::{QuestionId, QuestionKind};

/// The response set is missing an answer the questionnaire requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("question {question_id} has not been answered")]
pub struct ValidationError {
    pub question_id: QuestionId,
}

/// An answer does not fit the question it claims to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum SchemaError {
    #[error("answer recorded for unknown question {question_id}")]
    UnknownQuestion { question_id: QuestionId },

    #[error("{kind} question {question_id} expects a {expected} answer, got {found}")]
    ShapeMismatch {
        question_id: QuestionId,
        kind: QuestionKind,
        expected: AnswerShape,
        found: AnswerShape,
    },

    #[error("rating {value} is not on the scale offered by question {question_id}")]
    OutOfScale { question_id: QuestionId, value: i32 },
}

impl SchemaError {
    pub fn question_id(&self) -> QuestionId {
        match self {
            SchemaError::UnknownQuestion { question_id }
            | SchemaError::ShapeMismatch { question_id, .. }
            | SchemaError::OutOfScale { question_id, .. } => *question_id,
        }
    }
}

/// A rule table that cannot be evaluated against its questionnaire.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule table is empty")]
    Empty,

    #[error("last rule '{0}' is not an unconditional fallback")]
    MissingFallback(String),

    #[error("rule '{0}' can never match: an earlier rule always matches")]
    Unreachable(String),

    #[error("rule '{rule}' references unknown question {question_id}")]
    UnknownQuestion { rule: String, question_id: QuestionId },

    #[error("rule '{rule}' needs a {expected} question, but question {question_id} is {found}")]
    KindMismatch {
        rule: String,
        question_id: QuestionId,
        expected: QuestionKind,
        found: QuestionKind,
    },

    #[error("rule '{0}' recommends no actions")]
    NoActions(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("incomplete responses: {0}")]
    Validation(#[from] ValidationError),

    #[error("malformed answer: {0}")]
    Schema(#[from] SchemaError),

    #[error("no rule handles '{value}' for question {question_id}")]
    UnhandledCategory { question_id: QuestionId, value: String },

    #[error("invalid rule table: {0}")]
    Rules(#[from] RuleError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory found")]
    NoConfigDir,

    #[error("failed to read config at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("config is not a JSON object")]
    NotAnObject,
}

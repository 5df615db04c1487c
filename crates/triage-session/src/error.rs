use thiserror::Error;

use triage_core::models::question::{QuestionId, QuestionKind};
use triage_rules::error::{ClassifyError, SchemaError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown screening: {0}")]
    UnknownScreening(String),

    #[error("question {question_id} must be answered before advancing")]
    Unanswered { question_id: QuestionId },

    #[error("cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("question {question_id} is {kind}, not multi-choice")]
    NotMultiChoice {
        question_id: QuestionId,
        kind: QuestionKind,
    },

    #[error("question {question_id} does not offer '{option}'")]
    UnknownOption {
        question_id: QuestionId,
        option: String,
    },

    #[error("malformed answer: {0}")]
    Schema(#[from] SchemaError),

    #[error("classification failed: {0}")]
    Classify(#[from] ClassifyError),
}

#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingError(pub String);

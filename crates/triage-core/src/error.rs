use thiserror::Error;

use crate::models::question::{QuestionId, QuestionKind};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("question id must be positive")]
    InvalidQuestionId,

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("question {0} has no options")]
    MissingOptions(QuestionId),

    #[error("free-text question {0} must not declare options")]
    UnexpectedOptions(QuestionId),

    #[error("question {question_id} declares an option that does not fit kind {kind}")]
    MismatchedOption {
        question_id: QuestionId,
        kind: QuestionKind,
    },

    #[error("questionnaire has no questions")]
    EmptyQuestionnaire,
}

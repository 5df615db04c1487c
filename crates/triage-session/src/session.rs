use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;
use uuid::Uuid;

use triage_core::models::answer::{Answer, AnswerValue};
use triage_core::models::question::{Question, QuestionKind, Questionnaire};
use triage_core::models::recommendation::Recommendation;
use triage_core::models::record::ScreeningRecord;
use triage_core::models::response::{ResponseLine, ResponseSet};
use triage_rules::config::ClassifierConfig;
use triage_rules::classify::check_answer;
use triage_rules::{get_screening, Screening};

use crate::error::SessionError;
use crate::events::SessionEvent;

/// Where a screening session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    /// Showing the question at `index` (0-based).
    InProgress { index: usize },
    /// Every question has been answered and advanced past.
    Complete,
    /// The classifier has produced a recommendation.
    Resulted { recommendation: Recommendation },
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::InProgress { .. } => "in progress",
            SessionState::Complete => "complete",
            SessionState::Resulted { .. } => "resulted",
        }
    }
}

/// "Question `current` of `total`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percent: u8,
}

/// One user's pass through a screening questionnaire.
pub struct ScreeningSession {
    id: Uuid,
    screening: Box<dyn Screening>,
    config: ClassifierConfig,
    responses: ResponseSet,
    state: SessionState,
}

impl ScreeningSession {
    pub fn new(screening: Box<dyn Screening>, config: ClassifierConfig) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            screening,
            config,
            responses: ResponseSet::new(),
            state: SessionState::InProgress { index: 0 },
        };
        session.event("start").emit();
        session
    }

    /// Start a session for a registered screening.
    pub fn for_screening(id: &str, config: ClassifierConfig) -> Result<Self, SessionError> {
        let screening =
            get_screening(id).ok_or_else(|| SessionError::UnknownScreening(id.to_string()))?;
        Ok(Self::new(screening, config))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        self.screening.questionnaire()
    }

    /// The question being shown, if the session is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress { index } => self.questionnaire().questions.get(index),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<&AnswerValue> {
        let question = self.current_question()?;
        self.responses.get(question.id)
    }

    /// Whether the current question's answer allows moving on.
    pub fn can_advance(&self) -> bool {
        match (self.current_question(), self.current_answer()) {
            (Some(question), Some(value)) => question.is_answered_by(value),
            _ => false,
        }
    }

    /// Answer the current question, replacing any earlier answer.
    pub fn answer(&mut self, value: AnswerValue) -> Result<(), SessionError> {
        let question = self.in_progress_question("answer")?;
        check_answer(question, &value)?;
        let question_id = question.id;

        self.responses.record(Answer::new(question_id, value));
        self.event("answer").with_question(question_id).emit();
        Ok(())
    }

    /// Select or deselect `option` on the current multi-choice question.
    pub fn toggle(&mut self, option: &str) -> Result<(), SessionError> {
        let question = self.in_progress_question("toggle an option")?;
        if question.kind != QuestionKind::MultiChoice {
            return Err(SessionError::NotMultiChoice {
                question_id: question.id,
                kind: question.kind,
            });
        }
        if question.option_position(option).is_none() {
            return Err(SessionError::UnknownOption {
                question_id: question.id,
                option: option.to_string(),
            });
        }
        let question_id = question.id;

        self.responses.toggle(question_id, option);
        self.event("toggle")
            .with_question(question_id)
            .with_details(json!({ "option": option }))
            .emit();
        Ok(())
    }

    /// Move to the next question, or to `Complete` after the last one.
    /// The current question must be answered.
    pub fn next(&mut self) -> Result<&SessionState, SessionError> {
        let SessionState::InProgress { index } = self.state else {
            return Err(self.invalid("advance"));
        };
        let question = self.in_progress_question("advance")?;
        if !self.can_advance() {
            return Err(SessionError::Unanswered {
                question_id: question.id,
            });
        }
        let question_id = question.id;

        self.state = if index + 1 < self.questionnaire().len() {
            SessionState::InProgress { index: index + 1 }
        } else {
            SessionState::Complete
        };
        self.event("next").with_question(question_id).emit();
        Ok(&self.state)
    }

    /// Go back one question. Answers are kept.
    pub fn previous(&mut self) -> Result<&SessionState, SessionError> {
        self.state = match self.state {
            SessionState::InProgress { index } => SessionState::InProgress {
                index: index.saturating_sub(1),
            },
            SessionState::Complete => SessionState::InProgress {
                index: self.questionnaire().len().saturating_sub(1),
            },
            SessionState::Resulted { .. } => return Err(self.invalid("go back")),
        };
        self.event("previous").emit();
        Ok(&self.state)
    }

    /// Classify the collected answers.
    ///
    /// Incomplete answers surface the classifier's validation error and
    /// leave the session where it was. Once resulted, the stored
    /// recommendation is returned unchanged.
    pub fn classify(&mut self) -> Result<&Recommendation, SessionError> {
        if !matches!(self.state, SessionState::Resulted { .. }) {
            let recommendation = self.screening.classify(&self.responses, &self.config)?;
            self.event("classify")
                .with_details(json!({
                    "condition": recommendation.condition,
                    "department": recommendation.department,
                    "severity": recommendation.severity,
                    "confidence": recommendation.confidence,
                }))
                .emit();
            self.state = SessionState::Resulted { recommendation };
        }

        match &self.state {
            SessionState::Resulted { recommendation } => Ok(recommendation),
            other => Err(SessionError::InvalidTransition {
                action: "classify",
                state: other.name(),
            }),
        }
    }

    /// The recommendation, once classified.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.state {
            SessionState::Resulted { recommendation } => Some(recommendation),
            _ => None,
        }
    }

    /// Discard every answer and return to the first question.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.state = SessionState::InProgress { index: 0 };
        self.event("reset").emit();
    }

    /// Confirm a resulted screening, producing the record to store.
    pub fn confirm(&self) -> Result<ScreeningRecord, SessionError> {
        let SessionState::Resulted { recommendation } = &self.state else {
            return Err(self.invalid("confirm"));
        };
        let questionnaire = self.questionnaire();
        let record = ScreeningRecord {
            id: Uuid::new_v4(),
            questionnaire_id: questionnaire.id.clone(),
            questionnaire_version: questionnaire.version,
            answers: self.responses.to_answers(),
            recommendation: recommendation.clone(),
            completed_at: jiff::Timestamp::now(),
        };
        self.event("confirm")
            .with_details(json!({ "record_id": record.id }))
            .emit();
        Ok(record)
    }

    pub fn progress(&self) -> Progress {
        let total = self.questionnaire().len();
        let current = match self.state {
            SessionState::InProgress { index } => index + 1,
            _ => total,
        };
        let percent = if total == 0 {
            100
        } else {
            u8::try_from(current * 100 / total).unwrap_or(100)
        };
        Progress {
            current,
            total,
            percent,
        }
    }

    /// The answers so far, rendered for a results view.
    pub fn summary(&self) -> Vec<ResponseLine> {
        self.responses.summarize(self.questionnaire())
    }

    fn in_progress_question(&self, action: &'static str) -> Result<&Question, SessionError> {
        self.current_question().ok_or_else(|| self.invalid(action))
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }

    fn event(&self, action: &str) -> SessionEvent {
        SessionEvent::new(action, self.id, self.screening.id())
    }
}

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use triage_core::models::question::QuestionId;

/// A structured event describing one session transition.
///
/// Events are logged via `tracing`; whatever subscriber the host installs
/// decides where they end up.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub action: String,
    pub session_id: Uuid,
    pub screening_id: String,
    pub question_id: Option<QuestionId>,
    pub details: Option<serde_json::Value>,
}

impl SessionEvent {
    pub fn new(action: impl Into<String>, session_id: Uuid, screening_id: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            session_id,
            screening_id: screening_id.into(),
            question_id: None,
            details: None,
        }
    }

    pub fn with_question(mut self, question_id: QuestionId) -> Self {
        self.question_id = Some(question_id);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            session.action = %self.action,
            session.id = %self.session_id,
            session.screening = %self.screening_id,
            session.question = ?self.question_id,
            session.details = %details,
            "session event"
        );
    }
}

use tracing::{debug, warn};

use triage_core::models::answer::AnswerValue;
use triage_core::models::question::{Question, Questionnaire};
use triage_core::models::recommendation::Recommendation;
use triage_core::models::response::ResponseSet;

use crate::config::{ClassifierConfig, MatchMode};
use crate::error::{ClassifyError, RuleError, SchemaError, ValidationError};
use crate::rules::RuleTable;

/// Maps complete response sets to recommendations using a rule table.
///
/// Holds no mutable state: the same inputs always yield the same output,
/// and one classifier can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    rules: &'a RuleTable,
    config: &'a ClassifierConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a RuleTable, config: &'a ClassifierConfig) -> Self {
        Self { rules, config }
    }

    /// Classify `responses` against `questionnaire`.
    ///
    /// Fails with a [`SchemaError`] if any answer does not fit its
    /// question, then with a [`ValidationError`] naming the first
    /// unanswered question. Nothing is defaulted.
    pub fn classify(
        &self,
        responses: &ResponseSet,
        questionnaire: &Questionnaire,
    ) -> Result<Recommendation, ClassifyError> {
        self.rules.validate(questionnaire)?;
        check_schema(responses, questionnaire)?;

        if let Some(question_id) = responses.first_unanswered(questionnaire) {
            return Err(ValidationError { question_id }.into());
        }

        let rule = self.rules.first_match(responses).ok_or(RuleError::Empty)?;
        let fallback = rule.is_fallback();

        if fallback
            && self.config.match_mode == MatchMode::Strict
            && let Some((question_id, value)) =
                self.rules.unrecognized_choice(questionnaire, responses)
        {
            warn!(question_id, value = %value, "no rule handles answer");
            return Err(ClassifyError::UnhandledCategory { question_id, value });
        }

        let confidence = self
            .config
            .confidence
            .score(questionnaire, responses, fallback);

        debug!(
            rule = %rule.name,
            fallback,
            confidence,
            questionnaire = %questionnaire.id,
            "triage rule matched"
        );

        let template = &rule.then;
        Ok(Recommendation {
            condition: template.condition.clone(),
            department: template.department,
            severity: template.severity,
            confidence,
            actions: template.actions.clone(),
        })
    }
}

/// Check every recorded answer against the question it answers.
pub fn check_schema(
    responses: &ResponseSet,
    questionnaire: &Questionnaire,
) -> Result<(), SchemaError> {
    for (question_id, value) in responses.iter() {
        let question = questionnaire
            .question(question_id)
            .ok_or(SchemaError::UnknownQuestion { question_id })?;
        check_answer(question, value)?;
    }
    Ok(())
}

/// Check that `value` has the shape `question` expects and, for ratings,
/// lies on the offered scale.
pub fn check_answer(question: &Question, value: &AnswerValue) -> Result<(), SchemaError> {
    if !question.accepts(value) {
        return Err(SchemaError::ShapeMismatch {
            question_id: question.id,
            kind: question.kind,
            expected: question.kind.expected_shape(),
            found: value.shape(),
        });
    }
    if !question.offers(value)
        && let Some(level) = value.as_integer()
    {
        return Err(SchemaError::OutOfScale {
            question_id: question.id,
            value: level,
        });
    }
    Ok(())
}

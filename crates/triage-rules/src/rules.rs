//! Ordered, data-driven triage rules.
//!
//! A [`RuleTable`] is a list of `(predicate, recommendation template)`
//! pairs evaluated top to bottom; the first rule whose predicate holds
//! decides the recommendation. Tables serialize with serde, so adding a
//! condition or department is a data change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::question::{QuestionId, QuestionKind, Questionnaire};
use triage_core::models::recommendation::{Department, Severity};
use triage_core::models::response::ResponseSet;

use crate::error::RuleError;

/// A condition over a response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Predicate {
    /// Always holds. Used for the fallback rule.
    Always,
    /// A single-choice answer equals `value` exactly (case-sensitive).
    ChoiceIs { question: QuestionId, value: String },
    /// A rating answer is at least `threshold`.
    RatingAtLeast { question: QuestionId, threshold: i32 },
    /// Every inner predicate holds.
    All { predicates: Vec<Predicate> },
}

impl Predicate {
    pub fn holds(&self, responses: &ResponseSet) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::ChoiceIs { question, value } => responses
                .get(*question)
                .and_then(|a| a.as_text())
                .is_some_and(|answer| answer == value.as_str()),
            Predicate::RatingAtLeast {
                question,
                threshold,
            } => responses
                .get(*question)
                .and_then(|a| a.as_integer())
                .is_some_and(|level| level >= *threshold),
            Predicate::All { predicates } => predicates.iter().all(|p| p.holds(responses)),
        }
    }

    fn is_unconditional(&self) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::All { predicates } => predicates.iter().all(Predicate::is_unconditional),
            _ => false,
        }
    }

    /// Every `(question, value)` pair this predicate compares a choice against.
    fn choices(&self, out: &mut Vec<(QuestionId, String)>) {
        match self {
            Predicate::ChoiceIs { question, value } => out.push((*question, value.clone())),
            Predicate::All { predicates } => predicates.iter().for_each(|p| p.choices(out)),
            Predicate::Always | Predicate::RatingAtLeast { .. } => {}
        }
    }

    fn check(&self, rule: &str, questionnaire: &Questionnaire) -> Result<(), RuleError> {
        let (question_id, expected) = match self {
            Predicate::Always => return Ok(()),
            Predicate::All { predicates } => {
                for p in predicates {
                    p.check(rule, questionnaire)?;
                }
                return Ok(());
            }
            Predicate::ChoiceIs { question, .. } => (*question, QuestionKind::SingleChoice),
            Predicate::RatingAtLeast { question, .. } => (*question, QuestionKind::Rating),
        };

        let question =
            questionnaire
                .question(question_id)
                .ok_or_else(|| RuleError::UnknownQuestion {
                    rule: rule.to_string(),
                    question_id,
                })?;
        if question.kind != expected {
            return Err(RuleError::KindMismatch {
                rule: rule.to_string(),
                question_id,
                expected,
                found: question.kind,
            });
        }
        Ok(())
    }
}

/// What a matching rule recommends. Confidence is computed separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationTemplate {
    pub condition: String,
    pub department: Department,
    pub severity: Severity,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rule {
    pub name: String,
    pub when: Predicate,
    pub then: RecommendationTemplate,
}

impl Rule {
    pub fn new(name: impl Into<String>, when: Predicate, then: RecommendationTemplate) -> Self {
        Self {
            name: name.into(),
            when,
            then,
        }
    }

    /// A fallback rule matches unconditionally.
    pub fn is_fallback(&self) -> bool {
        self.when.is_unconditional()
    }
}

/// An ordered list of rules, evaluated first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a rule table from JSON and validate it against `questionnaire`.
    pub fn from_json(json: &str, questionnaire: &Questionnaire) -> Result<Self, RuleError> {
        let table: RuleTable = serde_json::from_str(json)?;
        table.validate(questionnaire)?;
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, RuleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every rule can be evaluated against `questionnaire` and
    /// that the table always produces a recommendation.
    pub fn validate(&self, questionnaire: &Questionnaire) -> Result<(), RuleError> {
        let last = self.rules.last().ok_or(RuleError::Empty)?;

        for (i, rule) in self.rules.iter().enumerate() {
            rule.when.check(&rule.name, questionnaire)?;
            if rule.then.actions.is_empty() {
                return Err(RuleError::NoActions(rule.name.clone()));
            }
            if rule.is_fallback() && i + 1 < self.rules.len() {
                return Err(RuleError::Unreachable(self.rules[i + 1].name.clone()));
            }
        }

        if !last.is_fallback() {
            return Err(RuleError::MissingFallback(last.name.clone()));
        }
        Ok(())
    }

    /// The first rule whose predicate holds.
    pub fn first_match(&self, responses: &ResponseSet) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.when.holds(responses))
    }

    /// The first choice question whose answer is not named by any rule,
    /// together with that answer.
    pub fn unrecognized_choice(
        &self,
        questionnaire: &Questionnaire,
        responses: &ResponseSet,
    ) -> Option<(QuestionId, String)> {
        let mut known = Vec::new();
        for rule in &self.rules {
            rule.when.choices(&mut known);
        }

        questionnaire
            .questions
            .iter()
            .filter(|q| known.iter().any(|(id, _)| *id == q.id))
            .find_map(|q| {
                let answer = responses.get(q.id)?.as_text()?;
                let recognized = known
                    .iter()
                    .any(|(id, value)| *id == q.id && value == answer);
                (!recognized).then(|| (q.id, answer.to_string()))
            })
    }
}

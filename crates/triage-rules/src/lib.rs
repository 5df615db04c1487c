//! triage-rules
//!
//! The triage classifier: ordered rule tables, confidence policies, and
//! the built-in screenings. Pure computation; no I/O outside the config
//! file helpers.

pub mod classify;
pub mod confidence;
pub mod config;
pub mod error;
pub mod rules;
pub mod screenings;

use classify::Classifier;
use config::ClassifierConfig;
use error::ClassifyError;
use rules::RuleTable;
use triage_core::models::question::Questionnaire;
use triage_core::models::recommendation::Recommendation;
use triage_core::models::response::ResponseSet;

/// Trait implemented by each screening: a questionnaire paired with the
/// rules that triage its answers.
pub trait Screening: Send + Sync {
    /// Unique identifier for this screening (e.g., "back_pain").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    fn questionnaire(&self) -> &Questionnaire;

    fn rules(&self) -> &RuleTable;

    /// Classify a response set collected for this screening.
    fn classify(
        &self,
        responses: &ResponseSet,
        config: &ClassifierConfig,
    ) -> Result<Recommendation, ClassifyError> {
        Classifier::new(self.rules(), config).classify(responses, self.questionnaire())
    }

    /// Format answers as structured text for downstream report generation.
    fn to_structured_input(&self, responses: &ResponseSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for line in responses.summarize(self.questionnaire()) {
            output.push_str(&format!("- {}: {}\n", line.prompt, line.answer));
        }
        output
    }
}

/// Return all registered screenings.
pub fn all_screenings() -> Vec<Box<dyn Screening>> {
    vec![Box::new(screenings::back_pain::BackPain)]
}

/// Look up a screening by ID.
pub fn get_screening(id: &str) -> Option<Box<dyn Screening>> {
    all_screenings().into_iter().find(|s| s.id() == id)
}

/// Classify with the back-pain rule table and the default configuration.
pub fn classify(
    responses: &ResponseSet,
    questionnaire: &Questionnaire,
) -> Result<Recommendation, ClassifyError> {
    let config = ClassifierConfig::default();
    Classifier::new(screenings::back_pain::rule_table(), &config).classify(responses, questionnaire)
}

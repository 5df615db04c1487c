//! Scripted back-pain screening.
//!
//! Loads the classifier config (defaults if none is saved), answers every
//! question, and prints the recommendation and confirmed record as JSON.
//!
//! Run with: `RUST_LOG=debug cargo run -p triage-session --example walkthrough`

use triage_core::models::answer::AnswerValue;
use triage_core::models::recommendation::DISCLAIMER;
use triage_rules::config::{default_config_path, load_or_default};
use triage_session::logging::{init_logging, LogFormat};
use triage_session::session::ScreeningSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LogFormat::Pretty)?;

    let config = load_or_default(&default_config_path()?)?;
    let mut session = ScreeningSession::for_screening("back_pain", config)?;

    session.answer(AnswerValue::Integer(4))?;
    session.next()?;
    session.answer(AnswerValue::text("Lower back"))?;
    session.next()?;
    session.answer(AnswerValue::text("1-3 months"))?;
    session.next()?;
    session.toggle("Lifting")?;
    session.toggle("Bending")?;
    session.next()?;
    session.toggle("Numbness")?;
    session.next()?;
    session.answer(AnswerValue::text("Yes, more than a year ago"))?;
    session.next()?;
    session.answer(AnswerValue::text("Worse after gardening"))?;
    session.next()?;

    for line in session.summary() {
        println!("{}: {}", line.prompt, line.answer);
    }

    let recommendation = session.classify()?;
    println!("{}", serde_json::to_string_pretty(recommendation)?);
    println!("{DISCLAIMER}");

    let record = session.confirm()?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

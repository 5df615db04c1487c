//! triage-core
//!
//! Pure domain types for symptom screening: questions, answers, response
//! sets, and the recommendation produced by triage. No rules live here;
//! this is the shared vocabulary of the triage crates.

pub mod error;
pub mod models;

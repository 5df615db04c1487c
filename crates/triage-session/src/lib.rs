//! triage-session
//!
//! The screening session state machine: walks a user through a
//! questionnaire one question at a time, hands the completed response set
//! to the classifier, and emits structured events for every transition.

pub mod error;
pub mod events;
pub mod logging;
pub mod session;

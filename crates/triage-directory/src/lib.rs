//! triage-directory
//!
//! Read-only clinician directory used to turn a recommendation into
//! concrete referrals. The directory is injected; nothing here holds
//! global state.

pub mod clinician;
pub mod directory;
pub mod error;
pub mod referral;

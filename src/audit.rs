//! The eligibility audit engine.
//!
//! Combines the per-run satisfaction tracker with the tiered rule table to
//! produce one [`AuditResult`] per `(student, term)`.

mod engine;
pub use engine::{
    AuditFlag, AuditResult, SatisfactionFlags, Severity, StudentSlice, run_audit, run_batch_audit,
};

/// The tiered eligibility rule table.
pub mod rules;
pub use rules::{FULL_TIME_CREDITS, TERM_CREDIT_MIN, Thresholds, thresholds};

mod tracker;
pub use tracker::SatisfactionTracker;

//! NCAA-style academic eligibility auditing.
//!
//! Audits college-athlete academic progress against tiered GPA, credit-load,
//! and degree-progress rules. Degree requirements arrive as a structural
//! event stream scraped from catalog documents; the crate builds a
//! requirement tree from it, assigns each passed course to at most one
//! outstanding requirement, and evaluates the rule table term by term.

pub mod domain;
pub use domain::{
    Course, CourseId, EnrollmentRecord, GradePoints, Major, NodeKind, RequirementNode, TermCode,
};

/// Requirement-document parsing.
pub mod catalog;
pub use catalog::{BuildError, CatalogEvent, CreditBias, build_requirement_forest};

/// The audit engine and rule table.
pub mod audit;
pub use audit::{
    AuditFlag, AuditResult, SatisfactionTracker, StudentSlice, run_audit, run_batch_audit,
};

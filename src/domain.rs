//! Domain models for eligibility auditing.
//!
//! This module contains the shared data model: courses, majors, requirement
//! nodes, enrollment records, letter grades, and term codes.

/// Course identity and catalog attributes.
pub mod course;
pub use course::{Course, CourseId};

/// Letter grades and grade-point resolution.
pub mod grade;
pub use grade::{GradePoints, counts_as_passed};

mod major;
pub use major::Major;

/// Requirement tree nodes.
pub mod requirement;
pub use requirement::{NodeKind, RequirementNode};

mod enrollment;
pub use enrollment::EnrollmentRecord;

/// Term codes and academic-year windows.
pub mod term;
pub use term::{Season, TermCode};

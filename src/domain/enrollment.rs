use serde::{Deserialize, Serialize};

use super::{course::CourseId, term::TermCode};

/// One enrollment row: a student taking a course in a term.
///
/// Records are produced by a bulk import and never mutated. The audit engine
/// assumes at most one row per `(student, term, course)` — deduplication is
/// the importer's responsibility, not defended here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// The student who took the course.
    pub student_id: u64,
    /// The term the course was taken in.
    pub term: TermCode,
    /// The course taken.
    pub course: CourseId,
    /// Raw letter grade as recorded by the registrar.
    pub grade: String,
    /// Credits attempted.
    pub credits: u32,
    /// Institution the course was taken at.
    pub institution: String,
}

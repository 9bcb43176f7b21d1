use std::fmt;

use serde::{Deserialize, Serialize};

/// The stable identifier of a course: subject and number concatenated.
///
/// `CourseId::new("KIN", "3050")` produces `KIN-3050`. Two courses with the
/// same subject and number are the same course regardless of which catalog
/// listing or enrollment row they were first seen in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Builds the identifier from a subject code and course number.
    #[must_use]
    pub fn new(subject: &str, number: &str) -> Self {
        Self(format!("{subject}-{number}"))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog course.
///
/// Courses are created lazily the first time they appear, either in a
/// requirement listing or in an enrollment import, and are immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable identifier derived from subject and number.
    pub id: CourseId,
    /// Subject code, e.g. `KIN`.
    pub subject: String,
    /// Course number, e.g. `3050`.
    pub number: String,
    /// Display name from the catalog listing.
    pub name: String,
    /// Nominal credit count.
    pub credits: u32,
}

impl Course {
    /// Creates a course, deriving its identifier from subject and number.
    #[must_use]
    pub fn new(subject: &str, number: &str, name: &str, credits: u32) -> Self {
        Self {
            id: CourseId::new(subject, number),
            subject: subject.to_string(),
            number: number.to_string(),
            name: name.to_string(),
            credits,
        }
    }
}

//! Letter grades and their grade-point values.
//!
//! The registrar's grade scheme has three families: plain letter grades,
//! transfer grades (`T` prefix, same points), and repeated-course grades
//! (`*` suffix, excluded from GPA except `F*`). The pass/no-pass, withdraw,
//! incomplete, and audit grades carry no grade points at all.

/// The GPA contribution of a letter grade.
///
/// `Excluded` means the grade affects neither the GPA numerator nor the
/// denominator. This replaces the ambiguous "points or null" convention:
/// every grade string maps to exactly one of these two cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradePoints {
    /// The grade carries this many points per credit.
    Numeric(f64),
    /// The grade has no GPA impact.
    Excluded,
}

impl GradePoints {
    /// Resolves a raw grade string to its grade-point value.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// Unrecognized grades are excluded rather than rejected: an unfamiliar
    /// registrar code must never abort an audit.
    #[must_use]
    pub fn of(grade: &str) -> Self {
        let normalized = grade.trim().to_uppercase();

        // Repeated-course grades: only a repeated F still drags the GPA.
        if let Some(stripped) = normalized.strip_suffix('*') {
            return if stripped == "F" {
                Self::Numeric(0.0)
            } else {
                Self::Excluded
            };
        }

        match normalized.as_str() {
            "P" | "W" | "I" | "AU" => return Self::Excluded,
            "NP" => return Self::Numeric(0.0),
            _ => {}
        }

        // Transfer grades score identically to their base letter.
        let letter = normalized.strip_prefix('T').unwrap_or(&normalized);
        letter_points(letter).map_or(Self::Excluded, Self::Numeric)
    }

    /// The numeric value, if the grade contributes to GPA.
    #[must_use]
    pub const fn points(self) -> Option<f64> {
        match self {
            Self::Numeric(points) => Some(points),
            Self::Excluded => None,
        }
    }
}

/// Whether a grade counts as passing for credit-accumulation purposes.
///
/// A grade passes only when it has a defined grade-point value of at least
/// 2.0; excluded grades never pass.
#[must_use]
pub fn counts_as_passed(grade: &str) -> bool {
    matches!(GradePoints::of(grade), GradePoints::Numeric(points) if points >= 2.0)
}

fn letter_points(letter: &str) -> Option<f64> {
    match letter {
        "A" => Some(4.0),
        "A-" => Some(3.7),
        "B+" => Some(3.3),
        "B" => Some(3.0),
        "B-" => Some(2.7),
        "C+" => Some(2.3),
        "C" => Some(2.0),
        "C-" => Some(1.7),
        "D+" => Some(1.3),
        "D" => Some(1.0),
        "D-" => Some(0.7),
        "F" => Some(0.0),
        _ => None,
    }
}

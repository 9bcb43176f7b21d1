//! Course listing-line parsing.
//!
//! A single listing line names one course, or several alternatives joined by
//! `" or "` that each independently fill the same slot:
//!
//! ```text
//! ENGL 2010 - Intermediate Writing 3 Credit(s)
//! MATH 1050 - College Algebra or MATH 1080 - Pre-Calculus 4 Credit(s)
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::credit::{CreditBias, parse_credits};
use crate::domain::Course;

static CREDIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+\d+\s+credit\(s\)").expect("valid regex"));
static COURSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+(\d+)\s+-\s+(.+)").expect("valid regex"));

/// Parses one listing line into zero or more courses.
///
/// The line is split on the literal `" or "` separator; each resulting
/// option is stripped of its trailing `<n> Credit(s)` suffix and matched
/// against the `SUBJECT NUMBER - NAME` pattern. Options that don't match are
/// informational rows, not courses, and are dropped.
///
/// All options on one line share the single credit amount stated on the
/// undivided line; a line with no recognizable credit text yields courses
/// with zero credits.
#[must_use]
pub fn parse_course_line(text: &str) -> Vec<Course> {
    let credits = parse_credits(text, CreditBias::Min).unwrap_or(0);

    text.split(" or ")
        .filter_map(|option| {
            let option = CREDIT_SUFFIX.replace_all(option, "");
            let Some(captures) = COURSE.captures(option.trim()) else {
                debug!(option = %option.trim(), "dropping non-course listing text");
                return None;
            };
            Some(Course::new(
                &captures[1],
                &captures[2],
                captures[3].trim(),
                credits,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_course() {
        let courses = parse_course_line("ENGL 2010 - Intermediate Writing 3 Credit(s)");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].subject, "ENGL");
        assert_eq!(courses[0].number, "2010");
        assert_eq!(courses[0].name, "Intermediate Writing");
        assert_eq!(courses[0].credits, 3);
    }

    #[test]
    fn splits_alternatives_sharing_one_credit_amount() {
        let courses = parse_course_line(
            "MATH 1050 - College Algebra or MATH 1080 - Pre-Calculus 4 Credit(s)",
        );
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id.as_str(), "MATH-1050");
        assert_eq!(courses[1].id.as_str(), "MATH-1080");
        assert_eq!(courses[0].credits, 4);
        assert_eq!(courses[1].credits, 4);
    }

    #[test]
    fn drops_informational_rows() {
        assert!(parse_course_line("Complete the following:").is_empty());
        assert!(parse_course_line("See your advisor for placement").is_empty());
    }

    #[test]
    fn missing_credit_text_defaults_to_zero() {
        let courses = parse_course_line("HONR 1000 - Honors Orientation");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].credits, 0);
    }
}

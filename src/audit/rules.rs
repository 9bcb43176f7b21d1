//! The tiered eligibility rule table.
//!
//! Thresholds escalate with the number of full-time terms a student has
//! accumulated. The table is plain ordered data evaluated by range lookup —
//! no registration side effects.

/// Credits attempted in one term for it to count as full-time.
pub const FULL_TIME_CREDITS: u32 = 12;

/// Minimum credits that must be completed in the audited term, every tier.
pub const TERM_CREDIT_MIN: u32 = 6;

/// The thresholds applying to one full-time term index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum cumulative GPA.
    pub gpa_min: f64,
    /// Percent-toward-completion the student must *exceed*, when this term
    /// is a checkpoint term.
    pub ptc_checkpoint: Option<f64>,
    /// Minimum credits completed in the audited term alone.
    pub term_credit_min: u32,
    /// Minimum credits completed across the academic-year window, when
    /// constrained.
    pub year_credit_min: Option<u32>,
}

/// One row of the tier table: an inclusive full-time-term range and the
/// thresholds that hold across it.
struct Tier {
    first: u32,
    last: u32,
    gpa_min: f64,
    year_credit_min: Option<u32>,
}

/// The tier table, ordered by term range. Term 1 carries no academic-year
/// constraint because no prior year exists to measure.
const TIERS: [Tier; 4] = [
    Tier {
        first: 1,
        last: 1,
        gpa_min: 1.8,
        year_credit_min: None,
    },
    Tier {
        first: 2,
        last: 2,
        gpa_min: 1.8,
        year_credit_min: Some(24),
    },
    Tier {
        first: 3,
        last: 4,
        gpa_min: 1.9,
        year_credit_min: Some(18),
    },
    Tier {
        first: 5,
        last: u32::MAX,
        gpa_min: 2.0,
        year_credit_min: Some(18),
    },
];

/// Looks up the thresholds for a 1-based full-time term index.
///
/// An index of zero (student not yet full-time) clamps to the first tier.
/// Percent-toward-completion checkpoints apply only at the exact milestone
/// terms 4 (> 40%), 6 (> 60%), and 8 (> 80%); every other term passes that
/// dimension trivially — the table is a step function, not a continuous one.
#[must_use]
pub fn thresholds(full_time_term_index: u32) -> Thresholds {
    let index = full_time_term_index.max(1);
    let tier = TIERS
        .iter()
        .find(|tier| tier.first <= index && index <= tier.last)
        .expect("tier table covers all indices");

    Thresholds {
        gpa_min: tier.gpa_min,
        ptc_checkpoint: ptc_checkpoint(index),
        term_credit_min: TERM_CREDIT_MIN,
        year_credit_min: tier.year_credit_min,
    }
}

const fn ptc_checkpoint(full_time_term_index: u32) -> Option<f64> {
    match full_time_term_index {
        4 => Some(40.0),
        6 => Some(60.0),
        8 => Some(80.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(left: f64, right: f64) {
        assert!((left - right).abs() < f64::EPSILON, "{left} != {right}");
    }

    #[test]
    fn gpa_floor_escalates() {
        assert_close(thresholds(1).gpa_min, 1.8);
        assert_close(thresholds(2).gpa_min, 1.8);
        assert_close(thresholds(3).gpa_min, 1.9);
        assert_close(thresholds(4).gpa_min, 1.9);
        assert_close(thresholds(5).gpa_min, 2.0);
        assert_close(thresholds(10).gpa_min, 2.0);
    }

    #[test]
    fn ptc_checkpoints_only_at_milestone_terms() {
        for index in [1, 2, 3, 5, 7, 9, 12] {
            assert_eq!(thresholds(index).ptc_checkpoint, None, "term {index}");
        }
        assert_close(thresholds(4).ptc_checkpoint.unwrap(), 40.0);
        assert_close(thresholds(6).ptc_checkpoint.unwrap(), 60.0);
        assert_close(thresholds(8).ptc_checkpoint.unwrap(), 80.0);
    }

    #[test]
    fn year_credit_minimums() {
        assert_eq!(thresholds(1).year_credit_min, None);
        assert_eq!(thresholds(2).year_credit_min, Some(24));
        assert_eq!(thresholds(3).year_credit_min, Some(18));
        assert_eq!(thresholds(6).year_credit_min, Some(18));
    }

    #[test]
    fn term_credit_minimum_is_constant() {
        for index in 1..12 {
            assert_eq!(thresholds(index).term_credit_min, 6);
        }
    }

    #[test]
    fn index_zero_clamps_to_first_tier() {
        assert_eq!(thresholds(0), thresholds(1));
    }
}

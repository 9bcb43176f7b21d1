//! The audit engine: one pass over a student's record, one verdict per term.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{
    rules::{self, FULL_TIME_CREDITS, Thresholds},
    tracker::SatisfactionTracker,
};
use crate::domain::{EnrollmentRecord, GradePoints, Major, TermCode, counts_as_passed};

/// How serious an advisory flag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational only.
    Info,
    /// Worth a human look; the audit is still meaningful.
    Warning,
    /// The audit could not be computed meaningfully.
    Error,
}

/// A non-fatal advisory attached to an audit result.
///
/// Flags never abort an audit or a batch; they record anomalies a reviewer
/// should know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFlag {
    /// Stable machine-readable code, e.g. `missing_major`.
    pub code: String,
    /// How serious the anomaly is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl AuditFlag {
    /// Creates an error-severity flag.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a warning-severity flag.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// One boolean per rule-table dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SatisfactionFlags {
    /// Cumulative GPA meets the tier's floor.
    pub gpa: bool,
    /// Percent-toward-completion exceeds the checkpoint, if this is a
    /// checkpoint term.
    pub ptc: bool,
    /// Credits completed in the audited term meet the minimum.
    pub term_credits: bool,
    /// Credits completed in the academic-year window meet the minimum, if
    /// constrained.
    pub year_credits: bool,
}

impl SatisfactionFlags {
    /// Evaluates all four dimensions against a tier's thresholds.
    ///
    /// The PTC checkpoint is strict (`>`); absent checkpoints and absent
    /// year minimums pass trivially.
    #[must_use]
    pub fn evaluate(
        thresholds: &Thresholds,
        gpa: f64,
        ptc: f64,
        term_credits: u32,
        year_credits: u32,
    ) -> Self {
        Self {
            gpa: gpa >= thresholds.gpa_min,
            ptc: thresholds
                .ptc_checkpoint
                .is_none_or(|checkpoint| ptc > checkpoint),
            term_credits: term_credits >= thresholds.term_credit_min,
            year_credits: thresholds
                .year_credit_min
                .is_none_or(|minimum| year_credits >= minimum),
        }
    }

    /// Whether every dimension is satisfied.
    #[must_use]
    pub const fn all(self) -> bool {
        self.gpa && self.ptc && self.term_credits && self.year_credits
    }
}

/// The verdict and metrics for one `(student, term)` audit.
///
/// Recomputed idempotently: equality deliberately ignores `generated_at`,
/// so two runs over identical inputs compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    /// The audited student.
    pub student_id: u64,
    /// The audited term.
    pub term: TermCode,
    /// 1-based count of the student's full-time terms through the audited
    /// term; 0 when the student has never been full-time.
    pub full_time_term_index: u32,
    /// Credits completed in the audited term, on the tier's basis (plain
    /// passed credits below full-time term 5, degree-applicable from term 5
    /// on).
    pub term_credits: u32,
    /// Cumulative degree-applicable credits.
    pub da_credits: u32,
    /// Passed credits inside the academic-year window containing the term.
    pub academic_year_credits: u32,
    /// Percent toward completion, rounded to two decimals.
    pub ptc: f64,
    /// Cumulative GPA over graded courses, rounded to two decimals.
    pub gpa: f64,
    /// Per-dimension satisfaction flags.
    pub satisfied: SatisfactionFlags,
    /// Overall verdict: the conjunction of all four flags.
    pub eligible: bool,
    /// Advisory flags for anomalies encountered during the run.
    pub flags: Vec<AuditFlag>,
    /// When this result was produced. Excluded from equality.
    pub generated_at: DateTime<Utc>,
}

impl PartialEq for AuditResult {
    fn eq(&self, other: &Self) -> bool {
        self.student_id == other.student_id
            && self.term == other.term
            && self.full_time_term_index == other.full_time_term_index
            && self.term_credits == other.term_credits
            && self.da_credits == other.da_credits
            && self.academic_year_credits == other.academic_year_credits
            && self.ptc.to_bits() == other.ptc.to_bits()
            && self.gpa.to_bits() == other.gpa.to_bits()
            && self.satisfied == other.satisfied
            && self.eligible == other.eligible
            && self.flags == other.flags
    }
}

/// One student's input to a batch audit: their resolved major (if any) and
/// their full enrollment slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSlice {
    /// The student.
    pub student_id: u64,
    /// The student's currently declared major, already resolved by the
    /// caller. `None` when nothing is on file.
    #[serde(default)]
    pub major: Option<Major>,
    /// Every enrollment row for the student.
    pub records: Vec<EnrollmentRecord>,
}

/// Audits one student for one term.
///
/// A pure function of its inputs: calling it twice with identical inputs
/// yields equal results (timestamps aside). Records may arrive in any
/// order; the engine sorts them by term before feeding the satisfaction
/// tracker, since first-match assignment is order-sensitive.
#[instrument(skip(major, records), fields(term = %term))]
#[must_use]
pub fn run_audit(
    student_id: u64,
    term: TermCode,
    major: Option<&Major>,
    records: &[EnrollmentRecord],
) -> AuditResult {
    let Some(major) = major else {
        debug!(student_id, "no major on file");
        return missing_major_result(student_id, term);
    };

    let mut ordered: Vec<&EnrollmentRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.term);

    let mut flags = Vec::new();

    // Attempted (not just passed) credits per term, for full-time detection.
    let mut attempted: BTreeMap<TermCode, u32> = BTreeMap::new();
    for record in &ordered {
        *attempted.entry(record.term).or_default() += record.credits;
    }

    let first_full_time = attempted
        .iter()
        .find(|&(_, &credits)| credits >= FULL_TIME_CREDITS)
        .map(|(&t, _)| t);
    let full_time_term_index = first_full_time.map_or(0, |first| {
        let count = attempted
            .iter()
            .filter(|&(&t, &credits)| t >= first && t <= term && credits >= FULL_TIME_CREDITS)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    });

    if !ordered.is_empty() && full_time_term_index == 0 {
        flags.push(AuditFlag::warning(
            "no_full_time_term",
            "student has never carried a full-time credit load",
        ));
    }
    if attempted.len() == 1 {
        flags.push(AuditFlag::warning(
            "partial_history",
            "only one enrolled term on file",
        ));
    }

    // One sequential pass in term order: first-match requirement
    // assignment, degree-applicable accumulation, and term/year tallies.
    let mut tracker = SatisfactionTracker::new(&major.requirements);
    let mut da_credits = 0;
    let mut da_term_credits = 0;
    let mut passed_term_credits = 0;
    let mut academic_year_credits = 0;
    for record in &ordered {
        if !counts_as_passed(&record.grade) {
            continue;
        }
        if record.term == term {
            passed_term_credits += record.credits;
        }
        if record.term.same_academic_year(term) {
            academic_year_credits += record.credits;
        }
        if tracker.attempt_satisfy(&record.course, record.credits) {
            da_credits += record.credits;
            if record.term == term {
                da_term_credits += record.credits;
            }
        }
    }

    let gpa = cumulative_gpa(&ordered);
    let ptc = if major.total_credits_required == 0 {
        0.0
    } else {
        round2(f64::from(da_credits) / f64::from(major.total_credits_required) * 100.0)
    };

    let thresholds = rules::thresholds(full_time_term_index);
    let term_credits = if full_time_term_index.max(1) < 5 {
        passed_term_credits
    } else {
        da_term_credits
    };

    let satisfied =
        SatisfactionFlags::evaluate(&thresholds, gpa, ptc, term_credits, academic_year_credits);
    let eligible = satisfied.all();

    debug!(
        full_time_term_index,
        da_credits,
        gpa,
        ptc,
        eligible,
        completed_nodes = tracker.completed_nodes(),
        "audit complete"
    );

    AuditResult {
        student_id,
        term,
        full_time_term_index,
        term_credits,
        da_credits,
        academic_year_credits,
        ptc,
        gpa,
        satisfied,
        eligible,
        flags,
        generated_at: Utc::now(),
    }
}

/// Audits every student with at least one enrollment row in the given term.
///
/// Students with no rows in the term are excluded, not errored. Audits are
/// independent, so the batch fans out across rayon's worker pool; results
/// come back in input order.
#[instrument(skip(students), fields(term = %term, students = students.len()))]
#[must_use]
pub fn run_batch_audit(term: TermCode, students: &[StudentSlice]) -> Vec<AuditResult> {
    let results: Vec<AuditResult> = students
        .par_iter()
        .filter(|student| student.records.iter().any(|record| record.term == term))
        .map(|student| {
            run_audit(
                student.student_id,
                term,
                student.major.as_ref(),
                &student.records,
            )
        })
        .collect();

    info!(
        audited = results.len(),
        eligible = results.iter().filter(|result| result.eligible).count(),
        "batch audit complete"
    );
    results
}

/// A zero-valued result for a student with no major on file.
fn missing_major_result(student_id: u64, term: TermCode) -> AuditResult {
    AuditResult {
        student_id,
        term,
        full_time_term_index: 0,
        term_credits: 0,
        da_credits: 0,
        academic_year_credits: 0,
        ptc: 0.0,
        gpa: 0.0,
        satisfied: SatisfactionFlags::default(),
        eligible: false,
        flags: vec![AuditFlag::error(
            "missing_major",
            "student has no majors on file",
        )],
        generated_at: Utc::now(),
    }
}

/// GPA over every graded course with a defined grade-point value.
///
/// Pass/fail, withdraw, incomplete, and audit grades contribute to neither
/// numerator nor denominator. Zero graded credits yields 0.0.
fn cumulative_gpa(records: &[&EnrollmentRecord]) -> f64 {
    let mut points = 0.0;
    let mut credits = 0u32;
    for record in records {
        if let Some(value) = GradePoints::of(&record.grade).points() {
            points += value * f64::from(record.credits);
            credits += record.credits;
        }
    }
    if credits == 0 {
        0.0
    } else {
        round2(points / f64::from(credits))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

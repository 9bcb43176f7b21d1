//! This bench simulates a full batch audit over a roster of students sharing
//! one moderately sized requirement tree.

#![allow(missing_docs)]

use athaudit::{
    Course, CourseId, EnrollmentRecord, Major, RequirementNode, StudentSlice, TermCode,
    run_batch_audit,
};
use criterion::{Criterion, criterion_group, criterion_main};

fn synthetic_major() -> Major {
    let mut requirements = Vec::new();
    for group in 0..10 {
        let mut node = RequirementNode::new(format!("Group {group}"));
        node.required_credits = Some(15);
        node.courses = (0..10)
            .map(|index| Course::new("KIN", &(1000 + group * 10 + index).to_string(), "", 3))
            .collect();
        requirements.push(node);
    }

    Major {
        major_code: "EXSC".to_string(),
        catalog_year: 202_430,
        base_major_code: None,
        name_registrar: "Exercise Science".to_string(),
        name_web: "Exercise Science (B.S.)".to_string(),
        total_credits_required: 120,
        requirements,
    }
}

fn synthetic_roster(major: &Major, students: u64) -> Vec<StudentSlice> {
    let terms = [202_310, 202_320, 202_330, 202_410, 202_420];
    (0..students)
        .map(|student_id| {
            let mut records = Vec::new();
            for (term_index, term) in (0u64..).zip(terms.iter()) {
                for slot in 0..4u64 {
                    let number = 1000 + (student_id + slot * 7 + term_index * 13) % 100;
                    records.push(EnrollmentRecord {
                        student_id,
                        term: TermCode::new(*term),
                        course: CourseId::new("KIN", &number.to_string()),
                        grade: "B".to_string(),
                        credits: 3,
                        institution: "SUU".to_string(),
                    });
                }
            }
            StudentSlice {
                student_id,
                major: Some(major.clone()),
                records,
            }
        })
        .collect()
}

fn batch_audit(c: &mut Criterion) {
    let major = synthetic_major();
    let roster = synthetic_roster(&major, 500);
    let term = TermCode::new(202_420);

    c.bench_function("batch audit 500 students", |b| {
        b.iter(|| run_batch_audit(term, &roster));
    });
}

criterion_group!(benches, batch_audit);
criterion_main!(benches);

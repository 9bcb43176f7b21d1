//! Per-audit requirement satisfaction tracking.
//!
//! The requirement tree is shared and read-only; all mutable completion
//! state for one audit run lives here, in a flat arena built fresh for each
//! student. Dropping the tracker drops every trace of the run.

use std::collections::HashSet;

use crate::domain::{CourseId, RequirementNode};

/// Mutable state for one satisfiable requirement node.
struct Slot<'tree> {
    node: &'tree RequirementNode,
    /// Attached-course membership, precomputed for the scan loop.
    courses: HashSet<&'tree CourseId>,
    required: u32,
    accumulated: u32,
    complete: bool,
}

/// Assigns passed courses to outstanding requirement nodes, at most once
/// per course instance.
///
/// Nodes are scanned in pre-order (parent before children, left-to-right
/// siblings) and the first incomplete node listing the course wins. Because
/// a course is consumed by the first match, it can never be double-counted
/// when it appears under several groups. Completion is terminal: a node
/// that reaches its required credits never re-opens. Nodes whose required
/// credits are unresolved are skipped entirely — they can never be
/// satisfied.
///
/// First-match-wins makes the outcome sensitive to processing order;
/// callers must feed courses in non-decreasing term order.
pub struct SatisfactionTracker<'tree> {
    slots: Vec<Slot<'tree>>,
}

impl<'tree> SatisfactionTracker<'tree> {
    /// Builds a fresh tracker over a requirement forest.
    #[must_use]
    pub fn new(forest: &'tree [RequirementNode]) -> Self {
        let slots = forest
            .iter()
            .flat_map(RequirementNode::preorder)
            .filter_map(|node| {
                let required = node.required_credits?;
                Some(Slot {
                    node,
                    courses: node.courses.iter().map(|course| &course.id).collect(),
                    required,
                    accumulated: 0,
                    complete: false,
                })
            })
            .collect();
        Self { slots }
    }

    /// Offers a passed course to the first outstanding node that lists it.
    ///
    /// Credits the node with `credits` and reports whether any node
    /// accepted the course; a `false` return means the course is not
    /// degree-applicable for this major.
    pub fn attempt_satisfy(&mut self, course: &CourseId, credits: u32) -> bool {
        for slot in &mut self.slots {
            if slot.complete || !slot.courses.contains(course) {
                continue;
            }
            slot.accumulated += credits;
            if slot.accumulated >= slot.required {
                slot.complete = true;
            }
            return true;
        }
        false
    }

    /// The number of nodes that have reached their required credits.
    #[must_use]
    pub fn completed_nodes(&self) -> usize {
        self.slots.iter().filter(|slot| slot.complete).count()
    }

    /// The names of nodes still outstanding, in scan order.
    pub fn outstanding(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|slot| !slot.complete)
            .map(|slot| slot.node.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, NodeKind};

    fn node(name: &str, required: Option<u32>, courses: &[(&str, &str, u32)]) -> RequirementNode {
        let mut node = RequirementNode::new(name.to_string());
        node.required_credits = required;
        node.courses = courses
            .iter()
            .map(|(subject, number, credits)| Course::new(subject, number, "", *credits))
            .collect();
        node
    }

    #[test]
    fn first_match_wins_and_never_double_counts() {
        // ENGL-2010 is listed under both sections.
        let forest = vec![
            node("Core", Some(3), &[("ENGL", "2010", 3)]),
            node("General Education", Some(6), &[("ENGL", "2010", 3)]),
        ];
        let mut tracker = SatisfactionTracker::new(&forest);

        let course = CourseId::new("ENGL", "2010");
        assert!(tracker.attempt_satisfy(&course, 3));
        assert_eq!(tracker.completed_nodes(), 1);

        // A second instance of the course goes to the *next* outstanding
        // node, never back into the completed one.
        assert!(tracker.attempt_satisfy(&course, 3));
        assert_eq!(tracker.completed_nodes(), 1);
        let outstanding: Vec<&str> = tracker.outstanding().collect();
        assert_eq!(outstanding, ["General Education"]);
    }

    #[test]
    fn unmatched_course_is_rejected() {
        let forest = vec![node("Core", Some(3), &[("BIOL", "1010", 4)])];
        let mut tracker = SatisfactionTracker::new(&forest);
        assert!(!tracker.attempt_satisfy(&CourseId::new("ART", "1010"), 3));
    }

    #[test]
    fn unresolved_nodes_are_never_matched() {
        let forest = vec![
            node("Header", None, &[("BIOL", "1010", 4)]),
            node("Core", Some(4), &[("BIOL", "1010", 4)]),
        ];
        // Note: a `None` here survives only when constructed directly; the
        // builder's fallback would have resolved a node with courses. The
        // tracker must still skip it.
        let mut tracker = SatisfactionTracker::new(&forest);
        assert!(tracker.attempt_satisfy(&CourseId::new("BIOL", "1010"), 4));
        assert_eq!(tracker.completed_nodes(), 1);
        let outstanding: Vec<&str> = tracker.outstanding().collect();
        assert!(outstanding.is_empty());
    }

    #[test]
    fn completion_is_terminal() {
        let forest = vec![node("Core", Some(6), &[("BIOL", "1010", 4), ("CHEM", "1210", 4)])];
        let mut tracker = SatisfactionTracker::new(&forest);

        assert!(tracker.attempt_satisfy(&CourseId::new("BIOL", "1010"), 4));
        assert_eq!(tracker.completed_nodes(), 0);
        assert!(tracker.attempt_satisfy(&CourseId::new("CHEM", "1210"), 4));
        assert_eq!(tracker.completed_nodes(), 1);

        // 8 >= 6: complete, and a further offer is rejected.
        assert!(!tracker.attempt_satisfy(&CourseId::new("BIOL", "1010"), 4));
    }

    #[test]
    fn scan_order_is_preorder() {
        let mut parent = node("Parent", Some(3), &[("KIN", "3050", 3)]);
        parent
            .children
            .push(node("Child", Some(3), &[("KIN", "3050", 3)]));
        parent.kind = NodeKind::Credits;
        let forest = vec![parent];

        let mut tracker = SatisfactionTracker::new(&forest);

        // The parent is visited before its child and absorbs the first
        // instance; the second falls through to the child.
        assert!(tracker.attempt_satisfy(&CourseId::new("KIN", "3050"), 3));
        let outstanding: Vec<&str> = tracker.outstanding().collect();
        assert_eq!(outstanding, ["Child"]);

        assert!(tracker.attempt_satisfy(&CourseId::new("KIN", "3050"), 3));
        assert_eq!(tracker.completed_nodes(), 2);
    }
}

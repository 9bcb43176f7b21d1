use serde::{Deserialize, Serialize};

use super::course::Course;

/// How a requirement node is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Accumulate `required_credits` across the node's attached courses.
    Credits,
    /// Complete any single one of the node's child subtrees.
    Choose,
}

/// One level of a major's requirement structure.
///
/// A node owns its attached courses and its child nodes; a major's
/// requirements form a forest of these, one root per top-level heading of the
/// source document. Nodes are read-only once tree construction finishes —
/// per-audit completion state lives in the satisfaction tracker, never here,
/// so one tree can back any number of concurrent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementNode {
    /// Heading text, whitespace-normalized.
    pub name: String,
    /// How the node is satisfied.
    pub kind: NodeKind,
    /// Credit total a student must accumulate against this node.
    ///
    /// `None` means the credit amount could not be resolved even after
    /// fallback inference. Such a node can never be completed — it is a
    /// valid terminal state for informational, header-only sections, not an
    /// error, and must not be collapsed to zero.
    pub required_credits: Option<u32>,
    /// Courses attached directly to this node, in listing order.
    pub courses: Vec<Course>,
    /// Child nodes, in heading order.
    pub children: Vec<RequirementNode>,
}

impl RequirementNode {
    /// Creates an empty `Credits` node with the given (already normalized)
    /// name.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            kind: NodeKind::Credits,
            required_credits: None,
            courses: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Pre-order traversal of this node's subtree: the node itself first,
    /// then each child subtree left to right.
    pub fn preorder(&self) -> impl Iterator<Item = &Self> {
        Preorder { stack: vec![self] }
    }

    /// Resolves missing `required_credits` bottom-up, after the document walk.
    ///
    /// A `Credits` node with attached courses takes their credit sum (direct
    /// courses only — descendants never contribute). A `Choose` node takes
    /// the maximum across its children, computed after the children's own
    /// fallback. Nodes with nothing to infer from stay unresolved.
    pub(crate) fn apply_credit_fallback(&mut self) {
        for child in &mut self.children {
            child.apply_credit_fallback();
        }

        if self.required_credits.is_some() {
            return;
        }

        self.required_credits = match self.kind {
            NodeKind::Credits => {
                if self.courses.is_empty() {
                    None
                } else {
                    Some(self.courses.iter().map(|course| course.credits).sum())
                }
            }
            NodeKind::Choose => self
                .children
                .iter()
                .filter_map(|child| child.required_credits)
                .max(),
        };
    }
}

struct Preorder<'a> {
    stack: Vec<&'a RequirementNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a RequirementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, credits: Option<u32>) -> RequirementNode {
        RequirementNode {
            required_credits: credits,
            ..RequirementNode::new(name.to_string())
        }
    }

    #[test]
    fn preorder_visits_parent_then_children_left_to_right() {
        let mut root = leaf("root", None);
        let mut left = leaf("left", None);
        left.children.push(leaf("left-child", None));
        root.children.push(left);
        root.children.push(leaf("right", None));

        let names: Vec<&str> = root.preorder().map(|node| node.name.as_str()).collect();
        assert_eq!(names, ["root", "left", "left-child", "right"]);
    }

    #[test]
    fn credits_fallback_sums_direct_courses_only() {
        let mut root = leaf("Core", None);
        root.courses.push(Course::new("BIOL", "1010", "Biology", 4));
        root.courses.push(Course::new("CHEM", "1210", "Chemistry", 5));

        let mut child = leaf("Sub", None);
        child.courses.push(Course::new("PHYS", "2010", "Physics", 4));
        root.children.push(child);

        root.apply_credit_fallback();
        // Direct courses only: the child's 4 credits do not bleed upward.
        assert_eq!(root.required_credits, Some(9));
        assert_eq!(root.children[0].required_credits, Some(4));
    }

    #[test]
    fn choose_fallback_takes_max_of_children() {
        let mut root = leaf("Emphasis", None);
        root.kind = NodeKind::Choose;
        root.children.push(leaf("Path A", Some(4)));
        root.children.push(leaf("Path B", Some(12)));

        root.apply_credit_fallback();
        assert_eq!(root.required_credits, Some(12));
    }

    #[test]
    fn empty_header_stays_unresolved() {
        let mut node = leaf("About this program", None);
        node.apply_credit_fallback();
        assert_eq!(node.required_credits, None);
    }
}

//! Event-driven requirement tree construction.
//!
//! The surrounding system walks whatever source format it scraped (HTML,
//! PDF, plain text) and emits a flat stream of structural events; this
//! module turns that stream into a forest of [`RequirementNode`]s. The core
//! never sees markup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use super::{
    course_line::parse_course_line,
    credit::{CreditBias, parse_credits},
};
use crate::domain::{NodeKind, RequirementNode};

/// One structural event extracted from a requirement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// A section heading at the given depth (1 = shallowest level).
    Heading {
        /// Nesting depth of the heading.
        depth: u8,
        /// Raw heading text.
        text: String,
    },
    /// A "complete one of the following" marker, turning the innermost open
    /// section into a choose-one group for the sub-headings that follow.
    ChooseMarker,
    /// One raw course listing line.
    CourseLine {
        /// Raw listing text.
        text: String,
    },
}

/// A structurally malformed event stream.
///
/// These abort tree construction for the one major being built; other majors
/// in the same batch are unaffected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A course line arrived before any heading opened a section.
    #[error("course line outside any section: {0:?}")]
    OrphanCourseLine(String),
    /// A choose-one marker arrived before any heading opened a section.
    #[error("choose-one marker outside any section")]
    OrphanChooseMarker,
}

/// An in-progress node paired with the document state needed to finish it.
struct OpenSection {
    depth: u8,
    heading: String,
    node: RequirementNode,
}

/// Builds a requirement forest from an ordered event stream.
///
/// Headings open sections; a heading at depth `d` closes every open section
/// at depth ≥ `d` and attaches itself under the innermost section that
/// remains (or becomes a new root). Course lines attach to the innermost
/// open section. A choose marker flips the innermost open section to a
/// choose-one group.
///
/// Each node's `required_credits` is first read from its own heading text
/// (max bias for choose groups, min otherwise); whatever is still
/// unresolved after the walk is filled in bottom-up by
/// [`RequirementNode::apply_credit_fallback`].
///
/// Deterministic: identical input always yields an identical forest.
///
/// # Errors
///
/// Returns a [`BuildError`] if a course line or choose marker appears
/// before any section is open.
#[instrument(skip(events), fields(events = events.len()))]
pub fn build_requirement_forest(events: &[CatalogEvent]) -> Result<Vec<RequirementNode>, BuildError> {
    let mut roots = Vec::new();
    let mut open: Vec<OpenSection> = Vec::new();

    for event in events {
        match event {
            CatalogEvent::Heading { depth, text } => {
                while let Some(section) = open.pop() {
                    if section.depth < *depth {
                        open.push(section);
                        break;
                    }
                    close_section(section, &mut open, &mut roots);
                }
                open.push(OpenSection {
                    depth: *depth,
                    heading: text.clone(),
                    node: RequirementNode::new(normalize_heading(text)),
                });
            }
            CatalogEvent::ChooseMarker => {
                let section = open.last_mut().ok_or(BuildError::OrphanChooseMarker)?;
                section.node.kind = NodeKind::Choose;
            }
            CatalogEvent::CourseLine { text } => {
                let section = open
                    .last_mut()
                    .ok_or_else(|| BuildError::OrphanCourseLine(text.clone()))?;
                section.node.courses.extend(parse_course_line(text));
            }
        }
    }

    while let Some(section) = open.pop() {
        close_section(section, &mut open, &mut roots);
    }

    for root in &mut roots {
        root.apply_credit_fallback();
    }

    debug!(roots = roots.len(), "built requirement forest");
    Ok(roots)
}

/// Finishes a section and attaches it to its parent (or the root set).
///
/// Credits are read from the heading here, once the node's final kind is
/// known: a marker may have arrived any time while the section was open.
fn close_section(
    mut section: OpenSection,
    open: &mut [OpenSection],
    roots: &mut Vec<RequirementNode>,
) {
    let bias = match section.node.kind {
        NodeKind::Choose => CreditBias::Max,
        NodeKind::Credits => CreditBias::Min,
    };
    section.node.required_credits = parse_credits(&section.heading, bias);

    if let Some(parent) = open.last_mut() {
        parent.node.children.push(section.node);
    } else {
        roots.push(section.node);
    }
}

fn normalize_heading(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

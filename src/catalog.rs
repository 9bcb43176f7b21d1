//! Requirement-document parsing.
//!
//! Turns the event stream extracted from a degree-requirement document into
//! a forest of [`crate::domain::RequirementNode`]s, including credit-amount
//! inference when the source text is ambiguous or missing.

pub mod builder;
/// Course listing-line parsing.
pub mod course_line;
/// Credit-expression parsing.
pub mod credit;

pub use builder::{BuildError, CatalogEvent, build_requirement_forest};
pub use course_line::parse_course_line;
pub use credit::{CreditBias, parse_credits};

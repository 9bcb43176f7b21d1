use serde::{Deserialize, Serialize};

use super::requirement::RequirementNode;

/// A declared major for one catalog year, with its requirement tree.
///
/// Identity is the `(major_code, catalog_year)` pair. A major is created
/// once per catalog import and is effectively immutable afterwards; a
/// re-import replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    /// Registrar major code, e.g. `EXSC`.
    pub major_code: String,
    /// Catalog-year code the requirements were published under.
    pub catalog_year: u32,
    /// Code of the broader program when this major is a concentration.
    #[serde(default)]
    pub base_major_code: Option<String>,
    /// Canonical name as the registrar records it.
    pub name_registrar: String,
    /// Display name as scraped from the catalog site.
    pub name_web: String,
    /// Total credits required for the degree.
    pub total_credits_required: u32,
    /// Requirement forest, one root per top-level document heading.
    pub requirements: Vec<RequirementNode>,
}

//! Credit-expression parsing.
//!
//! Catalog headings and course listings state credit amounts in free text:
//! `"40 Credits"`, `"6-9 Credits"`, `"4 or 12 Credits"`. This module
//! extracts a single integer from such text, with a caller-selected bias for
//! the ambiguous two-number forms.

use std::sync::LazyLock;

use regex::Regex;

/// Which end of an ambiguous credit range or alternative to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditBias {
    /// Take the smaller amount (conservative reading).
    Min,
    /// Take the larger amount (credit-generous reading, used for
    /// choose-one groups).
    Max,
}

static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*-\s*(\d+)\s*credits?").expect("valid regex"));
static EITHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*or\s*(\d+)\s*credits?").expect("valid regex"));
static SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*credits?").expect("valid regex"));

/// Extracts a credit amount from free text.
///
/// The recognized forms, in precedence order:
///
/// 1. `"<n>-<m> credits"` — returns `n` under [`CreditBias::Min`], `m` under
///    [`CreditBias::Max`].
/// 2. `"<n> or <m> credits"` — same bias selection.
/// 3. `"<n> credits"` — returns `n`.
///
/// Matching is case-insensitive and accepts the singular `credit`. Text
/// matching none of the forms yields `None`; no other numbers in the text
/// are summed or otherwise interpreted.
#[must_use]
pub fn parse_credits(text: &str, bias: CreditBias) -> Option<u32> {
    for pattern in [&*RANGE, &*EITHER] {
        if let Some(captures) = pattern.captures(text) {
            let index = match bias {
                CreditBias::Min => 1,
                CreditBias::Max => 2,
            };
            return captures[index].parse().ok();
        }
    }

    SINGLE
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// The season encoded in the trailing two digits of a term code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// Trailing digits `10`.
    Fall,
    /// Trailing digits `20`.
    Spring,
    /// Trailing digits `30`.
    Summer,
}

/// A Banner-style `YYYYTT` term code.
///
/// The trailing two digits are the season (`10` = Fall, `20` = Spring, `30` =
/// Summer) and the leading four digits are the academic year the term belongs
/// to, named by its *ending* calendar year: Fall 2022 is `202310`, Spring
/// 2023 is `202320`, Summer 2023 is `202330`. Under this encoding term codes
/// order chronologically as plain integers and the three terms of one
/// Fall/Spring/Summer academic year share a `YYYY` prefix. The audit engine
/// relies on both properties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TermCode(u32);

impl TermCode {
    /// Wraps a raw `YYYYTT` integer.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw `YYYYTT` integer.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The academic-year portion of the code (the year the academic year
    /// ends in).
    #[must_use]
    pub const fn academic_year(self) -> u32 {
        self.0 / 100
    }

    /// Decodes the trailing two digits, if they name a known season.
    #[must_use]
    pub const fn season(self) -> Option<Season> {
        match self.0 % 100 {
            10 => Some(Season::Fall),
            20 => Some(Season::Spring),
            30 => Some(Season::Summer),
            _ => None,
        }
    }

    /// The Fall term code anchoring the academic year containing this term.
    #[must_use]
    pub const fn academic_year_start(self) -> Self {
        Self(self.academic_year() * 100 + 10)
    }

    /// Whether two terms fall inside the same Fall/Spring/Summer window.
    #[must_use]
    pub const fn same_academic_year(self, other: Self) -> bool {
        self.academic_year() == other.academic_year()
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TermCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl FromStr for TermCode {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_seasons() {
        assert_eq!(TermCode::new(202_310).season(), Some(Season::Fall));
        assert_eq!(TermCode::new(202_320).season(), Some(Season::Spring));
        assert_eq!(TermCode::new(202_330).season(), Some(Season::Summer));
        assert_eq!(TermCode::new(202_340).season(), None);
    }

    #[test]
    fn academic_year_groups_fall_spring_summer() {
        let fall = TermCode::new(202_310);
        let spring = TermCode::new(202_320);
        let summer = TermCode::new(202_330);
        assert!(fall.same_academic_year(spring));
        assert!(spring.same_academic_year(summer));
        assert_eq!(spring.academic_year_start(), fall);
        // The next Fall opens a new window.
        assert!(!summer.same_academic_year(TermCode::new(202_410)));
    }

    #[test]
    fn orders_chronologically() {
        assert!(TermCode::new(202_310) < TermCode::new(202_320));
        assert!(TermCode::new(202_330) < TermCode::new(202_410));
    }
}

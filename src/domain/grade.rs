//! Letter grades and the completion threshold.

use crate::error::{RepoError, Result};
use std::fmt;
use std::str::FromStr;

/// The letter-grade scale, declared best first so that the derived `Ord`
/// reads "A < A- < ... < F".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

impl Grade {
    /// Lowest grade that still completes a course.
    pub const PASSING: Grade = Grade::C;

    pub const ALL: [Grade; 12] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::DMinus,
        Grade::F,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        }
    }

    pub fn is_passing(&self) -> bool {
        *self <= Self::PASSING
    }
}

impl FromStr for Grade {
    type Err = RepoError;

    fn from_str(s: &str) -> Result<Self> {
        Grade::ALL
            .into_iter()
            .find(|g| g.code() == s)
            .ok_or_else(|| RepoError::InvalidData(format!("unknown letter grade '{}'", s)))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

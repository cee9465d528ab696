//! Environmental rating grades and their numeric scores.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum score a product needs to be recommended as an alternative (grade B).
pub const RECOMMEND_THRESHOLD: f64 = 3.5;

/// Rating grade, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
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
    E,
    EMinus,
}

impl Grade {
    /// Every grade, best first.
    pub const ALL: [Grade; 13] = [
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
        Grade::E,
        Grade::EMinus,
    ];

    pub fn as_str(&self) -> &'static str {
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
            Grade::E => "E",
            Grade::EMinus => "E-",
        }
    }

    /// Numeric score used for comparisons (A = 5 down to E- = 0).
    pub fn score(&self) -> f64 {
        match self {
            Grade::A => 5.0,
            Grade::AMinus => 4.5,
            Grade::BPlus => 4.0,
            Grade::B => 3.5,
            Grade::BMinus => 3.0,
            Grade::CPlus => 2.5,
            Grade::C => 2.0,
            Grade::CMinus => 1.5,
            Grade::DPlus => 1.0,
            Grade::D => 0.5,
            Grade::DMinus => 0.2,
            Grade::E => 0.1,
            Grade::EMinus => 0.0,
        }
    }

    /// Badge band, taken from the grade letter.
    pub fn band(&self) -> ScoreBand {
        match self {
            Grade::A | Grade::AMinus => ScoreBand::A,
            Grade::BPlus | Grade::B | Grade::BMinus => ScoreBand::B,
            Grade::CPlus | Grade::C | Grade::CMinus => ScoreBand::C,
            Grade::DPlus | Grade::D | Grade::DMinus => ScoreBand::D,
            Grade::E | Grade::EMinus => ScoreBand::E,
        }
    }

    /// Whether this grade clears the recommendation threshold.
    pub fn is_recommendable(&self) -> bool {
        self.score() >= RECOMMEND_THRESHOLD
    }
}

/// Score of an optional rating; an absent rating scores 0.
pub fn grade_score(rating: Option<Grade>) -> f64 {
    rating.map(|g| g.score()).unwrap_or(0.0)
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidGrade(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Grade> for String {
    fn from(g: Grade) -> Self {
        g.as_str().to_string()
    }
}

/// Colour band for a rating badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScoreBand {
    A,
    B,
    #[default]
    C,
    D,
    E,
}

impl ScoreBand {
    /// Band for an optional rating; unrated products use the neutral middle band.
    pub fn of(rating: Option<Grade>) -> Self {
        rating.map(|g| g.band()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::A => "A",
            ScoreBand::B => "B",
            ScoreBand::C => "C",
            ScoreBand::D => "D",
            ScoreBand::E => "E",
        }
    }
}

//! Size grades and the weight thresholds that derive them.

use core::fmt;
use core::str::FromStr;

use harvest_core::ValueObject;
use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// Lightest weight (grams) graded `M`.
pub const M_MIN_GRAMS: u32 = 10;
/// Lightest weight (grams) graded `L`.
pub const L_MIN_GRAMS: u32 = 20;
/// Lightest weight (grams) graded `LL`.
pub const LL_MIN_GRAMS: u32 = 25;

/// Size grade, ordered `S < M < L < LL`.
///
/// Variant order is the rank order; `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Grade {
    S,
    M,
    L,
    LL,
}

impl Grade {
    /// All grades in rank order.
    pub const ALL: [Grade; 4] = [Grade::S, Grade::M, Grade::L, Grade::LL];

    /// Derive the grade for a weight in grams.
    ///
    /// Zero is rejected; every other weight maps to exactly one grade.
    pub fn from_weight(grams: u32) -> Result<Self, GradeError> {
        match grams {
            0 => Err(GradeError::InvalidWeight { grams }),
            g if g < M_MIN_GRAMS => Ok(Grade::S),
            g if g < L_MIN_GRAMS => Ok(Grade::M),
            g if g < LL_MIN_GRAMS => Ok(Grade::L),
            _ => Ok(Grade::LL),
        }
    }

    /// Ordinal rank: `S=0`, `M=1`, `L=2`, `LL=3`.
    pub fn rank(self) -> u8 {
        match self {
            Grade::S => 0,
            Grade::M => 1,
            Grade::L => 2,
            Grade::LL => 3,
        }
    }

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::M => "M",
            Grade::L => "L",
            Grade::LL => "LL",
        }
    }

    /// Number of grade steps between `self` and `other`, ignoring direction.
    pub fn distance(self, other: Grade) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl ValueObject for Grade {}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.label() == s)
            .ok_or_else(|| GradeError::UnknownLabel(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = GradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for &'static str {
    fn from(grade: Grade) -> Self {
        grade.label()
    }
}

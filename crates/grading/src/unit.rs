//! Graded units: a variety label with its weight-derived size grade.

use core::fmt;

use harvest_core::ValueObject;
use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::grade::Grade;

/// A variety label paired with the size grade derived from its weight.
///
/// The weight itself is not kept; only the grade survives construction.
/// Deserialization is treated as a trusted source and takes the grade label
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradedUnit {
    variety: String,
    #[serde(rename = "size")]
    grade: Grade,
}

impl GradedUnit {
    /// Grade a unit of `variety` weighing `weight_grams`.
    ///
    /// Fails with [`GradeError::InvalidWeight`] for a zero weight. The variety
    /// must be non-empty; that is the caller's precondition and is not
    /// checked here, so the text is stored verbatim.
    pub fn new(variety: impl Into<String>, weight_grams: u32) -> Result<Self, GradeError> {
        let variety = variety.into();
        let grade = Grade::from_weight(weight_grams).inspect_err(|err| {
            tracing::debug!(variety = %variety, weight_grams, error = %err, "rejected graded unit");
        })?;

        tracing::trace!(variety = %variety, weight_grams, grade = %grade, "graded unit");
        Ok(Self::from_parts(variety, grade))
    }

    /// Build from an already known grade, skipping weight derivation.
    pub(crate) fn from_parts(variety: impl Into<String>, grade: Grade) -> Self {
        Self {
            variety: variety.into(),
            grade,
        }
    }

    /// Variety label as given at construction.
    pub fn variety(&self) -> &str {
        &self.variety
    }

    /// Size grade fixed at construction.
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Exact, case-sensitive comparison of variety labels.
    pub fn same_variety(&self, other: &GradedUnit) -> bool {
        self.variety == other.variety
    }

    /// Grade steps between the two units (0..=3), without direction.
    pub fn size_distance(&self, other: &GradedUnit) -> u8 {
        self.grade.distance(other.grade)
    }
}

impl ValueObject for GradedUnit {}

impl fmt::Display for GradedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variety, self.grade)
    }
}

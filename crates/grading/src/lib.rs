//! Grading domain module.
//!
//! A [`GradedUnit`] pairs a variety label with a size [`Grade`] derived once
//! from the unit's weight. Pure, deterministic domain logic (no IO, no storage).

pub mod error;
pub mod grade;
pub mod unit;

pub use error::GradeError;
pub use grade::{Grade, L_MIN_GRAMS, LL_MIN_GRAMS, M_MIN_GRAMS};
pub use unit::GradedUnit;

use std::convert::Infallible;

use thiserror::Error;
use uom::si::f64::Length;

use crate::{models::fireball::UnknownMaterialError, support::constraint::ConstraintError};

/// Errors that can occur while composing heat flux and exposure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeatFluxError {
    /// The distance range is empty or has too few points.
    #[error("invalid distance range: min={min:?}, max={max:?}, points={points}")]
    InvalidRange {
        min: Length,
        max: Length,
        points: usize,
    },

    /// Two series that must be aligned sample-by-sample differ in length.
    #[error("mismatched series lengths: expected {expected}, found {found}")]
    MismatchedSeries { expected: usize, found: usize },

    /// The material selector is not in the table.
    #[error(transparent)]
    UnknownMaterial(#[from] UnknownMaterialError),

    /// A distance violates its constraint.
    #[error("invalid distance")]
    Constraint(#[from] ConstraintError),
}

impl From<Infallible> for HeatFluxError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

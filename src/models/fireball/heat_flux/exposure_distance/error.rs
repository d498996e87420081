use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Length;

use crate::support::units::RadiantExposure;

/// Errors that can occur while solving for an exposure threshold distance.
#[derive(Debug, Error)]
pub enum ExposureDistanceError {
    /// The search bracket is not `0 < near < far`.
    #[error("invalid distance bracket: near={near:?}, far={far:?}")]
    InvalidBracket { near: Length, far: Length },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best exposure residual achieved.
        residual: RadiantExposure,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Integrated exposure was not finite at a trial distance.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("non-finite exposure at distance {distance:?}")]
pub struct NonFiniteExposure {
    pub distance: Length,
}

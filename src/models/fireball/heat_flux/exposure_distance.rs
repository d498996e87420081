//! Iterative solver for the distance at which exposure reaches a threshold.
//!
//! Integrated exposure falls monotonically with distance, so the threshold
//! distance inside a bracket is found by bisection on the residual
//! `H(x) − H_target`.

mod config;
mod error;
mod problem;

pub use config::ExposureDistanceConfig;
pub use error::{ExposureDistanceError, NonFiniteExposure};

use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::{RadiantExposure, conversions::from_joules_per_square_meter},
};

use super::{FireballHistory, HeatFluxPipeline};

use problem::{ExposureModel, ExposureProblem};

/// Distance at which the integrated exposure matches a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureDistance {
    pub distance: Length,

    /// Exposure achieved at `distance`.
    pub exposure: RadiantExposure,

    /// Iteration count performed by the solver.
    pub iters: usize,
}

/// Solves for the distance in `[near, far]` receiving `target` exposure.
///
/// # Errors
///
/// Returns [`ExposureDistanceError`] if the bracket is not `0 < near < far`,
/// the target is not bracketed, or the solver fails to converge.
pub(super) fn exposure_distance(
    pipeline: &HeatFluxPipeline,
    history: &FireballHistory,
    target: Constrained<RadiantExposure, StrictlyPositive>,
    near: Length,
    far: Length,
    config: ExposureDistanceConfig,
) -> Result<ExposureDistance, ExposureDistanceError> {
    let (x_near, x_far) = (near.get::<meter>(), far.get::<meter>());
    if !(0.0 < x_near && x_near < x_far) {
        return Err(ExposureDistanceError::InvalidBracket { near, far });
    }

    let model = ExposureModel::new(pipeline, history);
    let problem = ExposureProblem::new(target.into_inner());

    let solution = bisection::solve(
        &model,
        &problem,
        [x_near, x_far],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Exposure diverges toward the source; treat the trial as overshooting.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ExposureDistanceError::MaxIters {
            residual: from_joules_per_square_meter(solution.residual),
            iters: solution.iters,
        });
    }

    let output = solution.snapshot.output;
    Ok(ExposureDistance {
        distance: output.distance,
        exposure: output.exposure,
        iters: solution.iters,
    })
}

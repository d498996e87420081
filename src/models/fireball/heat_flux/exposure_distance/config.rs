use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::units::{
    RadiantExposure,
    conversions::{from_joules_per_square_meter, joules_per_square_meter},
};

/// Solver configuration for locating an exposure threshold distance.
#[derive(Debug, Clone, Copy)]
pub struct ExposureDistanceConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the distance search variable.
    pub distance_tol: Length,

    /// Absolute tolerance for the exposure residual (achieved - target).
    pub exposure_tol: RadiantExposure,
}

impl Default for ExposureDistanceConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            distance_tol: Length::new::<meter>(1e-9),
            exposure_tol: from_joules_per_square_meter(1e-9),
        }
    }
}

impl ExposureDistanceConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.distance_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: joules_per_square_meter(self.exposure_tol),
        }
    }
}

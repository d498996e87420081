//! Problem formulation for exposure threshold matching.

use std::convert::Infallible;

use tracing::trace;
use twine_core::{EquationProblem, Model};
use uom::si::{f64::Length, length::meter};

use crate::{
    models::fireball::heat_flux::{FireballHistory, HeatFluxPipeline},
    support::units::{RadiantExposure, conversions::joules_per_square_meter},
};

use super::NonFiniteExposure;

/// Exposure achieved at one receiver distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ExposureAt {
    pub(super) distance: Length,
    pub(super) exposure: RadiantExposure,
}

/// Model adapter exposing the receiver distance as the sole input.
pub(super) struct ExposureModel<'a> {
    pipeline: &'a HeatFluxPipeline,
    history: &'a FireballHistory,
}

impl<'a> ExposureModel<'a> {
    pub(super) fn new(pipeline: &'a HeatFluxPipeline, history: &'a FireballHistory) -> Self {
        Self { pipeline, history }
    }
}

impl Model for ExposureModel<'_> {
    type Input = Length;
    type Output = ExposureAt;
    type Error = NonFiniteExposure;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let exposure = self.pipeline.exposure(*input, self.history);
        let joules = joules_per_square_meter(exposure);
        trace!(distance_m = input.get::<meter>(), exposure_j_per_m2 = joules, "exposure trial");

        if !joules.is_finite() {
            return Err(NonFiniteExposure { distance: *input });
        }
        Ok(ExposureAt {
            distance: *input,
            exposure,
        })
    }
}

/// Equation problem definition for exposure matching.
///
/// Computes the residual as `achieved - target`, which falls with distance.
pub(super) struct ExposureProblem {
    target: RadiantExposure,
}

impl ExposureProblem {
    pub(super) fn new(target: RadiantExposure) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for ExposureProblem {
    type Input = Length;
    type Output = ExposureAt;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = joules_per_square_meter(output.exposure);
        let target = joules_per_square_meter(self.target);
        Ok([achieved - target])
    }
}

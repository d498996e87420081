//! Thermal radiation flux and integrated exposure at a receiver.
//!
//! The fireball radiates as a grey sphere. At receiver distance `x`:
//!
//! ```text
//! q(x, t) = ε · σ · T(t)⁴ · ¼ · (D(t) / x)² · τ(x)
//! H(x)    = ∫ q(x, t) dt
//! ```
//!
//! where `¼·(D/x)²` is the view factor of the sphere and `τ(x)` the
//! atmospheric transmissivity, evaluated once per distance. Exposure `H` is
//! integrated with the trapezoidal rule over the time grid in seconds.

mod error;
mod exposure_distance;
mod history;
mod range;

use rayon::prelude::*;
use tracing::debug;
use uom::si::{
    f64::{HeatFluxDensity, Length, Time},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    grid::TimeGrid,
    quadrature::trapezoid,
    units::{
        RadiantExposure,
        conversions::{from_joules_per_square_meter, seconds},
    },
};

use super::{AtmosphericConditions, Material, RadiusModel, TemperatureModel, TransmissivityModel};

pub use error::HeatFluxError;
pub use exposure_distance::{
    ExposureDistance, ExposureDistanceConfig, ExposureDistanceError, NonFiniteExposure,
};
pub use history::FireballHistory;
pub use range::DistanceRange;

/// Surface emissivity of the fireball.
pub const EMISSIVITY: f64 = 0.9;

/// Stefan–Boltzmann constant in W·m⁻²·K⁻⁴.
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Integrated exposure over a set of receiver distances.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureProfile {
    distances: Vec<Length>,
    exposures: Vec<RadiantExposure>,
}

impl ExposureProfile {
    #[must_use]
    pub fn distances(&self) -> &[Length] {
        &self.distances
    }

    #[must_use]
    pub fn exposures(&self) -> &[RadiantExposure] {
        &self.exposures
    }

    /// Iterates `(distance, exposure)` pairs in distance order.
    pub fn iter(&self) -> impl Iterator<Item = (Length, RadiantExposure)> + '_ {
        self.distances
            .iter()
            .copied()
            .zip(self.exposures.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Combines fireball history and atmosphere into flux and exposure.
///
/// The pipeline holds only the atmospheric conditions; every operation
/// takes the fireball history as an explicit argument.
///
/// # Example
///
/// ```
/// use fireball_models::{
///     models::fireball::{DistanceRange, HeatFluxPipeline, Material, TemperatureModel},
///     support::grid::TimeGrid,
/// };
///
/// let temperature = TemperatureModel::new(Default::default()).unwrap();
/// let profile = HeatFluxPipeline::default()
///     .sweep(
///         &DistanceRange::default(),
///         Material::Aluminum40Rubber,
///         &temperature,
///         &TimeGrid::default(),
///     )
///     .unwrap();
///
/// let exposures = profile.exposures();
/// assert!(exposures.first() > exposures.last());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatFluxPipeline {
    transmissivity: TransmissivityModel,
}

impl HeatFluxPipeline {
    #[must_use]
    pub fn new(conditions: AtmosphericConditions) -> Self {
        Self {
            transmissivity: TransmissivityModel::new(conditions),
        }
    }

    #[must_use]
    pub fn transmissivity(&self) -> &TransmissivityModel {
        &self.transmissivity
    }

    /// Flux at `distance` for every sample of `history`.
    #[must_use]
    pub fn flux(&self, distance: Length, history: &FireballHistory) -> Vec<HeatFluxDensity> {
        let x = distance.get::<meter>();
        let tau = self.transmissivity.transmissivity(distance).get::<ratio>();

        history
            .temperatures()
            .iter()
            .zip(history.diameters())
            .map(|(temperature, diameter)| {
                let t = temperature.get::<kelvin>();
                let view_factor = 0.25 * (diameter.get::<meter>() / x).powi(2);
                HeatFluxDensity::new::<watt_per_square_meter>(
                    EMISSIVITY * STEFAN_BOLTZMANN * t.powi(4) * view_factor * tau,
                )
            })
            .collect()
    }

    /// Integrates a flux series over its time grid.
    ///
    /// Spacing may be non-uniform. Fewer than two samples integrate to zero.
    ///
    /// # Errors
    ///
    /// Returns [`HeatFluxError::MismatchedSeries`] if the series lengths differ.
    pub fn integrate(
        flux: &[HeatFluxDensity],
        times: &[Time],
    ) -> Result<RadiantExposure, HeatFluxError> {
        if flux.len() != times.len() {
            return Err(HeatFluxError::MismatchedSeries {
                expected: times.len(),
                found: flux.len(),
            });
        }
        Ok(integrate_aligned(flux, times))
    }

    /// Integrated exposure at `distance`.
    #[must_use]
    pub fn exposure(&self, distance: Length, history: &FireballHistory) -> RadiantExposure {
        integrate_aligned(&self.flux(distance, history), history.times())
    }

    /// Flux over `distances × times`, one row per distance.
    #[must_use]
    pub fn flux_field(
        &self,
        distances: &[Length],
        history: &FireballHistory,
    ) -> Vec<Vec<HeatFluxDensity>> {
        distances
            .par_iter()
            .map(|&distance| self.flux(distance, history))
            .collect()
    }

    /// Integrated exposure at every distance of `range`.
    ///
    /// Distances are independent and evaluated in parallel.
    #[must_use]
    pub fn profile(&self, range: &DistanceRange, history: &FireballHistory) -> ExposureProfile {
        let distances = range.distances();
        let exposures = distances
            .par_iter()
            .map(|&distance| self.exposure(distance, history))
            .collect();
        ExposureProfile {
            distances,
            exposures,
        }
    }

    /// Evaluates the fireball once on `grid` and integrates exposure over `range`.
    ///
    /// `material` may be a [`Material`] or a selector name such as `"40%Al/Rubber"`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatFluxError::UnknownMaterial`] if the selector does not name
    /// a tabulated material.
    pub fn sweep<M>(
        &self,
        range: &DistanceRange,
        material: M,
        temperature: &TemperatureModel,
        grid: &TimeGrid,
    ) -> Result<ExposureProfile, HeatFluxError>
    where
        M: TryInto<Material>,
        HeatFluxError: From<M::Error>,
    {
        let material: Material = material.try_into()?;
        debug!(
            %material,
            min_m = range.min().get::<meter>(),
            max_m = range.max().get::<meter>(),
            points = range.points(),
            samples = grid.len(),
            "exposure sweep"
        );

        let radius = RadiusModel::for_material(material);
        let history = FireballHistory::evaluate(temperature, &radius, grid);
        Ok(self.profile(range, &history))
    }

    /// Finds the distance in `[near, far]` at which exposure equals `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureDistanceError`] if the bracket is invalid, does not
    /// contain the target, or the solver fails to converge.
    pub fn distance_for_exposure(
        &self,
        history: &FireballHistory,
        target: Constrained<RadiantExposure, StrictlyPositive>,
        near: Length,
        far: Length,
        config: ExposureDistanceConfig,
    ) -> Result<ExposureDistance, ExposureDistanceError> {
        exposure_distance::exposure_distance(self, history, target, near, far, config)
    }
}

fn integrate_aligned(flux: &[HeatFluxDensity], times: &[Time]) -> RadiantExposure {
    let q: Vec<f64> = flux.iter().map(|q| q.get::<watt_per_square_meter>()).collect();
    let t: Vec<f64> = times.iter().map(|&t| seconds(t)).collect();
    from_joules_per_square_meter(trapezoid(&q, &t))
}

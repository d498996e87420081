//! Fireball radius growth.
//!
//! The fireball is modeled as a sphere whose radius follows an exponential
//! drag law:
//!
//! ```text
//! R(t) = K · (1 − B · exp(−C · t²))
//! ```
//!
//! where `K` is the asymptotic radius, `B` the amplitude fraction and `C` the
//! decay constant. At ignition `R(0) = K·(1 − B)`; as `t → ∞`, `R → K`.
//!
//! Coefficients are tabulated per [`Material`] with `C` in ms⁻²; the model
//! converts it to s⁻² once and evaluates `t` in seconds.

mod material;

use std::{collections::BTreeMap, convert::Infallible};

use twine_core::Model;
use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalOpen},
    units::conversions::{per_square_millisecond_to_per_square_second, seconds},
};

pub use material::{
    AMPLITUDE, DECAY_PER_SQUARE_MS, Material, MaterialProfile, UnknownMaterialError,
};

/// Coefficients of the radius law `R(t) = K · (1 − B · exp(−C · t²))`.
///
/// Guaranteed `K > 0`, `0 < B < 1` and `C > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusCoefficients {
    asymptotic_radius: Length,
    amplitude: f64,
    decay_per_square_ms: f64,
}

impl RadiusCoefficients {
    /// Constructs coefficients from validated values.
    ///
    /// `decay_per_square_ms` is `C` expressed for time in milliseconds.
    #[must_use]
    pub fn new(
        asymptotic_radius: Constrained<Length, StrictlyPositive>,
        amplitude: Constrained<f64, UnitIntervalOpen>,
        decay_per_square_ms: Constrained<f64, StrictlyPositive>,
    ) -> Self {
        Self {
            asymptotic_radius: asymptotic_radius.into_inner(),
            amplitude: amplitude.into_inner(),
            decay_per_square_ms: decay_per_square_ms.into_inner(),
        }
    }

    /// Constructs coefficients without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `K > 0`, `0 < B < 1` and `C > 0`.
    #[must_use]
    pub fn new_unchecked(
        asymptotic_radius: Length,
        amplitude: f64,
        decay_per_square_ms: f64,
    ) -> Self {
        Self {
            asymptotic_radius,
            amplitude,
            decay_per_square_ms,
        }
    }

    /// Asymptotic radius `K`.
    #[must_use]
    pub fn asymptotic_radius(&self) -> Length {
        self.asymptotic_radius
    }

    /// Amplitude fraction `B`.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Decay constant `C` in ms⁻².
    #[must_use]
    pub fn decay_per_square_ms(&self) -> f64 {
        self.decay_per_square_ms
    }

    /// Decay constant `C` in s⁻².
    #[must_use]
    pub fn decay_per_square_second(&self) -> f64 {
        per_square_millisecond_to_per_square_second(self.decay_per_square_ms)
    }
}

/// Radius, diameter and expansion velocity at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthState {
    pub time: Time,
    pub radius: Length,
    pub diameter: Length,
    pub velocity: Velocity,
}

/// Closed-form fireball radius model for one set of coefficients.
///
/// # Example
///
/// ```
/// use fireball_models::models::fireball::{Material, RadiusModel};
/// use uom::si::{f64::Time, length::meter, time::millisecond};
///
/// let model = RadiusModel::for_material(Material::Polyurethane);
/// let r = model.radius(Time::new::<millisecond>(10.0));
/// assert!((r.get::<meter>() - 2.852).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusModel {
    coefficients: RadiusCoefficients,
}

impl RadiusModel {
    /// Creates a radius model from explicit coefficients.
    #[must_use]
    pub fn new(coefficients: RadiusCoefficients) -> Self {
        Self { coefficients }
    }

    /// Creates a radius model from a material's tabulated coefficients.
    #[must_use]
    pub fn for_material(material: Material) -> Self {
        Self::new(material.profile().coefficients())
    }

    /// Returns the coefficients in use.
    #[must_use]
    pub fn coefficients(&self) -> &RadiusCoefficients {
        &self.coefficients
    }

    /// Fireball radius at `time` after ignition.
    #[must_use]
    pub fn radius(&self, time: Time) -> Length {
        let k = self.coefficients.asymptotic_radius.get::<meter>();
        let b = self.coefficients.amplitude;
        let c = self.coefficients.decay_per_square_second();
        let t = seconds(time);

        Length::new::<meter>(k * (1.0 - b * (-c * t * t).exp()))
    }

    /// Fireball diameter `2·R(t)`.
    #[must_use]
    pub fn diameter(&self, time: Time) -> Length {
        self.radius(time) * 2.0
    }

    /// Expansion velocity `dR/dt = 2·K·B·C·t·exp(−C·t²)`.
    #[must_use]
    pub fn expansion_velocity(&self, time: Time) -> Velocity {
        let k = self.coefficients.asymptotic_radius.get::<meter>();
        let b = self.coefficients.amplitude;
        let c = self.coefficients.decay_per_square_second();
        let t = seconds(time);

        Velocity::new::<meter_per_second>(2.0 * k * b * c * t * (-c * t * t).exp())
    }

    /// Radius, diameter and velocity at `time`.
    #[must_use]
    pub fn growth(&self, time: Time) -> GrowthState {
        GrowthState {
            time,
            radius: self.radius(time),
            diameter: self.diameter(time),
            velocity: self.expansion_velocity(time),
        }
    }

    /// Diameters over a time grid.
    #[must_use]
    pub fn diameters(&self, times: &[Time]) -> Vec<Length> {
        times.iter().map(|&t| self.diameter(t)).collect()
    }

    /// Evaluates every tabulated material at `time`.
    #[must_use]
    pub fn all_materials(time: Time) -> BTreeMap<Material, GrowthState> {
        Material::ALL
            .into_iter()
            .map(|material| (material, Self::for_material(material).growth(time)))
            .collect()
    }
}

impl Model for RadiusModel {
    type Input = Time;
    type Output = GrowthState;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.growth(*input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{millisecond, second};

    fn ms(value: f64) -> Time {
        Time::new::<millisecond>(value)
    }

    #[test]
    fn ignition_radius_is_k_times_one_minus_b() {
        for material in Material::ALL {
            let model = RadiusModel::for_material(material);
            let k = material.profile().asymptotic_radius().get::<meter>();
            assert_relative_eq!(
                model.radius(ms(0.0)).get::<meter>(),
                k * (1.0 - AMPLITUDE)
            );
        }
    }

    #[test]
    fn polyurethane_at_ten_milliseconds() {
        // exp(−50000 · 0.01²) = exp(−5)
        let model = RadiusModel::for_material(Material::Polyurethane);
        let expected = 2.86 * (1.0 - 0.41 * (-5.0_f64).exp());
        assert_relative_eq!(
            model.radius(Time::new::<second>(0.010)).get::<meter>(),
            expected,
            epsilon = 1e-12
        );
        assert_relative_eq!(expected, 2.852_099, epsilon = 1e-6);
    }

    #[test]
    fn radius_increases_towards_asymptote() {
        for material in Material::ALL {
            let model = RadiusModel::for_material(material);
            let k = material.profile().asymptotic_radius().get::<meter>();

            let radii: Vec<f64> = (0..=30)
                .map(|i| model.radius(ms(f64::from(i) * 0.5)).get::<meter>())
                .collect();
            for pair in radii.windows(2) {
                assert!(pair[1] > pair[0], "radius must grow: {pair:?}");
            }
            assert!(radii.iter().all(|&r| r < k));

            assert_relative_eq!(
                model.radius(Time::new::<second>(1.0)).get::<meter>(),
                k,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn diameter_is_twice_radius() {
        let model = RadiusModel::for_material(Material::Aluminum40Rubber);
        let t = ms(7.5);
        assert_relative_eq!(
            model.diameter(t).get::<meter>(),
            2.0 * model.radius(t).get::<meter>()
        );
    }

    #[test]
    fn velocity_vanishes_at_ignition() {
        for material in Material::ALL {
            let v = RadiusModel::for_material(material).expansion_velocity(ms(0.0));
            assert_eq!(v.get::<meter_per_second>(), 0.0);
        }
    }

    #[test]
    fn velocity_matches_finite_difference() {
        let model = RadiusModel::for_material(Material::Polyurethane);
        let t = 0.005;
        let dt = 1e-7;

        let r = |t: f64| model.radius(Time::new::<second>(t)).get::<meter>();
        let numerical = (r(t + dt) - r(t - dt)) / (2.0 * dt);
        let analytic = model
            .expansion_velocity(Time::new::<second>(t))
            .get::<meter_per_second>();

        assert_relative_eq!(numerical, analytic, max_relative = 1e-6);
    }

    #[test]
    fn batch_covers_every_material() {
        let t = ms(10.0);
        let states = RadiusModel::all_materials(t);

        assert_eq!(states.len(), Material::ALL.len());
        for (material, state) in &states {
            let model = RadiusModel::for_material(*material);
            assert_eq!(state.radius, model.radius(t));
            assert_relative_eq!(
                state.diameter.get::<meter>(),
                2.0 * state.radius.get::<meter>()
            );
            assert_eq!(state.velocity, model.expansion_velocity(t));
        }
        assert_eq!(states.keys().next(), Some(&Material::Polyurethane));
    }

    #[test]
    fn validated_coefficients_match_table() {
        let coefficients = RadiusCoefficients::new(
            StrictlyPositive::new(Length::new::<meter>(2.86)).unwrap(),
            UnitIntervalOpen::new(0.41).unwrap(),
            StrictlyPositive::new(0.05).unwrap(),
        );
        assert_eq!(
            coefficients,
            Material::Polyurethane.profile().coefficients()
        );
        assert_relative_eq!(coefficients.decay_per_square_second(), 5.0e4);
    }

    #[test]
    fn model_adapter_delegates_to_growth() {
        let model = RadiusModel::for_material(Material::Aluminum60Rubber);
        let t = ms(3.0);
        assert_eq!(model.call(&t).unwrap(), model.growth(t));
    }
}

//! Atmospheric transmissivity along a horizontal path.
//!
//! Transmissivity is correlated against the path-length-scaled amounts of
//! carbon dioxide and water vapor:
//!
//! ```text
//! X_CO2(S) = (273 / Ta) · S
//! X_H2O(S) = (288.651 / Ta) · (760 / 101325) · (RH · PwSat) · S
//! τ(S) = 1.006 − 0.1171·log10(X_H2O) − 0.02368·log10(X_H2O)²
//!              − 0.03188·log10(X_CO2) + 0.001164·log10(X_CO2)²
//! ```
//!
//! with `Ta` in K, `PwSat` in Pa and `S` in m. Distances whose log arguments
//! are not positive produce `NaN` rather than an error, so bulk sweeps need no
//! per-element control flow.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    f64::{Length, Pressure, Ratio, ThermodynamicTemperature},
    length::meter,
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive, UnitInterval};

/// Ambient state of the atmosphere between fireball and target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    ambient_temperature: ThermodynamicTemperature,
    relative_humidity: Ratio,
    saturation_pressure: Pressure,
}

impl AtmosphericConditions {
    /// Creates conditions from validated humidity and saturation pressure.
    ///
    /// `saturation_pressure` is the water vapor saturation pressure at the
    /// ambient temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if the ambient temperature is not above
    /// absolute zero.
    pub fn new(
        ambient_temperature: ThermodynamicTemperature,
        relative_humidity: Constrained<Ratio, UnitInterval>,
        saturation_pressure: Constrained<Pressure, StrictlyPositive>,
    ) -> Result<Self, ConstraintError> {
        StrictlyPositive::new(ambient_temperature.get::<kelvin>())?;
        Ok(Self {
            ambient_temperature,
            relative_humidity: relative_humidity.into_inner(),
            saturation_pressure: saturation_pressure.into_inner(),
        })
    }

    #[must_use]
    pub fn ambient_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature
    }

    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.relative_humidity
    }

    #[must_use]
    pub fn saturation_pressure(&self) -> Pressure {
        self.saturation_pressure
    }

    /// Water vapor partial pressure `RH · PwSat`.
    #[must_use]
    pub fn vapor_pressure(&self) -> Pressure {
        self.saturation_pressure * self.relative_humidity.get::<ratio>()
    }
}

/// 24 °C, 48 % relative humidity and the matching saturation pressure.
impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self {
            ambient_temperature: ThermodynamicTemperature::new::<kelvin>(297.15),
            relative_humidity: Ratio::new::<percent>(48.0),
            saturation_pressure: Pressure::new::<pascal>(2987.87),
        }
    }
}

/// Transmissivity model for fixed atmospheric conditions.
///
/// # Example
///
/// ```
/// use fireball_models::models::fireball::TransmissivityModel;
/// use uom::si::{f64::Length, length::meter, ratio::ratio};
///
/// let model = TransmissivityModel::default();
/// let near = model.transmissivity(Length::new::<meter>(5.0)).get::<ratio>();
/// let far = model.transmissivity(Length::new::<meter>(50.0)).get::<ratio>();
/// assert!(far < near);
/// assert!(model.transmissivity(Length::new::<meter>(0.0)).get::<ratio>().is_nan());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransmissivityModel {
    conditions: AtmosphericConditions,
}

impl TransmissivityModel {
    #[must_use]
    pub fn new(conditions: AtmosphericConditions) -> Self {
        Self { conditions }
    }

    #[must_use]
    pub fn conditions(&self) -> &AtmosphericConditions {
        &self.conditions
    }

    /// Transmissivity over a path of length `distance`; `NaN` if `distance ≤ 0`.
    #[must_use]
    pub fn transmissivity(&self, distance: Length) -> Ratio {
        let ambient = self.conditions.ambient_temperature.get::<kelvin>();
        let vapor = self.conditions.vapor_pressure().get::<pascal>();
        let s = distance.get::<meter>();

        let x_co2 = (273.0 / ambient) * s;
        let x_h2o = (288.651 / ambient) * (760.0 / 101_325.0) * vapor * s;

        if !(x_co2 > 0.0 && x_h2o > 0.0) {
            return Ratio::new::<ratio>(f64::NAN);
        }

        let log_co2 = x_co2.log10();
        let log_h2o = x_h2o.log10();
        Ratio::new::<ratio>(
            1.006 - 0.1171 * log_h2o - 0.02368 * log_h2o * log_h2o - 0.03188 * log_co2
                + 0.001164 * log_co2 * log_co2,
        )
    }

    /// Transmissivities over a distance grid, elementwise.
    #[must_use]
    pub fn transmissivities(&self, distances: &[Length]) -> Vec<Ratio> {
        distances.iter().map(|&d| self.transmissivity(d)).collect()
    }
}

impl Model for TransmissivityModel {
    type Input = Length;
    type Output = Ratio;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.transmissivity(*input))
    }
}

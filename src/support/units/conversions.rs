//! Explicit conversions between raw model scalars and [`uom`] quantities.

use uom::si::{
    f64::{HeatFluxDensity, TemperatureInterval, ThermodynamicTemperature, Time},
    heat_flux_density::watt_per_square_meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::{millisecond, second},
};

use super::{RadiantExposure, TemperatureRate};

/// Milliseconds in one second.
pub const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// Converts a coefficient of `t²` from the millisecond domain to seconds.
///
/// A term `C·t²` keeps its value when the time unit changes only if
/// `C_s = C_ms · 1000²`.
#[must_use]
pub fn per_square_millisecond_to_per_square_second(coefficient: f64) -> f64 {
    coefficient * MILLISECONDS_PER_SECOND * MILLISECONDS_PER_SECOND
}

/// Returns the time in milliseconds.
#[must_use]
pub fn milliseconds(time: Time) -> f64 {
    time.get::<millisecond>()
}

/// Returns the time in seconds.
#[must_use]
pub fn seconds(time: Time) -> f64 {
    time.get::<second>()
}

/// Builds a temperature from a value in degrees Celsius.
///
/// This is where the Celsius calibration scale meets the Kelvin interface:
/// the offset of 273.15 K is applied by [`uom`].
#[must_use]
pub fn from_celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Returns the temperature in degrees Celsius.
#[must_use]
pub fn celsius(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<degree_celsius>()
}

/// Builds a temperature rate from a value in K/ms (equivalently °C/ms).
#[must_use]
pub fn from_kelvin_per_millisecond(value: f64) -> TemperatureRate {
    TemperatureInterval::new::<delta_kelvin>(value) / Time::new::<millisecond>(1.0)
}

/// Returns the temperature rate in K/ms.
#[must_use]
pub fn kelvin_per_millisecond(rate: TemperatureRate) -> f64 {
    // SI value is K/s.
    rate.value / MILLISECONDS_PER_SECOND
}

/// Builds a radiant exposure from a value in J/m².
#[must_use]
pub fn from_joules_per_square_meter(value: f64) -> RadiantExposure {
    HeatFluxDensity::new::<watt_per_square_meter>(value) * Time::new::<second>(1.0)
}

/// Returns the radiant exposure in J/m².
#[must_use]
pub fn joules_per_square_meter(exposure: RadiantExposure) -> f64 {
    exposure.value
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn quadratic_time_coefficient_scales_by_a_million() {
        let c_ms = 0.05;
        let c_s = per_square_millisecond_to_per_square_second(c_ms);
        assert_relative_eq!(c_s, 5.0e4);

        // C_ms · t_ms² == C_s · t_s²
        let t_ms = 10.0;
        let t_s = t_ms / MILLISECONDS_PER_SECOND;
        assert_relative_eq!(c_ms * t_ms * t_ms, c_s * t_s * t_s, epsilon = 1e-12);
    }

    #[test]
    fn celsius_round_trip_applies_ground_offset() {
        let t = from_celsius(1180.0);
        assert_relative_eq!(t.get::<kelvin>(), 1453.15, epsilon = 1e-9);
        assert_relative_eq!(celsius(t), 1180.0, epsilon = 1e-9);
    }

    #[test]
    fn temperature_rate_in_kelvin_per_millisecond() {
        let rate = from_kelvin_per_millisecond(-4.4);
        // -4.4 K/ms is -4400 K/s.
        assert_relative_eq!(rate.value, -4400.0, epsilon = 1e-9);
        assert_relative_eq!(kelvin_per_millisecond(rate), -4.4, epsilon = 1e-12);
    }

    #[test]
    fn radiant_exposure_is_flux_times_seconds() {
        let h = from_joules_per_square_meter(5830.0);
        assert_relative_eq!(joules_per_square_meter(h), 5830.0);

        let q = HeatFluxDensity::new::<watt_per_square_meter>(2.0e5);
        let h: RadiantExposure = q * Time::new::<millisecond>(10.0);
        assert_relative_eq!(joules_per_square_meter(h), 2000.0, epsilon = 1e-9);
    }
}

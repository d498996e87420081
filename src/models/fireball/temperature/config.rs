use uom::si::{
    f64::{Frequency, TemperatureInterval, ThermodynamicTemperature, Time},
    frequency::kilohertz,
    temperature_interval::kelvin as delta_kelvin,
    time::millisecond,
};

use crate::support::units::conversions::from_celsius;

/// A digitized `(time, temperature)` observation of the fireball surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: Time,
    pub temperature: ThermodynamicTemperature,
}

impl Sample {
    /// Creates a sample from a time in milliseconds and a temperature in °C.
    #[must_use]
    pub fn from_ms_celsius(time_ms: f64, temperature_celsius: f64) -> Self {
        Self {
            time: Time::new::<millisecond>(time_ms),
            temperature: from_celsius(temperature_celsius),
        }
    }
}

/// How the rise and decay segments are joined at the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Continuity {
    /// Smoothstep blend over a window of `width` around the breakpoint.
    ///
    /// Value is continuous everywhere; the decay rate is fitted freely.
    Blend { width: Time },

    /// Hard switch at the breakpoint with the decay rate derived from the
    /// rise slope, so value and first derivative both match.
    C1,
}

impl Default for Continuity {
    fn default() -> Self {
        Self::Blend {
            width: Time::new::<millisecond>(12.0),
        }
    }
}

/// Grid bounds for the decay parameter search.
///
/// The asymptote grid runs from `asymptote_floor` to
/// `min(decay samples) − asymptote_margin`, both included. The rate grid is
/// only searched in [`Continuity::Blend`] mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecaySearch {
    pub asymptote_floor: ThermodynamicTemperature,
    pub asymptote_margin: TemperatureInterval,
    pub asymptote_steps: usize,
    pub rate_min: Frequency,
    pub rate_max: Frequency,
    pub rate_steps: usize,
}

impl Default for DecaySearch {
    fn default() -> Self {
        Self {
            asymptote_floor: from_celsius(500.0),
            asymptote_margin: TemperatureInterval::new::<delta_kelvin>(1.0),
            asymptote_steps: 401,
            rate_min: Frequency::new::<kilohertz>(1e-3),
            rate_max: Frequency::new::<kilohertz>(0.2),
            rate_steps: 400,
        }
    }
}

/// Calibration inputs for a [`TemperatureModel`](super::TemperatureModel).
///
/// The default reproduces the digitized fireball of a 40% aluminium/rubber
/// charge: six samples over 0–140 ms, a breakpoint at 35 ms and a 12 ms blend.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureConfig {
    /// Observations ordered by time.
    pub samples: Vec<Sample>,

    /// Time separating the rise samples (`t ≤ t0`) from the decay samples (`t ≥ t0`).
    pub breakpoint: Time,

    pub continuity: Continuity,

    pub search: DecaySearch,
}

impl TemperatureConfig {
    /// Default digitized observations as `(ms, °C)`.
    pub const DEFAULT_SAMPLES: [(f64, f64); 6] = [
        (0.0, 1180.0),
        (20.0, 1240.0),
        (35.0, 1220.0),
        (70.0, 1015.0),
        (105.0, 820.0),
        (140.0, 740.0),
    ];

    /// Returns the default configuration with a different continuity mode.
    #[must_use]
    pub fn with_continuity(continuity: Continuity) -> Self {
        Self {
            continuity,
            ..Self::default()
        }
    }
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES
                .iter()
                .map(|&(t, temp)| Sample::from_ms_celsius(t, temp))
                .collect(),
            breakpoint: Time::new::<millisecond>(35.0),
            continuity: Continuity::default(),
            search: DecaySearch::default(),
        }
    }
}

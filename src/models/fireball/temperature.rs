//! Fireball surface temperature history.
//!
//! A [`TemperatureModel`] is calibrated once from digitized `(time,
//! temperature)` observations and then evaluated any number of times. The
//! curve has two analytic pieces joined at a breakpoint `t0`:
//!
//! - **Rise** (`t ≤ t0`): a cubic polynomial fitted to the early samples.
//! - **Decay** (`t ≥ t0`): `T(t) = A + (T0 − A)·exp(−k·(t − t0))`, anchored
//!   to the rise value `T0` so the join is always continuous in value.
//!
//! The [`Continuity`] mode selects how the pieces meet. [`Continuity::C1`]
//! derives `k` from the rise slope and switches hard at `t0`.
//! [`Continuity::Blend`] fits `A` and `k` freely and crossfades the pieces
//! with a smoothstep over a window centered on `t0`.
//!
//! Fitting happens in milliseconds and °C. Evaluation returns Kelvin
//! temperatures and rates; a rate in K/ms equals one in °C/ms.

mod blend;
mod calibration;
mod config;
mod decay;
mod error;
mod rise;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{ThermodynamicTemperature, Time};

use crate::support::units::{
    TemperatureRate,
    conversions::{from_celsius, from_kelvin_per_millisecond, milliseconds},
};

pub use calibration::Calibration;
pub use config::{Continuity, DecaySearch, Sample, TemperatureConfig};
pub use error::{CalibrationError, Segment};

use blend::BlendWindow;
use decay::Decay;
use rise::Rise;

/// How the calibrated pieces are combined during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Join {
    Switch { breakpoint: f64 },
    Blend(BlendWindow),
}

/// Temperature and rate at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureState {
    pub time: Time,
    pub temperature: ThermodynamicTemperature,
    pub rate: TemperatureRate,
}

/// The stitched rise and decay pieces, in the ms/°C calibration domain.
#[derive(Debug, Clone, PartialEq)]
struct Curve {
    rise: Rise,
    decay: Decay,
    join: Join,
}

impl Curve {
    fn celsius_at(&self, t: f64) -> f64 {
        match self.join {
            Join::Switch { breakpoint } if t <= breakpoint => self.rise.value(t),
            Join::Switch { .. } => self.decay.value(t),
            Join::Blend(window) => match window.weight(t).value {
                s if s <= 0.0 => self.rise.value(t),
                s if s >= 1.0 => self.decay.value(t),
                s => (1.0 - s) * self.rise.value(t) + s * self.decay.value(t),
            },
        }
    }

    fn rate_at(&self, t: f64) -> f64 {
        match self.join {
            Join::Switch { breakpoint } if t <= breakpoint => self.rise.rate(t),
            Join::Switch { .. } => self.decay.rate(t),
            Join::Blend(window) => {
                let weight = window.weight(t);
                if weight.value <= 0.0 {
                    return self.rise.rate(t);
                }
                if weight.value >= 1.0 {
                    return self.decay.rate(t);
                }
                let s = weight.value;
                let gap = self.decay.value(t) - self.rise.value(t);
                (1.0 - s) * self.rise.rate(t) + s * self.decay.rate(t) + weight.rate * gap
            }
        }
    }
}

/// A calibrated two-segment fireball temperature curve.
///
/// # Example
///
/// ```
/// use fireball_models::models::fireball::{TemperatureConfig, TemperatureModel};
/// use uom::si::{f64::Time, thermodynamic_temperature::kelvin, time::millisecond};
///
/// let model = TemperatureModel::new(TemperatureConfig::default()).unwrap();
/// let t = model.temperature(Time::new::<millisecond>(0.0));
/// assert!((t.get::<kelvin>() - 1453.15).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureModel {
    curve: Curve,
    calibration: Calibration,
}

impl TemperatureModel {
    /// Calibrates a model from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] if the configuration is invalid, a
    /// segment cannot be fitted, or no decay candidate is admissible.
    pub fn new(config: TemperatureConfig) -> Result<Self, CalibrationError> {
        let fitted = calibration::fit(&config)?;

        let join = match fitted.blend {
            Some(window) => Join::Blend(window),
            None => Join::Switch {
                breakpoint: fitted.anchor.time,
            },
        };
        let curve = Curve {
            rise: fitted.rise.clone(),
            decay: fitted.decay,
            join,
        };
        let calibration = calibration::report(&config, &fitted, |t| {
            from_celsius(curve.celsius_at(milliseconds(t)))
        });

        Ok(Self { curve, calibration })
    }

    /// Returns the fitted parameters and fit quality.
    #[must_use]
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Surface temperature at `time` after ignition.
    #[must_use]
    pub fn temperature(&self, time: Time) -> ThermodynamicTemperature {
        from_celsius(self.curve.celsius_at(milliseconds(time)))
    }

    /// Time derivative of [`temperature`](Self::temperature).
    #[must_use]
    pub fn rate(&self, time: Time) -> TemperatureRate {
        from_kelvin_per_millisecond(self.curve.rate_at(milliseconds(time)))
    }

    /// Temperatures over a time grid.
    #[must_use]
    pub fn temperatures(&self, times: &[Time]) -> Vec<ThermodynamicTemperature> {
        times.iter().map(|&t| self.temperature(t)).collect()
    }

    /// Rates over a time grid.
    #[must_use]
    pub fn rates(&self, times: &[Time]) -> Vec<TemperatureRate> {
        times.iter().map(|&t| self.rate(t)).collect()
    }
}

impl Model for TemperatureModel {
    type Input = Time;
    type Output = TemperatureState;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(TemperatureState {
            time: *input,
            temperature: self.temperature(*input),
            rate: self.rate(*input),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Frequency, TemperatureInterval, ThermodynamicTemperature},
        frequency::kilohertz,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
        time::millisecond,
    };

    use crate::support::units::conversions::kelvin_per_millisecond;

    fn ms(value: f64) -> Time {
        Time::new::<millisecond>(value)
    }

    fn kelvin_at(model: &TemperatureModel, t_ms: f64) -> f64 {
        model.temperature(ms(t_ms)).get::<kelvin>()
    }

    fn rate_at(model: &TemperatureModel, t_ms: f64) -> f64 {
        kelvin_per_millisecond(model.rate(ms(t_ms)))
    }

    fn c1_model() -> TemperatureModel {
        TemperatureModel::new(TemperatureConfig::with_continuity(Continuity::C1)).unwrap()
    }

    fn blend_model() -> TemperatureModel {
        TemperatureModel::new(TemperatureConfig::default()).unwrap()
    }

    #[test]
    fn rise_interpolates_early_samples() {
        for model in [c1_model(), blend_model()] {
            assert_relative_eq!(kelvin_at(&model, 0.0), 1453.15, epsilon = 1e-6);
            assert_relative_eq!(kelvin_at(&model, 20.0), 1513.15, epsilon = 1e-6);
        }
    }

    #[test]
    fn c1_join_matches_value_and_rate() {
        let model = c1_model();
        let calibration = model.calibration();
        assert_relative_eq!(
            kelvin_per_millisecond(calibration.breakpoint_rate()),
            -4.382_804_428_7,
            epsilon = 1e-6
        );

        let h = 1e-7;
        assert_relative_eq!(
            kelvin_at(&model, 35.0 - h),
            kelvin_at(&model, 35.0 + h),
            epsilon = 1e-5
        );
        assert_relative_eq!(
            rate_at(&model, 35.0 - h),
            rate_at(&model, 35.0 + h),
            epsilon = 1e-5
        );
    }

    #[test]
    fn c1_fit_selects_lowest_admissible_asymptote() {
        let calibration = c1_model().calibration().clone();
        assert_relative_eq!(calibration.asymptote().get::<kelvin>(), 773.15, epsilon = 1e-6);
        assert_relative_eq!(
            calibration.decay_rate().get::<kilohertz>(),
            0.006_087_228_373,
            epsilon = 1e-8
        );
        assert_relative_eq!(calibration.decay_sse(), 46_617.607, epsilon = 1e-2);
    }

    #[test]
    fn blend_fit_parameters() {
        let calibration = blend_model().calibration().clone();
        assert_relative_eq!(
            calibration.asymptote().get::<kelvin>(),
            510.755 + 273.15,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            calibration.decay_rate().get::<kilohertz>(),
            0.010_974_937_343,
            epsilon = 1e-8
        );
        assert_relative_eq!(calibration.decay_sse(), 866.0917, epsilon = 1e-2);
        assert!(calibration.r_squared() > 0.9 && calibration.r_squared() <= 1.0);
    }

    #[test]
    fn blend_endpoints_track_observations() {
        let model = blend_model();
        assert_relative_eq!(kelvin_at(&model, 0.0), 1453.15, epsilon = 1e-6);
        assert_relative_eq!(kelvin_at(&model, 140.0), 1013.15, max_relative = 0.01);
    }

    #[test]
    fn blend_is_continuous_across_window() {
        let model = blend_model();
        // Window is [29, 41] ms.
        for edge in [29.0, 41.0] {
            let h = 1e-9;
            assert_relative_eq!(
                kelvin_at(&model, edge - h),
                kelvin_at(&model, edge + h),
                epsilon = 1e-5
            );
        }
        let samples: Vec<f64> = (0..=1200)
            .map(|i| kelvin_at(&model, 28.0 + 0.01 * f64::from(i)))
            .collect();
        for pair in samples.windows(2) {
            assert!((pair[1] - pair[0]).abs() < 0.5, "jump in blend: {pair:?}");
        }
    }

    #[test]
    fn blend_is_continuous_for_any_width() {
        for width in [2.0, 12.0, 30.0, 70.0, 100.0] {
            let config =
                TemperatureConfig::with_continuity(Continuity::Blend { width: ms(width) });
            let model = TemperatureModel::new(config).unwrap();
            let Join::Blend(window) = model.curve.join else {
                panic!("expected a blend join");
            };
            assert_relative_eq!(window.end() - window.start(), width, epsilon = 1e-12);

            let h = 1e-9;
            for edge in [window.start(), window.end()] {
                assert_relative_eq!(
                    kelvin_at(&model, edge - h),
                    kelvin_at(&model, edge + h),
                    epsilon = 1e-5
                );
            }

            let step = 1e-5;
            for fraction in [0.25, 0.5, 0.75] {
                let t = window.start() + fraction * width;
                let numerical =
                    (kelvin_at(&model, t + step) - kelvin_at(&model, t - step)) / (2.0 * step);
                assert_relative_eq!(
                    numerical,
                    rate_at(&model, t),
                    epsilon = 1e-3,
                    max_relative = 1e-4
                );
            }
        }
    }

    #[test]
    fn wide_blend_window_is_clipped_at_ignition() {
        let config = TemperatureConfig::with_continuity(Continuity::Blend { width: ms(100.0) });
        let model = TemperatureModel::new(config).unwrap();
        let Join::Blend(window) = model.curve.join else {
            panic!("expected a blend join");
        };
        assert_eq!(window.start(), 0.0);
        assert_relative_eq!(window.end(), 100.0);
        assert_relative_eq!(kelvin_at(&model, 0.0), 1453.15, epsilon = 1e-6);
    }

    #[test]
    fn blend_matches_raw_pieces_outside_window() {
        let model = blend_model();
        for t in [0.0, 10.0, 28.9] {
            assert_eq!(model.curve.celsius_at(t), model.curve.rise.value(t));
            assert_eq!(model.curve.rate_at(t), model.curve.rise.rate(t));
        }
        for t in [41.1, 70.0, 140.0] {
            assert_eq!(model.curve.celsius_at(t), model.curve.decay.value(t));
            assert_eq!(model.curve.rate_at(t), model.curve.decay.rate(t));
        }
    }

    #[test]
    fn blend_rate_matches_finite_difference_inside_window() {
        let model = blend_model();
        let h = 1e-5;
        for t in [30.0, 35.0, 40.0] {
            let numerical = (kelvin_at(&model, t + h) - kelvin_at(&model, t - h)) / (2.0 * h);
            assert_relative_eq!(numerical, rate_at(&model, t), epsilon = 1e-4);
        }
    }

    #[test]
    fn grids_match_pointwise_evaluation() {
        let model = blend_model();
        let times: Vec<Time> = [0.0, 35.0, 140.0].into_iter().map(ms).collect();
        let temperatures = model.temperatures(&times);
        let rates = model.rates(&times);
        for ((t, temperature), rate) in times.iter().zip(&temperatures).zip(&rates) {
            assert_eq!(*temperature, model.temperature(*t));
            assert_eq!(*rate, model.rate(*t));
        }
        let state = model.call(&times[1]).unwrap();
        assert_eq!(state.temperature, temperatures[1]);
    }

    #[test]
    fn invalid_blend_width_is_rejected() {
        let config = TemperatureConfig::with_continuity(Continuity::Blend { width: ms(0.0) });
        assert!(matches!(
            TemperatureModel::new(config),
            Err(CalibrationError::Constraint(_))
        ));
    }

    #[test]
    fn invalid_breakpoint_is_rejected() {
        let config = TemperatureConfig {
            breakpoint: ms(f64::NAN),
            ..TemperatureConfig::default()
        };
        assert!(matches!(
            TemperatureModel::new(config),
            Err(CalibrationError::InvalidBreakpoint { .. })
        ));
    }

    #[test]
    fn empty_decay_segment_is_rejected() {
        let config = TemperatureConfig {
            breakpoint: ms(200.0),
            ..TemperatureConfig::default()
        };
        assert_eq!(
            TemperatureModel::new(config),
            Err(CalibrationError::InsufficientSamples {
                segment: Segment::Decay,
                found: 0,
                required: 1,
            })
        );
    }

    #[test]
    fn rising_decay_samples_fail_to_converge_in_c1_mode() {
        // A linear rise is still climbing at the breakpoint, so no positive k.
        let samples = [
            (0.0, 1000.0),
            (10.0, 1100.0),
            (20.0, 1200.0),
            (35.0, 1350.0),
            (70.0, 900.0),
        ]
            .iter()
            .map(|&(t, c)| Sample::from_ms_celsius(t, c))
            .collect();
        let config = TemperatureConfig {
            samples,
            continuity: Continuity::C1,
            ..TemperatureConfig::default()
        };
        assert_eq!(
            TemperatureModel::new(config),
            Err(CalibrationError::NoConvergence)
        );
    }

    #[test]
    fn non_positive_decay_rate_bound_is_rejected() {
        let mut config = TemperatureConfig::default();
        config.search.rate_min = Frequency::new::<kilohertz>(-0.05);
        assert!(matches!(
            TemperatureModel::new(config),
            Err(CalibrationError::Constraint(_))
        ));
    }

    #[test]
    fn negative_asymptote_margin_is_rejected() {
        let mut config = TemperatureConfig::with_continuity(Continuity::C1);
        config.search.asymptote_floor = from_celsius(900.0);
        config.search.asymptote_margin = TemperatureInterval::new::<delta_kelvin>(-300.0);
        assert!(matches!(
            TemperatureModel::new(config),
            Err(CalibrationError::Constraint(_))
        ));
    }

    #[test]
    fn asymptote_floor_above_decay_samples_is_rejected() {
        let mut config = TemperatureConfig::default();
        config.search.asymptote_floor = ThermodynamicTemperature::new::<kelvin>(2000.0);
        config.search.asymptote_margin = TemperatureInterval::new::<delta_kelvin>(1.0);
        assert!(matches!(
            TemperatureModel::new(config),
            Err(CalibrationError::EmptyAsymptoteRange { .. })
        ));
    }
}

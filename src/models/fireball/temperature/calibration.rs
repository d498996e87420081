//! One-time fit of the rise and decay segments.

use tracing::debug;
use uom::si::{
    f64::{Frequency, ThermodynamicTemperature, Time},
    frequency::kilohertz,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::StrictlyPositive,
    fit::GridMinimum,
    grid::linspace,
    units::{
        TemperatureRate,
        conversions::{celsius, from_celsius, from_kelvin_per_millisecond, milliseconds},
    },
};

use super::{
    CalibrationError, Continuity, Segment, TemperatureConfig,
    blend::BlendWindow,
    decay::{self, Anchor, Decay},
    rise::Rise,
};

/// Fitted parameters and fit quality of a calibrated temperature model.
///
/// The rise polynomial is expressed in the calibration domain: time in
/// milliseconds and temperature in °C, highest power first.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub(super) rise_coefficients: Vec<f64>,
    pub(super) breakpoint: Time,
    pub(super) breakpoint_temperature: ThermodynamicTemperature,
    pub(super) breakpoint_rate: TemperatureRate,
    pub(super) asymptote: ThermodynamicTemperature,
    pub(super) decay_rate: Frequency,
    pub(super) decay_sse: f64,
    pub(super) r_squared: f64,
    pub(super) continuity: Continuity,
}

impl Calibration {
    /// Rise cubic coefficients (ms, °C), highest power first.
    #[must_use]
    pub fn rise_coefficients(&self) -> &[f64] {
        &self.rise_coefficients
    }

    #[must_use]
    pub fn breakpoint(&self) -> Time {
        self.breakpoint
    }

    /// Rise value `T0` at the breakpoint.
    #[must_use]
    pub fn breakpoint_temperature(&self) -> ThermodynamicTemperature {
        self.breakpoint_temperature
    }

    /// Rise slope `dT0` at the breakpoint.
    #[must_use]
    pub fn breakpoint_rate(&self) -> TemperatureRate {
        self.breakpoint_rate
    }

    /// Decay asymptote `A`.
    #[must_use]
    pub fn asymptote(&self) -> ThermodynamicTemperature {
        self.asymptote
    }

    /// Decay rate constant `k`; 1/ms is kHz.
    #[must_use]
    pub fn decay_rate(&self) -> Frequency {
        self.decay_rate
    }

    /// Sum of squared errors of the decay fit, in K².
    #[must_use]
    pub fn decay_sse(&self) -> f64 {
        self.decay_sse
    }

    /// Coefficient of determination of the stitched curve over all samples.
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    #[must_use]
    pub fn continuity(&self) -> Continuity {
        self.continuity
    }
}

/// Segments produced by [`fit`], before the stitched curve is assembled.
pub(super) struct Fitted {
    pub(super) rise: Rise,
    pub(super) decay: Decay,
    pub(super) blend: Option<BlendWindow>,
    pub(super) anchor: Anchor,
    pub(super) decay_sse: f64,
}

/// Partitions the samples at the breakpoint and fits both segments.
pub(super) fn fit(config: &TemperatureConfig) -> Result<Fitted, CalibrationError> {
    let t0 = milliseconds(config.breakpoint);
    if !t0.is_finite() || t0 < 0.0 {
        return Err(CalibrationError::InvalidBreakpoint {
            breakpoint: config.breakpoint,
        });
    }

    let blend = match config.continuity {
        Continuity::Blend { width } => {
            let width = StrictlyPositive::new(width)?.into_inner();
            Some(BlendWindow::centered(t0, milliseconds(width)))
        }
        Continuity::C1 => None,
    };

    let (rise_t, rise_y) = partition(config, |t| t <= t0);
    let (decay_t, decay_y) = partition(config, |t| t >= t0);
    require(Segment::Rise, rise_t.len())?;
    require(Segment::Decay, decay_t.len())?;

    let rise = Rise::fit(&rise_t, &rise_y)?;
    let anchor = Anchor {
        time: t0,
        value: rise.value(t0),
        rate: rise.rate(t0),
    };

    let asymptotes = asymptote_grid(config, &decay_y)?;

    let best: Option<GridMinimum<Decay>> = match blend {
        Some(_) => {
            let rates = rate_grid(config)?;
            decay::fit_free(anchor, &asymptotes, &rates, &decay_t, &decay_y)
        }
        None => decay::fit_matched_slope(anchor, &asymptotes, &decay_t, &decay_y),
    };
    let best = best.ok_or(CalibrationError::NoConvergence)?;

    Ok(Fitted {
        rise,
        decay: best.params,
        blend,
        anchor,
        decay_sse: best.sse,
    })
}

/// Builds the public report once the stitched curve can be evaluated.
pub(super) fn report(
    config: &TemperatureConfig,
    fitted: &Fitted,
    stitched: impl Fn(Time) -> ThermodynamicTemperature,
) -> Calibration {
    let observed: Vec<f64> = config
        .samples
        .iter()
        .map(|s| s.temperature.get::<kelvin>())
        .collect();
    let predicted: Vec<f64> = config
        .samples
        .iter()
        .map(|s| stitched(s.time).get::<kelvin>())
        .collect();
    let r_squared = coefficient_of_determination(&observed, &predicted);

    let calibration = Calibration {
        rise_coefficients: fitted.rise.polynomial().coefficients().to_vec(),
        breakpoint: config.breakpoint,
        breakpoint_temperature: from_celsius(fitted.anchor.value),
        breakpoint_rate: from_kelvin_per_millisecond(fitted.anchor.rate),
        asymptote: from_celsius(fitted.decay.asymptote()),
        decay_rate: Frequency::new::<kilohertz>(fitted.decay.rate_constant()),
        decay_sse: fitted.decay_sse,
        r_squared,
        continuity: config.continuity,
    };

    debug!(
        rise = ?calibration.rise_coefficients,
        t0_celsius = fitted.anchor.value,
        dt0_kelvin_per_ms = fitted.anchor.rate,
        asymptote_celsius = fitted.decay.asymptote(),
        k_per_ms = fitted.decay.rate_constant(),
        sse = fitted.decay_sse,
        r_squared,
        "calibrated fireball temperature"
    );

    calibration
}

fn partition(config: &TemperatureConfig, keep: impl Fn(f64) -> bool) -> (Vec<f64>, Vec<f64>) {
    config
        .samples
        .iter()
        .map(|s| (milliseconds(s.time), celsius(s.temperature)))
        .filter(|&(t, _)| keep(t))
        .unzip()
}

fn require(segment: Segment, found: usize) -> Result<(), CalibrationError> {
    const REQUIRED: usize = 1;
    if found < REQUIRED {
        return Err(CalibrationError::InsufficientSamples {
            segment,
            found,
            required: REQUIRED,
        });
    }
    Ok(())
}

/// Asymptote candidates in °C, from the search floor up to just below the
/// coolest decay observation.
fn asymptote_grid(
    config: &TemperatureConfig,
    decay_y: &[f64],
) -> Result<Vec<f64>, CalibrationError> {
    let search = &config.search;
    let margin = StrictlyPositive::new(search.asymptote_margin)?.into_inner();
    let floor = celsius(search.asymptote_floor);
    let coolest = decay_y.iter().copied().fold(f64::INFINITY, f64::min);
    let ceiling = coolest - margin.get::<delta_kelvin>();

    if !(floor <= ceiling) || search.asymptote_steps == 0 {
        return Err(CalibrationError::EmptyAsymptoteRange {
            floor: search.asymptote_floor,
            ceiling: from_celsius(ceiling),
        });
    }

    Ok(linspace(floor, ceiling, search.asymptote_steps))
}

/// Rate candidates in 1/ms. Both bounds must be positive and ordered.
fn rate_grid(config: &TemperatureConfig) -> Result<Vec<f64>, CalibrationError> {
    let search = &config.search;
    let min = StrictlyPositive::new(search.rate_min)?.into_inner();
    let max = StrictlyPositive::new(search.rate_max)?.into_inner();
    if min > max {
        return Err(CalibrationError::EmptyRateRange { min, max });
    }

    Ok(linspace(
        min.get::<kilohertz>(),
        max.get::<kilohertz>(),
        search.rate_steps,
    ))
}

/// `R² = 1 − SS_res / SS_tot`. A constant series scores 1 when matched exactly.
fn coefficient_of_determination(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;
    let ss_tot: f64 = observed.iter().map(|o| (o - mean) * (o - mean)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p) * (o - p))
        .sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

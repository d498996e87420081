use thiserror::Error;
use uom::si::f64::{Frequency, ThermodynamicTemperature, Time};

use crate::support::{constraint::ConstraintError, fit::FitError};

/// Which side of the breakpoint a calibration step concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Rise,
    Decay,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Segment::Rise => "rise",
            Segment::Decay => "decay",
        })
    }
}

/// Errors that can occur while calibrating a temperature model.
///
/// Calibration either succeeds completely or fails; no partially calibrated
/// model is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    /// No decay candidate satisfied the continuity constraints.
    #[error("decay fit did not converge: no admissible (A, k) candidate")]
    NoConvergence,

    /// The asymptote grid is empty for the given samples and search bounds.
    #[error("asymptote search range is empty: floor={floor:?}, ceiling={ceiling:?}")]
    EmptyAsymptoteRange {
        floor: ThermodynamicTemperature,
        ceiling: ThermodynamicTemperature,
    },

    /// The decay rate bounds are reversed.
    #[error("decay rate search range is empty: min={min:?}, max={max:?}")]
    EmptyRateRange { min: Frequency, max: Frequency },

    /// A segment has too few samples to be fitted.
    #[error("{segment} segment has {found} samples, at least {required} required")]
    InsufficientSamples {
        segment: Segment,
        found: usize,
        required: usize,
    },

    /// The breakpoint is not a finite, non-negative time.
    #[error("invalid breakpoint: {breakpoint:?}")]
    InvalidBreakpoint { breakpoint: Time },

    /// The rise polynomial could not be fitted.
    #[error("rise fit failed")]
    RiseFit(#[from] FitError),

    /// A configuration value violates its constraint.
    #[error("invalid configuration value")]
    Constraint(#[from] ConstraintError),
}

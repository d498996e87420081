//! Cubic rise segment, fitted in the millisecond/°C domain.

use crate::support::fit::{FitError, Polynomial, polyfit};

pub(super) const DEGREE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Rise {
    polynomial: Polynomial,
}

impl Rise {
    pub(super) fn fit(times_ms: &[f64], celsius: &[f64]) -> Result<Self, FitError> {
        Ok(Self {
            polynomial: polyfit(times_ms, celsius, DEGREE)?,
        })
    }

    pub(super) fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Temperature in °C at `t_ms`.
    pub(super) fn value(&self, t_ms: f64) -> f64 {
        self.polynomial.value(t_ms)
    }

    /// Slope in °C/ms at `t_ms`.
    pub(super) fn rate(&self, t_ms: f64) -> f64 {
        self.polynomial.derivative(t_ms)
    }
}

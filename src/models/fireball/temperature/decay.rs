//! Exponential decay segment `T(t) = A + (T0 − A)·exp(−k·(t − t0))`.
//!
//! Values are in °C and times in ms, so `k` is in 1/ms.

use crate::support::fit::{GridMinimum, grid_search, sum_squared_errors};

/// Rise value and slope at the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Anchor {
    pub(super) time: f64,
    pub(super) value: f64,
    pub(super) rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Decay {
    anchor: Anchor,
    asymptote: f64,
    rate_constant: f64,
}

impl Decay {
    pub(super) fn new(anchor: Anchor, asymptote: f64, rate_constant: f64) -> Self {
        Self {
            anchor,
            asymptote,
            rate_constant,
        }
    }

    pub(super) fn asymptote(&self) -> f64 {
        self.asymptote
    }

    pub(super) fn rate_constant(&self) -> f64 {
        self.rate_constant
    }

    pub(super) fn value(&self, t_ms: f64) -> f64 {
        let gap = self.anchor.value - self.asymptote;
        self.asymptote + gap * self.envelope(t_ms)
    }

    pub(super) fn rate(&self, t_ms: f64) -> f64 {
        let gap = self.anchor.value - self.asymptote;
        -self.rate_constant * gap * self.envelope(t_ms)
    }

    fn envelope(&self, t_ms: f64) -> f64 {
        (-self.rate_constant * (t_ms - self.anchor.time)).exp()
    }

    fn sse(&self, times_ms: &[f64], celsius: &[f64]) -> f64 {
        sum_squared_errors(celsius, times_ms.iter().map(|&t| self.value(t)))
    }
}

/// Searches asymptotes with `k` fixed by slope continuity, `k = −dT0 / (T0 − A)`.
///
/// Candidates with `T0 − A ≤ 0` or `k ≤ 0` are rejected.
pub(super) fn fit_matched_slope(
    anchor: Anchor,
    asymptotes: &[f64],
    times_ms: &[f64],
    celsius: &[f64],
) -> Option<GridMinimum<Decay>> {
    let candidates = asymptotes.iter().filter_map(|&asymptote| {
        let gap = anchor.value - asymptote;
        if gap <= 0.0 {
            return None;
        }
        let rate_constant = -anchor.rate / gap;
        (rate_constant > 0.0).then(|| Decay::new(anchor, asymptote, rate_constant))
    });

    grid_search(candidates, |decay| Some(decay.sse(times_ms, celsius)))
}

/// Searches asymptotes and rate constants jointly, asymptote-major.
pub(super) fn fit_free(
    anchor: Anchor,
    asymptotes: &[f64],
    rate_constants: &[f64],
    times_ms: &[f64],
    celsius: &[f64],
) -> Option<GridMinimum<Decay>> {
    let candidates = asymptotes.iter().flat_map(|&asymptote| {
        rate_constants
            .iter()
            .map(move |&rate_constant| Decay::new(anchor, asymptote, rate_constant))
    });

    grid_search(candidates, |decay| Some(decay.sse(times_ms, celsius)))
}

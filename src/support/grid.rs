//! Evenly spaced sample grids.
//!
//! Grids are plain computation arguments: a model evaluates over them but
//! does not own them.

use uom::si::{f64::Time, time::millisecond};

/// Returns `points` evenly spaced values from `start` to `end`, both included.
///
/// Matches the usual `linspace` convention: zero points yields an empty
/// vector, one point yields `[start]`, and the last value is exactly `end`.
///
/// ```
/// use fireball_models::support::grid::linspace;
///
/// assert_eq!(linspace(4.0, 6.0, 5), vec![4.0, 4.5, 5.0, 5.5, 6.0]);
/// assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
/// assert!(linspace(1.0, 2.0, 0).is_empty());
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let intervals = (points - 1) as f64;
            let step = (end - start) / intervals;
            let mut values: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
            values[points - 1] = end;
            values
        }
    }
}

/// An ordered grid of sample times.
///
/// The default grid spans the 0–140 ms fireball lifetime with 800 samples,
/// the window over which radiant exposure is integrated.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Time>,
}

impl TimeGrid {
    /// Start of the default exposure window.
    pub const DEFAULT_START_MS: f64 = 0.0;

    /// End of the default exposure window.
    pub const DEFAULT_END_MS: f64 = 140.0;

    /// Sample count of the default exposure window.
    pub const DEFAULT_POINTS: usize = 800;

    /// Creates an evenly spaced grid from `start` to `end`, both included.
    #[must_use]
    pub fn linspace(start: Time, end: Time, points: usize) -> Self {
        let times = linspace(
            start.get::<millisecond>(),
            end.get::<millisecond>(),
            points,
        )
        .into_iter()
        .map(Time::new::<millisecond>)
        .collect();
        Self { times }
    }

    /// Wraps an existing ordered sequence of times.
    ///
    /// Spacing need not be uniform.
    #[must_use]
    pub fn from_times(times: Vec<Time>) -> Self {
        Self { times }
    }

    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the grid has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::linspace(
            Time::new::<millisecond>(Self::DEFAULT_START_MS),
            Time::new::<millisecond>(Self::DEFAULT_END_MS),
            Self::DEFAULT_POINTS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linspace_hits_both_endpoints() {
        let values = linspace(0.0, 140.0, 800);
        assert_eq!(values.len(), 800);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[799], 140.0);
        assert_relative_eq!(values[1] - values[0], 140.0 / 799.0, epsilon = 1e-12);
    }

    #[test]
    fn default_time_grid_covers_exposure_window() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 800);
        assert_relative_eq!(grid.times()[0].get::<millisecond>(), 0.0);
        assert_relative_eq!(grid.times()[799].get::<millisecond>(), 140.0, epsilon = 1e-9);
    }
}

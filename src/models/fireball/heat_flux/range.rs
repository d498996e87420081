use uom::si::{f64::Length, length::meter};

use crate::support::{constraint::StrictlyPositive, grid::linspace};

use super::HeatFluxError;

/// Evenly spaced receiver distances for a sweep, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRange {
    min: Length,
    max: Length,
    points: usize,
}

impl DistanceRange {
    /// Creates a range of `points` distances from `min` to `max`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatFluxError::InvalidRange`] if `min ≥ max` or `points < 2`,
    /// and [`HeatFluxError::Constraint`] if `min` is not strictly positive.
    pub fn new(min: Length, max: Length, points: usize) -> Result<Self, HeatFluxError> {
        if !(min < max) || points < 2 {
            return Err(HeatFluxError::InvalidRange { min, max, points });
        }
        StrictlyPositive::new(min)?;
        Ok(Self { min, max, points })
    }

    #[must_use]
    pub fn min(&self) -> Length {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Length {
        self.max
    }

    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the distances in increasing order.
    #[must_use]
    pub fn distances(&self) -> Vec<Length> {
        linspace(self.min.get::<meter>(), self.max.get::<meter>(), self.points)
            .into_iter()
            .map(Length::new::<meter>)
            .collect()
    }
}

/// 4 to 6 m in 200 points.
impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            min: Length::new::<meter>(4.0),
            max: Length::new::<meter>(6.0),
            points: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn distances_span_range() {
        let range = DistanceRange::new(m(4.0), m(6.0), 5).unwrap();
        let meters: Vec<f64> = range.distances().iter().map(|d| d.get::<meter>()).collect();
        assert_eq!(meters, vec![4.0, 4.5, 5.0, 5.5, 6.0]);
    }

    #[test]
    fn rejects_empty_or_reversed_ranges() {
        for (min, max, points) in [(6.0, 4.0, 10), (5.0, 5.0, 10), (4.0, 6.0, 1), (4.0, 6.0, 0)] {
            assert_eq!(
                DistanceRange::new(m(min), m(max), points),
                Err(HeatFluxError::InvalidRange {
                    min: m(min),
                    max: m(max),
                    points
                })
            );
        }
        assert!(matches!(
            DistanceRange::new(m(f64::NAN), m(6.0), 10),
            Err(HeatFluxError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_start() {
        assert_eq!(
            DistanceRange::new(m(0.0), m(6.0), 10),
            Err(HeatFluxError::Constraint(ConstraintError::Zero))
        );
    }

    #[test]
    fn default_range() {
        let range = DistanceRange::default();
        assert_eq!(range.points(), 200);
        assert_eq!(range.distances().len(), 200);
    }
}

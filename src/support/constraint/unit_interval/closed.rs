use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Relative humidity is the typical use: any fraction of saturation, dry air
/// and saturated air included.
///
/// # Examples
///
/// ```
/// use fireball_models::support::constraint::{Constrained, UnitInterval};
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let rh = Constrained::<Ratio, UnitInterval>::new(Ratio::new::<percent>(48.0)).unwrap();
/// assert!((rh.as_ref().get::<percent>() - 48.0).abs() < 1e-12);
///
/// assert!(UnitInterval::new(Ratio::new::<percent>(100.0)).is_ok());
/// assert!(UnitInterval::new(Ratio::new::<percent>(120.0)).is_err());
/// assert!(UnitInterval::new(-0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

//! Numerical quadrature over sampled data.

/// Integrates sampled `y(x)` with the composite trapezoidal rule.
///
/// Each interval uses its own width, so non-uniform spacing is respected.
/// Fewer than two samples integrate to zero. Samples are paired in order;
/// if the slices differ in length the extra samples are ignored.
///
/// ```
/// use fireball_models::support::quadrature::trapezoid;
///
/// // Exact for piecewise-linear data, uneven spacing included.
/// let x = [0.0, 1.0, 3.0];
/// let y = [0.0, 2.0, 2.0];
/// assert_eq!(trapezoid(&y, &x), 5.0);
/// ```
#[must_use]
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    y.windows(2)
        .zip(x.windows(2))
        .map(|(y, x)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::grid::linspace;

    #[test]
    fn degenerate_inputs_integrate_to_zero() {
        assert_eq!(trapezoid(&[], &[]), 0.0);
        assert_eq!(trapezoid(&[3.0], &[1.0]), 0.0);
    }

    #[test]
    fn converges_on_smooth_integrand() {
        let x = linspace(0.0, 1.0, 1001);
        let y: Vec<f64> = x.iter().map(|x| x * x).collect();
        assert_relative_eq!(trapezoid(&y, &x), 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn uneven_spacing_matches_analytic_area() {
        // y = 2x sampled unevenly; the rule is exact for linear data.
        let x = [0.0, 0.1, 0.5, 0.6, 2.0];
        let y: Vec<f64> = x.iter().map(|x| 2.0 * x).collect();
        assert_relative_eq!(trapezoid(&y, &x), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn non_negative_integrand_gives_non_negative_area() {
        let x = [0.0, 0.2, 0.3, 1.0];
        let y = [0.0, 5.0, 0.0, 1.0];
        assert!(trapezoid(&y, &x) >= 0.0);
    }
}

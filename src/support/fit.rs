//! Curve-fitting utilities: polynomial least squares and SSE grid search.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Errors that can occur while fitting a curve to samples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    /// No samples were provided.
    #[error("no samples to fit")]
    Empty,

    /// The abscissa and ordinate slices have different lengths.
    #[error("mismatched sample lengths: x={x}, y={y}")]
    MismatchedLengths { x: usize, y: usize },

    /// The linear least-squares solve failed.
    #[error("least-squares solve failed: {0}")]
    LeastSquares(&'static str),
}

/// A polynomial stored with the highest power first.
///
/// `coefficients = [p3, p2, p1, p0]` represents `p3·x³ + p2·x² + p1·x + p0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered highest power first.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x` (Horner's scheme).
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }

    /// Evaluates the first derivative at `x`.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        let degree = self.coefficients.len().saturating_sub(1);
        self.coefficients[..degree]
            .iter()
            .enumerate()
            .fold(0.0, |acc, (i, c)| acc * x + c * (degree - i) as f64)
    }
}

/// Fits a polynomial of the given degree to `(x, y)` by linear least squares.
///
/// The Vandermonde columns are scaled to unit norm before solving, and the
/// solve goes through a singular value decomposition. With at least
/// `degree + 1` distinct abscissae this is the ordinary least-squares fit
/// (an exact interpolation when there are exactly `degree + 1`). With fewer
/// samples the system is underdetermined and the minimum-norm solution in
/// the scaled basis is returned, which still interpolates every sample.
///
/// # Errors
///
/// Returns [`FitError`] when there are no samples, the slices differ in
/// length, or the decomposition cannot be solved.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial, FitError> {
    if x.len() != y.len() {
        return Err(FitError::MismatchedLengths {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(FitError::Empty);
    }

    let rows = x.len();
    let columns = degree + 1;

    let mut vandermonde = DMatrix::from_fn(rows, columns, |i, j| {
        (0..degree - j).fold(1.0, |acc, _| acc * x[i])
    });

    let scales: Vec<f64> = (0..columns)
        .map(|j| {
            let norm = vandermonde.column(j).norm();
            if norm > 0.0 { norm } else { 1.0 }
        })
        .collect();
    for (j, scale) in scales.iter().enumerate() {
        vandermonde.column_mut(j).unscale_mut(*scale);
    }

    let rhs = DVector::from_column_slice(y);
    let svd = vandermonde.svd(true, true);
    let cutoff = svd.singular_values.max() * f64::EPSILON * rows as f64;
    let solution = svd.solve(&rhs, cutoff).map_err(FitError::LeastSquares)?;

    Ok(Polynomial::new(
        solution
            .iter()
            .zip(&scales)
            .map(|(c, scale)| c / scale)
            .collect(),
    ))
}

/// Sum of squared differences between observations and predictions.
#[must_use]
pub fn sum_squared_errors(observed: &[f64], predicted: impl IntoIterator<Item = f64>) -> f64 {
    observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p) * (o - p))
        .sum()
}

/// The winning candidate of a [`grid_search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMinimum<P> {
    /// Candidate parameters.
    pub params: P,
    /// Sum of squared errors at `params`.
    pub sse: f64,
}

/// Returns the candidate with the smallest sum of squared errors.
///
/// `objective` returns `None` to reject a candidate outright; a `NaN` error
/// is rejected the same way. Ties keep the first candidate encountered, so
/// results are reproducible for a given iteration order. Returns `None` if
/// every candidate is rejected.
///
/// ```
/// use fireball_models::support::fit::grid_search;
///
/// let best = grid_search([3.0, 1.0, -1.0, 2.0], |&p: &f64| {
///     (p > 0.0).then(|| (p - 1.5) * (p - 1.5))
/// })
/// .unwrap();
/// assert_eq!(best.params, 1.0);
/// ```
pub fn grid_search<P>(
    candidates: impl IntoIterator<Item = P>,
    objective: impl Fn(&P) -> Option<f64>,
) -> Option<GridMinimum<P>> {
    candidates
        .into_iter()
        .fold(None, |best: Option<GridMinimum<P>>, params| {
            let Some(sse) = objective(&params).filter(|sse| !sse.is_nan()) else {
                return best;
            };
            match best {
                Some(best) if best.sse <= sse => Some(best),
                _ => Some(GridMinimum { params, sse }),
            }
        })
}

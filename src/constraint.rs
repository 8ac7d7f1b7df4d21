//! A trait for inequality constraints. See [`Constraint`] for full documentation.

use nalgebra::{DMatrix, DVector};

use crate::derivatives;

/// A smooth inequality constraint of the form `g(x) <= 0`.
///
/// A point is feasible when the constraint value is non-positive and strictly interior when it is
/// negative. The barrier method requires a strictly interior starting point and keeps all
/// iterates interior.
///
/// Like [`ObjectiveFunction`][crate::ObjectiveFunction], only
/// [`evaluate`][Constraint::evaluate] must be provided and any `Fn(&DVector<f64>) -> f64`
/// closure works directly:
///
/// ```
/// use ipnewt::{DVector, IPNewtOptions};
///
/// // Constrain the search to the unit disk: x^2 + y^2 - 1 <= 0
/// let options = IPNewtOptions::new(2)
///     .constraint(|x: &DVector<f64>| x.magnitude_squared() - 1.0);
/// ```
pub trait Constraint {
    /// Returns the constraint value at `x` (feasible when `<= 0`).
    fn evaluate(&self, x: &DVector<f64>) -> f64;

    /// Returns the gradient of the constraint at `x`.
    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        derivatives::gradient(|point| self.evaluate(point), x)
    }

    /// Returns the Hessian of the constraint at `x`.
    fn hessian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        derivatives::hessian(|point| self.evaluate(point), x)
    }
}

impl<F: Fn(&DVector<f64>) -> f64> Constraint for F {
    fn evaluate(&self, x: &DVector<f64>) -> f64 {
        (self)(x)
    }
}

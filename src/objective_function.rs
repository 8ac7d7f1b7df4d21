//! A trait for types that can be used as an objective function. See [`ObjectiveFunction`] for
//! full documentation.

use nalgebra::{DMatrix, DVector};

use crate::derivatives;

/// A smooth scalar function to be minimized.
///
/// Only [`evaluate`][ObjectiveFunction::evaluate] must be provided; the gradient and Hessian
/// default to central finite differences of it, so any `Fn(&DVector<f64>) -> f64` closure can be
/// used directly. Implementing [`gradient`][ObjectiveFunction::gradient] and
/// [`hessian`][ObjectiveFunction::hessian] with exact derivatives will generally improve both
/// accuracy and evaluation counts.
///
/// # Examples
///
/// ```
/// use ipnewt::{DVector, ObjectiveFunction};
///
/// struct Sphere;
///
/// impl ObjectiveFunction for Sphere {
///     fn evaluate(&self, x: &DVector<f64>) -> f64 {
///         x.iter().map(|xi| xi.powi(2)).sum()
///     }
///
///     fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
///         2.0 * x
///     }
/// }
/// ```
pub trait ObjectiveFunction {
    /// Returns the value of the function at `x`.
    fn evaluate(&self, x: &DVector<f64>) -> f64;

    /// Returns the gradient of the function at `x`.
    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        derivatives::gradient(|point| self.evaluate(point), x)
    }

    /// Returns the Hessian of the function at `x`.
    fn hessian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        derivatives::hessian(|point| self.evaluate(point), x)
    }
}

impl<F: Fn(&DVector<f64>) -> f64> ObjectiveFunction for F {
    fn evaluate(&self, x: &DVector<f64>) -> f64 {
        (self)(x)
    }
}

//! Logarithmic barrier composition of an objective with inequality constraints.
//!
//! For a barrier parameter `mu`, the barrier function is
//! `f(x) - mu * sum(ln(-g_i(x)))`. Its value diverges to infinity as any constraint boundary is
//! approached from the interior, which keeps the line search from stepping outside the feasible
//! region. With no constraints the barrier function is `f` itself.

use nalgebra::{DMatrix, DVector};

use crate::constraint::Constraint;

/// The inequality constraints of a problem and the barrier terms they contribute.
pub(crate) struct Barrier<'a> {
    constraints: Vec<Box<dyn Constraint + 'a>>,
}

impl<'a> Barrier<'a> {
    pub fn new(constraints: Vec<Box<dyn Constraint + 'a>>) -> Self {
        Self { constraints }
    }

    /// Returns the number of constraints
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns whether `x` is strictly interior to every constraint
    pub fn is_interior(&self, x: &DVector<f64>) -> bool {
        self.constraints.iter().all(|c| c.evaluate(x) < 0.0)
    }

    /// Returns the barrier function value at `x` given the objective value there. Returns
    /// `INFINITY` outside the strict interior.
    pub fn value(&self, x: &DVector<f64>, objective_value: f64, mu: f64) -> f64 {
        let mut total = objective_value;

        for constraint in &self.constraints {
            let g = constraint.evaluate(x);
            if g >= 0.0 {
                return f64::INFINITY;
            }
            total -= mu * (-g).ln();
        }

        total
    }

    /// Returns the barrier function gradient at `x` given the objective gradient there.
    ///
    /// `d/dx [-mu * ln(-g)] = -(mu / g) * dg/dx`
    pub fn gradient(
        &self,
        x: &DVector<f64>,
        objective_gradient: DVector<f64>,
        mu: f64,
    ) -> DVector<f64> {
        let mut grad = objective_gradient;

        if mu > 0.0 {
            for constraint in &self.constraints {
                let g = constraint.evaluate(x);
                grad -= (mu / g) * constraint.gradient(x);
            }
        }

        grad
    }

    /// Returns the barrier function Hessian at `x` given the objective Hessian there.
    pub fn hessian(
        &self,
        x: &DVector<f64>,
        objective_hessian: DMatrix<f64>,
        mu: f64,
    ) -> DMatrix<f64> {
        let mut hess = objective_hessian;

        if mu > 0.0 {
            for constraint in &self.constraints {
                let g = constraint.evaluate(x);
                let dg = constraint.gradient(x);

                hess -= (mu / g) * constraint.hessian(x);
                hess += (mu / (g * g)) * &dg * dg.transpose();
            }
        }

        hess
    }
}

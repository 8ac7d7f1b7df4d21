//! Types related to initializing an [`IPNewt`]. See [`IPNewtOptions`] for full documentation.

use nalgebra::DVector;

use std::error::Error;
use std::fmt::{self, Debug};

use crate::constraint::Constraint;
use crate::{IPNewt, ObjectiveFunction};

/// A builder for [`IPNewt`]. Used to adjust parameters of the solver to each particular problem.
///
/// # Examples
///
/// ```
/// # use ipnewt::{DVector, IPNewtOptions};
/// let rosenbrock =
///     |x: &DVector<f64>| (1.0 - x[0]).powi(2) + (x[1] - x[0].powi(2)).powi(2);
/// let solver = IPNewtOptions::new(2)
///     .initial_point(vec![0.0, 0.5])
///     .tol_grad(1e-10)
///     .build(rosenbrock)
///     .unwrap();
/// ```
pub struct IPNewtOptions<'a> {
    /// Number of decision variables. Each is a free real scalar.
    pub dimensions: usize,
    /// Initial iterate. This should be set to a first guess at the solution and must be strictly
    /// interior to every constraint. Default value is the origin.
    pub initial_point: DVector<f64>,
    /// Inequality constraints of the form `g(x) <= 0`. Default is none (an unconstrained
    /// problem).
    pub constraints: Vec<Box<dyn Constraint + 'a>>,
    /// The value to use for the `GradTol` termination criterion (see
    /// [`TerminationReason`][crate::TerminationReason]). Default value is `1e-8`.
    pub tol_grad: f64,
    /// The value to use for the `StepTol` termination criterion (see
    /// [`TerminationReason`][crate::TerminationReason]). Default value is `1e-14`.
    pub tol_step: f64,
    /// The value to use for the `FunTarget` termination criterion (see
    /// [`TerminationReason`][crate::TerminationReason]). Default value is `None` (disabled).
    pub fun_target: Option<f64>,
    /// The maximum number of Newton steps. Default value is `500`.
    pub max_iterations: Option<usize>,
    /// The maximum number of objective function evaluations. Default value is `None` (no limit).
    pub max_function_evals: Option<usize>,
    /// The initial barrier parameter. Only relevant for constrained problems. Default value is
    /// `1.0`.
    pub mu_initial: f64,
    /// The factor applied to the barrier parameter each time a barrier subproblem converges.
    /// Default value is `0.1`.
    pub mu_reduction: f64,
    /// The floor of the barrier parameter. Default value is `1e-9`.
    pub mu_min: f64,
    /// The Armijo sufficient-decrease coefficient for the line search. Default value is `1e-4`.
    pub armijo_c1: f64,
    /// The factor applied to the step size on each line search backtrack. Default value is `0.5`.
    pub backtrack_factor: f64,
    /// The maximum number of line search backtracks per step. Default value is `60`.
    pub max_backtracks: usize,
    /// The maximum number of diagonal shifts when regularizing an indefinite Hessian. Default
    /// value is `30`.
    pub max_regularizations: usize,
    /// The minimum number of iterations to wait for in between each automatic
    /// [`IPNewt::print_info`] call. Default value is `None` (printing disabled).
    pub print_gap_iters: Option<usize>,
}

impl<'a> IPNewtOptions<'a> {
    /// Creates a new `IPNewtOptions` with default values. Set individual options using the
    /// provided methods.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            initial_point: DVector::zeros(dimensions),
            constraints: Vec::new(),
            tol_grad: 1e-8,
            tol_step: 1e-14,
            fun_target: None,
            max_iterations: Some(500),
            max_function_evals: None,
            mu_initial: 1.0,
            mu_reduction: 0.1,
            mu_min: 1e-9,
            armijo_c1: 1e-4,
            backtrack_factor: 0.5,
            max_backtracks: 60,
            max_regularizations: 30,
            print_gap_iters: None,
        }
    }

    /// Changes the initial point from the origin.
    pub fn initial_point<V: Into<DVector<f64>>>(mut self, initial_point: V) -> Self {
        self.initial_point = initial_point.into();
        self
    }

    /// Adds an inequality constraint `g(x) <= 0` to the problem.
    pub fn constraint<C: Constraint + 'a>(mut self, constraint: C) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Changes the value for the `GradTol` termination criterion from the default value.
    pub fn tol_grad(mut self, tol_grad: f64) -> Self {
        self.tol_grad = tol_grad;
        self
    }

    /// Changes the value for the `StepTol` termination criterion from the default value.
    pub fn tol_step(mut self, tol_step: f64) -> Self {
        self.tol_step = tol_step;
        self
    }

    /// Sets the value for the `FunTarget` termination criterion.
    pub fn fun_target(mut self, fun_target: f64) -> Self {
        self.fun_target = Some(fun_target);
        self
    }

    /// Changes the maximum number of Newton steps from the default value.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the maximum number of objective function evaluations.
    pub fn max_function_evals(mut self, max_function_evals: usize) -> Self {
        self.max_function_evals = Some(max_function_evals);
        self
    }

    /// Changes the initial barrier parameter from the default value.
    pub fn mu_initial(mut self, mu_initial: f64) -> Self {
        self.mu_initial = mu_initial;
        self
    }

    /// Changes the barrier reduction factor from the default value.
    pub fn mu_reduction(mut self, mu_reduction: f64) -> Self {
        self.mu_reduction = mu_reduction;
        self
    }

    /// Changes the barrier parameter floor from the default value.
    pub fn mu_min(mut self, mu_min: f64) -> Self {
        self.mu_min = mu_min;
        self
    }

    /// Enables automatic printing of the state of the solver every `min_gap_iters` iterations.
    pub fn enable_printing(mut self, min_gap_iters: usize) -> Self {
        self.print_gap_iters = Some(min_gap_iters);
        self
    }

    /// Attempts to build the [`IPNewt`] using the chosen options.
    pub fn build<F: ObjectiveFunction + 'a>(
        self,
        objective_function: F,
    ) -> Result<IPNewt<'a>, InvalidOptionsError> {
        IPNewt::new(Box::new(objective_function), self)
    }
}

/// Represents invalid options for the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidOptionsError {
    /// The number of dimensions is set to zero.
    Dimensions,
    /// The dimension of the initial point does not match the chosen dimension.
    PointDimensionMismatch,
    /// A tolerance is non-positive or not finite.
    Tolerances,
    /// The barrier parameters are invalid (`mu_initial` or `mu_min` non-positive,
    /// `mu_reduction` outside `(0, 1)`).
    BarrierParameters,
    /// The line search parameters are invalid (`armijo_c1` or `backtrack_factor` outside
    /// `(0, 1)`).
    LineSearchParameters,
    /// The initial point is not strictly interior to every constraint.
    InfeasibleInitialPoint,
}

impl fmt::Display for InvalidOptionsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(self, fmt)
    }
}

impl Error for InvalidOptionsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IPNewtOptions::new(2);

        assert_eq!(2, options.dimensions);
        assert_eq!(DVector::zeros(2), options.initial_point);
        assert!(options.constraints.is_empty());
        assert_eq!(1e-8, options.tol_grad);
        assert_eq!(Some(500), options.max_iterations);
        assert_eq!(None, options.print_gap_iters);
    }

    #[test]
    fn test_builder() {
        let options = IPNewtOptions::new(2)
            .initial_point(vec![1.0, 2.0])
            .constraint(|x: &DVector<f64>| x[0] - 1.0)
            .fun_target(1e-12)
            .enable_printing(10);

        assert_eq!(DVector::from(vec![1.0, 2.0]), options.initial_point);
        assert_eq!(1, options.constraints.len());
        assert_eq!(Some(1e-12), options.fun_target);
        assert_eq!(Some(10), options.print_gap_iters);
    }
}

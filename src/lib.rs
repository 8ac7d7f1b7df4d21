//! An implementation of a log-barrier interior-point Newton method for minimizing smooth
//! nonlinear functions of real variables, optionally subject to smooth inequality constraints.
//! It also provides grid sampling and contour rendering of 2-D objectives for visualizing the
//! computed optimum.
//!
//! # Quick Start
//!
//! To minimize a function, simply create and build an [`IPNewtOptions`] and call
//! [`IPNewt::run`]. Customization of algorithm parameters should be done on a per-problem basis
//! using [`IPNewtOptions`]. See [`ContourPlot`][crate::plotting::ContourPlot] for rendering of
//! 2-D objectives.
//!
//! ```no_run
//! use ipnewt::{DVector, IPNewtOptions};
//!
//! let rosenbrock =
//!     |x: &DVector<f64>| (1.0 - x[0]).powi(2) + (x[1] - x[0].powi(2)).powi(2);
//!
//! let mut solver = IPNewtOptions::new(2)
//!     .enable_printing(1)
//!     .build(rosenbrock)
//!     .unwrap();
//!
//! let result = solver.run();
//! println!("{:?}", result.solution.point);
//! ```
//!
//! The [`objective_function`] module provides a trait that allows for custom objective function
//! types with exact derivatives, the [`constraint`] module does the same for inequality
//! constraints, and the [`IPNewt::next`] method provides finer control over iteration if needed.

// lib.rs contains the top-level `IPNewt` type that implements the algorithm and interface as
// well as some user-facing types for termination data.
//
// Configuration is handled in the `options` module.
//
// Iteration happens in `IPNewt::next`; the Newton system solve is below, the step acceptance is
// in the `linesearch` module, and the barrier composition is in the `barrier` module.
//
// Termination criteria are handled in the `termination` module.
//
// Grid sampling and contour rendering are independent of the solver and live in the `grid` and
// `plotting` modules.

mod barrier;
mod derivatives;
mod evaluator;
mod functions;
mod linesearch;
mod state;

pub mod constraint;
pub mod grid;
pub mod objective_function;
pub mod options;
pub mod parameters;
#[cfg(feature = "plotters")]
pub mod plotting;
pub mod termination;
mod utils;

pub use nalgebra::DVector;

pub use crate::constraint::Constraint;
pub use crate::functions::fmin;
pub use crate::objective_function::ObjectiveFunction;
pub use crate::options::IPNewtOptions;
pub use crate::termination::TerminationReason;

use nalgebra::{Cholesky, DMatrix};

use crate::barrier::Barrier;
use crate::evaluator::Evaluator;
use crate::linesearch::LineSearch;
use crate::options::InvalidOptionsError;
use crate::parameters::Parameters;
use crate::state::State;

/// A point with its corresponding objective function value.
#[derive(Clone, Debug)]
pub struct Solution {
    pub point: DVector<f64>,
    pub value: f64,
}

/// Data returned when the solver terminates.
///
/// Contains the final iterate and the reason for termination, which can be used to decide how to
/// interpret the result.
#[derive(Clone, Debug)]
pub struct TerminationData {
    pub solution: Solution,
    pub reason: TerminationReason,
}

/// A type that handles algorithm iteration and printing of results. Use [`IPNewtOptions`] to
/// create an `IPNewt`.
///
/// # Lifetimes
///
/// The objective function and constraints may be non-`'static` (i.e., they borrow something), so
/// there is a lifetime parameter. If this functionality is not needed and the `IPNewt` type must
/// be specified somewhere, the lifetime can simply be set to `'static`:
///
/// ```
/// # use ipnewt::IPNewt;
/// struct Container(IPNewt<'static>);
/// ```
pub struct IPNewt<'a> {
    /// Objective function evaluator/counter
    evaluator: Evaluator<'a>,
    /// The inequality constraints and their barrier terms
    barrier: Barrier<'a>,
    /// Constant parameters
    parameters: Parameters,
    /// The line search used to accept steps
    line_search: LineSearch,
    /// Variable state
    state: State,
    /// The minimum number of iterations to wait for in between each automatic
    /// [`IPNewt::print_info`] call
    print_gap_iters: Option<usize>,
    /// The last time [`IPNewt::print_info`] was called, in iterations
    last_print_iter: usize,
}

impl<'a> IPNewt<'a> {
    /// Initializes an `IPNewt` from a set of [`IPNewtOptions`]. [`IPNewtOptions::build`] should
    /// generally be used instead.
    pub fn new(
        objective_function: Box<dyn ObjectiveFunction + 'a>,
        options: IPNewtOptions<'a>,
    ) -> Result<Self, InvalidOptionsError> {
        // Check for invalid options
        if options.dimensions == 0 {
            return Err(InvalidOptionsError::Dimensions);
        }

        if options.dimensions != options.initial_point.len() {
            return Err(InvalidOptionsError::PointDimensionMismatch);
        }

        if !options.tol_grad.is_normal()
            || options.tol_grad <= 0.0
            || !options.tol_step.is_normal()
            || options.tol_step <= 0.0
        {
            return Err(InvalidOptionsError::Tolerances);
        }

        if !options.mu_initial.is_normal()
            || options.mu_initial <= 0.0
            || !options.mu_min.is_normal()
            || options.mu_min <= 0.0
            || !(options.mu_reduction > 0.0 && options.mu_reduction < 1.0)
        {
            return Err(InvalidOptionsError::BarrierParameters);
        }

        if !(options.armijo_c1 > 0.0 && options.armijo_c1 < 1.0)
            || !(options.backtrack_factor > 0.0 && options.backtrack_factor < 1.0)
        {
            return Err(InvalidOptionsError::LineSearchParameters);
        }

        // Initialize constant parameters according to the options
        let parameters = Parameters::from_options(&options);
        let line_search = LineSearch::new(
            parameters.armijo_c1(),
            parameters.backtrack_factor(),
            parameters.max_backtracks(),
        );

        // The barrier requires a strictly feasible start
        let barrier = Barrier::new(options.constraints);
        if !barrier.is_interior(&options.initial_point) {
            return Err(InvalidOptionsError::InfeasibleInitialPoint);
        }

        // Initialize variable state; an invalid initial value is caught on the first call to
        // `next`
        let mut evaluator = Evaluator::new(objective_function);
        let initial_value = evaluator
            .evaluate(&options.initial_point)
            .unwrap_or(f64::NAN);
        let mu = if barrier.is_empty() {
            0.0
        } else {
            parameters.mu_initial()
        };
        let state = State::new(options.initial_point, initial_value, mu);

        let ipnewt = Self {
            evaluator,
            barrier,
            parameters,
            line_search,
            state,
            print_gap_iters: options.print_gap_iters,
            last_print_iter: 0,
        };

        // Print initial info
        if ipnewt.print_gap_iters.is_some() {
            ipnewt.print_initial_info();
        }

        Ok(ipnewt)
    }

    /// Iterates the algorithm until termination. [`next`][Self::next] can be called manually if
    /// more control over termination is needed (printing the final state must be done manually
    /// as well in this case).
    pub fn run(&mut self) -> TerminationData {
        let result = loop {
            if let Some(data) = self.next() {
                break data;
            }
        };

        // Print the final state
        if self.print_gap_iters.is_some() {
            self.print_final_info(result.reason);
        }

        result
    }

    /// Advances by one Newton step. Returns `Some` if a termination condition has been reached
    /// and the algorithm should be stopped. [`run`][Self::run] is generally easier to use, but
    /// iteration can be performed manually if finer control is needed (printing the final state
    /// must be done manually as well in this case).
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn next(&mut self) -> Option<TerminationData> {
        if self.state.value().is_nan() {
            return Some(self.get_termination_data(TerminationReason::InvalidFunctionValue));
        }

        let mu = self.state.mu();
        let point = self.state.point().clone();

        // Gradient of the barrier function at the current iterate
        let objective_gradient = self.evaluator.gradient(&point);
        let gradient = self.barrier.gradient(&point, objective_gradient, mu);
        self.state.set_gradient_norm(gradient.amax());

        // Inner convergence of the current barrier subproblem tightens the barrier parameter
        // rather than terminating
        if mu > self.parameters.mu_min()
            && self.state.gradient_norm() <= self.parameters.tol_grad().max(mu)
        {
            self.state
                .reduce_mu(self.parameters.mu_reduction(), self.parameters.mu_min());
            return None;
        }

        // Terminate with the current iterate if any termination criterion is met
        if let Some(reason) = termination::check_termination_criteria(
            &self.parameters,
            &self.state,
            self.evaluator.function_evals(),
        ) {
            return Some(self.get_termination_data(reason));
        }

        // Newton direction from the (regularized) barrier Hessian
        let objective_hessian = self.evaluator.hessian(&point);
        let hessian = self.barrier.hessian(&point, objective_hessian, mu);
        let direction = match newton_direction(
            &hessian,
            &gradient,
            self.parameters.max_regularizations(),
        ) {
            Some(direction) => direction,
            None => return Some(self.get_termination_data(TerminationReason::SingularHessian)),
        };

        // Accept a step along the direction
        let directional_derivative = gradient.dot(&direction);
        let barrier_value = self.barrier.value(&point, self.state.value(), mu);

        let evaluator = &mut self.evaluator;
        let barrier = &self.barrier;
        let search_result =
            self.line_search
                .search(barrier_value, directional_derivative, |step_size| {
                    let trial = &point + step_size * &direction;
                    Ok(barrier.value(&trial, evaluator.evaluate(&trial)?, mu))
                });

        let step_size = match search_result {
            Ok(Some(result)) => result.step_size,
            Ok(None) => {
                return Some(self.get_termination_data(TerminationReason::LineSearchFailure))
            }
            Err(_) => {
                return Some(self.get_termination_data(TerminationReason::InvalidFunctionValue))
            }
        };

        let step = step_size * &direction;
        let new_point = &point + &step;
        let new_value = match self.evaluator.evaluate(&new_point) {
            Ok(value) => value,
            Err(_) => {
                return Some(self.get_termination_data(TerminationReason::InvalidFunctionValue))
            }
        };
        self.state
            .advance(new_point, new_value, step_size, step.amax());

        // Print latest state
        if let Some(gap_iters) = self.print_gap_iters {
            // The first few iterations are always printed, then print_gap_iters is respected
            if self.state.iteration() >= self.last_print_iter + gap_iters {
                self.print_info();
                self.last_print_iter = self.state.iteration();
            } else if self.state.iteration() < 4 {
                // Don't update last_print_iter so the printed iteration numbers can remain
                // multiples of the gap
                self.print_info();
            }
        }

        None
    }

    /// Returns the constant parameters of the solver.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the number of Newton steps that have been completed.
    pub fn iteration(&self) -> usize {
        self.state.iteration()
    }

    /// Returns the number of times the objective function has been evaluated.
    pub fn function_evals(&self) -> usize {
        self.evaluator.function_evals()
    }

    /// Returns the number of gradient evaluations made.
    pub fn gradient_evals(&self) -> usize {
        self.evaluator.gradient_evals()
    }

    /// Returns the number of Hessian evaluations made.
    pub fn hessian_evals(&self) -> usize {
        self.evaluator.hessian_evals()
    }

    /// Returns the current iterate.
    pub fn point(&self) -> &DVector<f64> {
        self.state.point()
    }

    /// Returns the objective function value at the current iterate.
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    /// Returns the infinity norm of the barrier gradient at the current iterate.
    pub fn gradient_norm(&self) -> f64 {
        self.state.gradient_norm()
    }

    /// Returns the current barrier parameter (zero for unconstrained problems).
    pub fn mu(&self) -> f64 {
        self.state.mu()
    }

    /// Returns the current iterate and its objective function value.
    pub fn solution(&self) -> Solution {
        Solution {
            point: self.state.point().clone(),
            value: self.state.value(),
        }
    }

    /// Consumes `self` and returns the objective function.
    pub fn into_objective_function(self) -> Box<dyn ObjectiveFunction + 'a> {
        self.evaluator.into_objective_function()
    }

    /// Returns a `TerminationData` with the current iterate and the given reason.
    fn get_termination_data(&self, reason: TerminationReason) -> TerminationData {
        TerminationData {
            solution: self.solution(),
            reason,
        }
    }

    /// Prints various initial parameters of the solver as well as the headers for the columns
    /// printed by [`print_info`][Self::print_info]. The parameters that are printed are the:
    ///
    /// - Dimension (N)
    /// - Number of inequality constraints
    ///
    /// This function is called automatically if [`IPNewtOptions::enable_printing`] is set.
    pub fn print_initial_info(&self) {
        println!(
            "IPNewt with dimension={}, constraints={}",
            self.parameters.dimensions(),
            self.barrier.len()
        );

        let title_string = format!(
            "{:^7} | {:^7} | {:^19} | {:^10} | {:^10} | {:^10}",
            "Iter", "f evals", "Function value", "Grad norm", "Step size", "Mu",
        );

        println!("{}", title_string);
        println!("{}", "-".repeat(title_string.chars().count()));
    }

    /// Prints various state variables of the solver. The variables that are printed are the:
    ///
    /// - Newton steps completed
    /// - Function evaluations made
    /// - Objective function value at the current iterate
    /// - Infinity norm of the barrier gradient
    /// - Line search step size of the last step
    /// - Barrier parameter
    ///
    /// This function is called automatically if [`IPNewtOptions::enable_printing`] is set.
    pub fn print_info(&self) {
        let iterations = format!("{:7}", self.state.iteration());
        let evals = format!("{:7}", self.evaluator.function_evals());
        let value = utils::format_num(self.state.value(), 19);
        let gradient_norm = utils::format_num(self.state.gradient_norm(), 11);
        let step_size = utils::format_num(self.state.step_size(), 11);
        let mu = utils::format_num(self.state.mu(), 11);

        println!(
            "{} | {} | {} |{} |{} |{}",
            iterations, evals, value, gradient_norm, step_size, mu
        );
    }

    /// Calls [`print_info`][Self::print_info] if not already called automatically this iteration
    /// and prints the results. The values that are printed are the:
    ///
    /// - Termination reason
    /// - Final objective function value
    /// - Final iterate
    ///
    /// This function is called automatically if [`IPNewtOptions::enable_printing`] is set. Must
    /// be called manually after termination to print the final state if [`run`][Self::run] isn't
    /// used.
    pub fn print_final_info(&self, termination_reason: TerminationReason) {
        if self.state.iteration() != self.last_print_iter {
            self.print_info();
        }

        println!("Terminated with reason `{}`", termination_reason);
        println!("Final function value: {:e}", self.state.value());
        println!("Final point: {}", self.state.point());
    }
}

/// Solves the Newton system `H p = -g` with Cholesky, shifting the diagonal of `H` by growing
/// multiples of the identity until the factorization succeeds. Returns `None` if the matrix
/// could not be factorized within `max_shifts` shifts.
fn newton_direction(
    hessian: &DMatrix<f64>,
    gradient: &DVector<f64>,
    max_shifts: usize,
) -> Option<DVector<f64>> {
    // Non-finite derivatives can never be factorized
    if hessian.iter().any(|e| !e.is_finite()) {
        return None;
    }

    let dim = hessian.nrows();
    let scale = hessian.diagonal().amax().max(1.0);
    let mut shift = 0.0;

    for _ in 0..=max_shifts {
        let mut shifted = hessian.clone();
        for i in 0..dim {
            shifted[(i, i)] += shift;
        }

        if let Some(cholesky) = Cholesky::new(shifted) {
            return Some(cholesky.solve(&(-gradient)));
        }

        shift = if shift == 0.0 { 1e-8 * scale } else { shift * 10.0 };
    }

    None
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};

    use super::*;

    fn dummy_function(_: &DVector<f64>) -> f64 {
        0.0
    }

    #[test]
    fn test_build() {
        assert!(IPNewtOptions::new(5).build(dummy_function).is_ok());
        assert!(IPNewtOptions::new(0).build(dummy_function).is_err());
        assert!(IPNewtOptions::new(5)
            .initial_point(vec![1.0; 2])
            .build(dummy_function)
            .is_err());
        assert!(IPNewtOptions::new(5)
            .tol_grad(-1.0)
            .build(dummy_function)
            .is_err());
        assert!(IPNewtOptions::new(5)
            .mu_reduction(2.0)
            .build(dummy_function)
            .is_err());
        assert!(IPNewtOptions::new(2)
            .constraint(|x: &DVector<f64>| x[0])
            .build(dummy_function)
            .is_err());
    }

    #[test]
    fn test_newton_direction() {
        // H = I, g = (2, -4) => p = (-2, 4)
        let hessian = DMatrix::identity(2, 2);
        let direction = newton_direction(&hessian, &dvector![2.0, -4.0], 30).unwrap();

        assert_eq!(dvector![-2.0, 4.0], direction);
    }

    #[test]
    fn test_newton_direction_indefinite() {
        // An indefinite matrix requires regularization but must still produce a direction
        let hessian = dmatrix![1.0, 0.0; 0.0, -1.0];
        let direction = newton_direction(&hessian, &dvector![1.0, 1.0], 30);

        assert!(direction.is_some());
    }

    #[test]
    fn test_newton_direction_non_finite() {
        let hessian = dmatrix![1.0, 0.0; 0.0, f64::NAN];
        let direction = newton_direction(&hessian, &dvector![1.0, 1.0], 30);

        assert!(direction.is_none());
    }

    #[test]
    fn test_solution_tracks_iterate() {
        let quadratic = |x: &DVector<f64>| (x[0] - 3.0).powi(2);
        let mut solver = IPNewtOptions::new(1).build(quadratic).unwrap();

        assert_eq!(dvector![0.0], solver.solution().point);
        assert_eq!(9.0, solver.solution().value);

        let _ = solver.next();

        assert!(solver.iteration() > 0);
        assert!(solver.solution().value < 9.0);
    }

    #[test]
    fn test_invalid_function_value() {
        let mut solver = IPNewtOptions::new(2)
            .build(|_: &DVector<f64>| f64::NAN)
            .unwrap();

        let data = solver.next().unwrap();
        assert_eq!(TerminationReason::InvalidFunctionValue, data.reason);
    }
}

//! Solver termination handling. See [`TerminationReason`] for full documentation.

use std::fmt::{self, Debug};

use crate::parameters::Parameters;
use crate::state::State;

/// Represents a reason for the solver terminating. `GradTol` is the normal converged outcome;
/// `Max*` bound iteration, and the remaining variants surface failures of the problem or its
/// formulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The infinity norm of the (barrier) gradient is below `tol_grad` with the barrier parameter
    /// at its floor. Indicates that the solver has converged to a stationary point.
    GradTol,
    /// The last completed step moved the iterate by less than `tol_step` in every coordinate.
    /// Indicates that no further progress is being made, usually at the accuracy limit of the
    /// supplied derivatives.
    StepTol,
    /// The target objective function value has been reached.
    FunTarget,
    /// The maximum number of Newton steps has been reached.
    MaxIterations,
    /// The maximum number of objective function evaluations has been reached.
    MaxFunctionEvals,
    /// The line search could not find a step producing sufficient decrease. This is likely due to
    /// inaccurate derivatives or an objective that is not smooth near the current iterate.
    LineSearchFailure,
    /// The Hessian could not be factorized even after maximal diagonal regularization. This
    /// usually means the derivatives contain invalid values.
    SingularHessian,
    /// The objective function has returned an invalid value (`NAN`).
    InvalidFunctionValue,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(self, fmt)
    }
}

/// Checks the state and evaluation counts against the termination criteria and returns the first
/// criterion that is met
pub(crate) fn check_termination_criteria(
    parameters: &Parameters,
    state: &State,
    function_evals: usize,
) -> Option<TerminationReason> {
    // Check TerminationReason::MaxFunctionEvals
    if let Some(max_function_evals) = parameters.max_function_evals() {
        if function_evals >= max_function_evals {
            return Some(TerminationReason::MaxFunctionEvals);
        }
    }

    // Check TerminationReason::MaxIterations
    if let Some(max_iterations) = parameters.max_iterations() {
        if state.iteration() >= max_iterations {
            return Some(TerminationReason::MaxIterations);
        }
    }

    // Check TerminationReason::FunTarget
    if let Some(fun_target) = parameters.fun_target() {
        if state.value() <= fun_target {
            return Some(TerminationReason::FunTarget);
        }
    }

    // GradTol and StepTol only apply once the barrier parameter has reached its floor;
    // convergence of an intermediate barrier subproblem triggers a reduction of mu instead
    let barrier_finished = state.mu() <= parameters.mu_min();

    // Check TerminationReason::GradTol
    if barrier_finished && state.gradient_norm() <= parameters.tol_grad() {
        return Some(TerminationReason::GradTol);
    }

    // Check TerminationReason::StepTol
    if barrier_finished && state.iteration() > 0 && state.step_norm() <= parameters.tol_step() {
        return Some(TerminationReason::StepTol);
    }

    None
}

#[cfg(test)]
mod tests {
    use nalgebra::dvector;

    use super::*;
    use crate::options::IPNewtOptions;

    fn parameters(options: &IPNewtOptions) -> Parameters {
        Parameters::from_options(options)
    }

    fn state(value: f64, mu: f64) -> State {
        State::new(dvector![0.0, 0.0], value, mu)
    }

    #[test]
    fn test_no_termination() {
        let options = IPNewtOptions::new(2);
        let state = state(1.0, 0.0);

        assert_eq!(
            None,
            check_termination_criteria(&parameters(&options), &state, 10)
        );
    }

    #[test]
    fn test_max_function_evals() {
        let options = IPNewtOptions::new(2).max_function_evals(100);
        let state = state(1.0, 0.0);

        assert_eq!(
            Some(TerminationReason::MaxFunctionEvals),
            check_termination_criteria(&parameters(&options), &state, 100)
        );
    }

    #[test]
    fn test_max_iterations() {
        let options = IPNewtOptions::new(2).max_iterations(0);
        let state = state(1.0, 0.0);

        assert_eq!(
            Some(TerminationReason::MaxIterations),
            check_termination_criteria(&parameters(&options), &state, 0)
        );
    }

    #[test]
    fn test_fun_target() {
        let options = IPNewtOptions::new(2).fun_target(1e-12);
        let state = state(1e-13, 0.0);

        assert_eq!(
            Some(TerminationReason::FunTarget),
            check_termination_criteria(&parameters(&options), &state, 0)
        );
    }

    #[test]
    fn test_grad_tol() {
        let options = IPNewtOptions::new(2);
        let mut state = state(1.0, 0.0);
        state.set_gradient_norm(1e-9);

        assert_eq!(
            Some(TerminationReason::GradTol),
            check_termination_criteria(&parameters(&options), &state, 0)
        );
    }

    #[test]
    fn test_grad_tol_waits_for_barrier() {
        // A small gradient with the barrier parameter still above its floor must not terminate
        let options = IPNewtOptions::new(2);
        let mut state = state(1.0, 1.0);
        state.set_gradient_norm(1e-9);

        assert_eq!(
            None,
            check_termination_criteria(&parameters(&options), &state, 0)
        );
    }

    #[test]
    fn test_step_tol() {
        let options = IPNewtOptions::new(2);
        let mut state = state(1.0, 0.0);
        state.advance(dvector![0.0, 0.0], 1.0, 1.0, 1e-15);

        assert_eq!(
            Some(TerminationReason::StepTol),
            check_termination_criteria(&parameters(&options), &state, 0)
        );
    }
}

//! Constant parameters of the solver, fixed at initialization.

use crate::options::IPNewtOptions;

/// Constant parameters of the solver. Obtained by calling
/// [`IPNewt::parameters`][crate::IPNewt::parameters].
#[derive(Clone, Debug)]
pub struct Parameters {
    /// The number of decision variables
    dimensions: usize,
    /// Value for the GradTol termination criterion
    tol_grad: f64,
    /// Value for the StepTol termination criterion
    tol_step: f64,
    /// Value for the FunTarget termination criterion (disabled if `None`)
    fun_target: Option<f64>,
    /// Value for the MaxIterations termination criterion (disabled if `None`)
    max_iterations: Option<usize>,
    /// Value for the MaxFunctionEvals termination criterion (disabled if `None`)
    max_function_evals: Option<usize>,
    /// The initial barrier parameter
    mu_initial: f64,
    /// Factor applied to the barrier parameter after each barrier subproblem converges
    mu_reduction: f64,
    /// The floor of the barrier parameter
    mu_min: f64,
    /// Armijo sufficient-decrease coefficient for the line search
    armijo_c1: f64,
    /// Factor applied to the step size on each line search backtrack
    backtrack_factor: f64,
    /// Maximum number of line search backtracks per step
    max_backtracks: usize,
    /// Maximum number of diagonal shifts when regularizing an indefinite Hessian
    max_regularizations: usize,
}

impl Parameters {
    /// Initializes the `Parameters` from the parameters set in `options`
    pub(crate) fn from_options(options: &IPNewtOptions) -> Self {
        Self {
            dimensions: options.dimensions,
            tol_grad: options.tol_grad,
            tol_step: options.tol_step,
            fun_target: options.fun_target,
            max_iterations: options.max_iterations,
            max_function_evals: options.max_function_evals,
            mu_initial: options.mu_initial,
            mu_reduction: options.mu_reduction,
            mu_min: options.mu_min,
            armijo_c1: options.armijo_c1,
            backtrack_factor: options.backtrack_factor,
            max_backtracks: options.max_backtracks,
            max_regularizations: options.max_regularizations,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn tol_grad(&self) -> f64 {
        self.tol_grad
    }

    pub fn tol_step(&self) -> f64 {
        self.tol_step
    }

    pub fn fun_target(&self) -> Option<f64> {
        self.fun_target
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn max_function_evals(&self) -> Option<usize> {
        self.max_function_evals
    }

    pub fn mu_initial(&self) -> f64 {
        self.mu_initial
    }

    pub fn mu_reduction(&self) -> f64 {
        self.mu_reduction
    }

    pub fn mu_min(&self) -> f64 {
        self.mu_min
    }

    pub fn armijo_c1(&self) -> f64 {
        self.armijo_c1
    }

    pub fn backtrack_factor(&self) -> f64 {
        self.backtrack_factor
    }

    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    pub fn max_regularizations(&self) -> usize {
        self.max_regularizations
    }
}

//! Variable state of the solver and updating of that state.

use nalgebra::DVector;

/// Stores the variable state of the solver
pub struct State {
    /// The number of Newton steps that have been completed
    iteration: usize,
    /// The current iterate
    point: DVector<f64>,
    /// The objective function value at `point` (without barrier terms)
    value: f64,
    /// The infinity norm of the barrier gradient at `point`
    gradient_norm: f64,
    /// The line search step size of the last completed step
    step_size: f64,
    /// The infinity norm of the last completed step
    step_norm: f64,
    /// The current barrier parameter (zero for unconstrained problems)
    mu: f64,
}

impl State {
    /// Initializes the variable state of the solver
    pub fn new(initial_point: DVector<f64>, initial_value: f64, mu: f64) -> Self {
        Self {
            iteration: 0,
            point: initial_point,
            value: initial_value,
            gradient_norm: f64::INFINITY,
            step_size: 0.0,
            step_norm: f64::INFINITY,
            mu,
        }
    }

    /// Completes a Newton step, replacing the iterate
    pub fn advance(&mut self, point: DVector<f64>, value: f64, step_size: f64, step_norm: f64) {
        self.point = point;
        self.value = value;
        self.step_size = step_size;
        self.step_norm = step_norm;
        self.iteration += 1;
    }

    pub fn set_gradient_norm(&mut self, gradient_norm: f64) {
        self.gradient_norm = gradient_norm;
    }

    /// Tightens the barrier parameter, clamping it to `floor`
    pub fn reduce_mu(&mut self, factor: f64, floor: f64) {
        self.mu = (self.mu * factor).max(floor);
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn point(&self) -> &DVector<f64> {
        &self.point
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn step_norm(&self) -> f64 {
        self.step_norm
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }
}

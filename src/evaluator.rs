//! A counting wrapper around the objective function used to track evaluation totals and detect
//! invalid function values.

use nalgebra::{DMatrix, DVector};

use crate::ObjectiveFunction;

/// A type that evaluates the objective function and its derivatives while counting each call
pub(crate) struct Evaluator<'a> {
    /// The objective function to minimize
    objective_function: Box<dyn ObjectiveFunction + 'a>,
    /// The number of times the objective function has been evaluated
    function_evals: usize,
    /// The number of gradient evaluations made
    gradient_evals: usize,
    /// The number of Hessian evaluations made
    hessian_evals: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(objective_function: Box<dyn ObjectiveFunction + 'a>) -> Self {
        Self {
            objective_function,
            function_evals: 0,
            gradient_evals: 0,
            hessian_evals: 0,
        }
    }

    /// Evaluates the objective function at `x`
    ///
    /// Returns `Err` if the objective function returned an invalid value
    pub fn evaluate(&mut self, x: &DVector<f64>) -> Result<f64, InvalidFunctionValueError> {
        self.function_evals += 1;
        let value = self.objective_function.evaluate(x);

        if value.is_nan() {
            Err(InvalidFunctionValueError)
        } else {
            Ok(value)
        }
    }

    /// Evaluates the gradient of the objective function at `x`
    pub fn gradient(&mut self, x: &DVector<f64>) -> DVector<f64> {
        self.gradient_evals += 1;
        self.objective_function.gradient(x)
    }

    /// Evaluates the Hessian of the objective function at `x`
    pub fn hessian(&mut self, x: &DVector<f64>) -> DMatrix<f64> {
        self.hessian_evals += 1;
        self.objective_function.hessian(x)
    }

    pub fn function_evals(&self) -> usize {
        self.function_evals
    }

    pub fn gradient_evals(&self) -> usize {
        self.gradient_evals
    }

    pub fn hessian_evals(&self) -> usize {
        self.hessian_evals
    }

    /// Consumes `self` and returns the objective function
    pub fn into_objective_function(self) -> Box<dyn ObjectiveFunction + 'a> {
        self.objective_function
    }
}

/// The objective function returned an invalid value (`NAN`)
#[derive(Clone, Debug)]
pub(crate) struct InvalidFunctionValueError;

#[cfg(test)]
mod tests {
    use nalgebra::dvector;

    use super::*;

    #[test]
    fn test_counts() {
        let sphere = |x: &DVector<f64>| x.magnitude_squared();
        let mut evaluator = Evaluator::new(Box::new(sphere));
        let x = dvector![1.0, 2.0];

        assert_eq!(5.0, evaluator.evaluate(&x).unwrap());
        let _ = evaluator.gradient(&x);
        let _ = evaluator.gradient(&x);
        let _ = evaluator.hessian(&x);

        assert_eq!(1, evaluator.function_evals());
        assert_eq!(2, evaluator.gradient_evals());
        assert_eq!(1, evaluator.hessian_evals());
    }

    #[test]
    fn test_invalid_value() {
        let mut evaluator = Evaluator::new(Box::new(|_: &DVector<f64>| f64::NAN));

        assert!(evaluator.evaluate(&dvector![0.0]).is_err());
        assert_eq!(1, evaluator.function_evals());
    }
}

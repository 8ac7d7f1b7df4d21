//! Armijo backtracking line search along a descent direction.

use crate::evaluator::InvalidFunctionValueError;

/// Parameters of the backtracking line search
#[derive(Clone, Debug)]
pub(crate) struct LineSearch {
    /// Armijo sufficient-decrease coefficient
    c1: f64,
    /// Factor applied to the step size on each backtrack
    backtrack_factor: f64,
    /// Maximum number of backtracks before giving up
    max_backtracks: usize,
}

/// An accepted line search step
#[derive(Clone, Debug)]
pub(crate) struct LineSearchResult {
    /// The accepted step size
    pub step_size: f64,
    /// The function value at the accepted step
    pub value: f64,
}

impl LineSearch {
    pub fn new(c1: f64, backtrack_factor: f64, max_backtracks: usize) -> Self {
        Self {
            c1,
            backtrack_factor,
            max_backtracks,
        }
    }

    /// Searches for a step size satisfying the Armijo condition, starting from the full step and
    /// backtracking. `value` is the function value at the current point and
    /// `directional_derivative` is the slope along the search direction there.
    ///
    /// Returns `Ok(None)` if no acceptable step was found within the backtrack budget and `Err`
    /// if `evaluate` returned an invalid value.
    pub fn search<F>(
        &self,
        value: f64,
        directional_derivative: f64,
        mut evaluate: F,
    ) -> Result<Option<LineSearchResult>, InvalidFunctionValueError>
    where
        F: FnMut(f64) -> Result<f64, InvalidFunctionValueError>,
    {
        let mut step_size = 1.0;

        for _ in 0..=self.max_backtracks {
            let trial_value = evaluate(step_size)?;

            if trial_value <= value + self.c1 * step_size * directional_derivative {
                return Ok(Some(LineSearchResult {
                    step_size,
                    value: trial_value,
                }));
            }

            step_size *= self.backtrack_factor;
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_search() -> LineSearch {
        LineSearch::new(1e-4, 0.5, 60)
    }

    #[test]
    fn test_accepts_full_step() {
        // Minimizing x^2 from x = 1 along p = -1; the full Newton step lands on the minimum
        let result = line_search()
            .search(1.0, -2.0, |alpha| Ok((1.0 - alpha).powi(2)))
            .unwrap()
            .unwrap();

        assert_eq!(1.0, result.step_size);
        assert_eq!(0.0, result.value);
    }

    #[test]
    fn test_backtracks() {
        // A step of 1 overshoots badly; the search must shrink the step until it decreases
        let result = line_search()
            .search(1.0, -2.0, |alpha| Ok((1.0 - 10.0 * alpha).powi(2)))
            .unwrap()
            .unwrap();

        assert!(result.step_size < 1.0);
        assert!(result.value < 1.0);
    }

    #[test]
    fn test_rejects_infinite_values() {
        // An infinite trial value (e.g. outside a barrier's interior) never satisfies the
        // decrease condition, so the search shrinks past it
        let result = line_search()
            .search(1.0, -2.0, |alpha| {
                if alpha > 0.5 {
                    Ok(f64::INFINITY)
                } else {
                    Ok((1.0 - alpha).powi(2))
                }
            })
            .unwrap()
            .unwrap();

        assert!(result.step_size <= 0.5);
    }

    #[test]
    fn test_no_decrease() {
        let result = line_search()
            .search(1.0, -2.0, |_| Ok(2.0))
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_value() {
        let result = line_search().search(1.0, -2.0, |_| Err(InvalidFunctionValueError));

        assert!(result.is_err());
    }
}

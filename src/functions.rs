//! Convenience functions for easier use of the library.

use nalgebra::DVector;

use crate::{IPNewtOptions, ObjectiveFunction, Solution};

const PRINT_GAP_ITERS: usize = 10;
const INVALID_OPTIONS: &str = "Invalid options";

/// Minimizes the value of `f` starting from `initial_point` and returns the solution found.
///
/// Equivalent to simply using the default [`IPNewtOptions`] with printing enabled.
/// [`IPNewtOptions`] should be used instead if further configuration is desired.
///
/// # Examples
///
/// ```
/// use ipnewt::DVector;
///
/// let sphere = |x: &DVector<f64>| x.iter().map(|xi| xi.powi(2)).sum::<f64>();
/// let solution = ipnewt::fmin(sphere, vec![5.0; 10]);
/// ```
pub fn fmin<F, V>(f: F, initial_point: V) -> Solution
where
    F: ObjectiveFunction,
    V: Into<DVector<f64>>,
{
    let initial_point = initial_point.into();

    IPNewtOptions::new(initial_point.len())
        .initial_point(initial_point)
        .enable_printing(PRINT_GAP_ITERS)
        .build(f)
        .expect(INVALID_OPTIONS)
        .run()
        .solution
}

//! Central finite-difference approximations of gradients and Hessians. Used as the default
//! derivative implementations for [`ObjectiveFunction`][crate::ObjectiveFunction] and
//! [`Constraint`][crate::constraint::Constraint] so that plain closures can be optimized without
//! supplying derivatives by hand.

use nalgebra::{DMatrix, DVector};

/// Relative step size for gradient differences (roughly `EPSILON.cbrt()`)
const GRADIENT_STEP: f64 = 6e-6;
/// Relative step size for Hessian differences (roughly `EPSILON.powf(0.25)`)
const HESSIAN_STEP: f64 = 1.2e-4;

/// Approximates the gradient of `f` at `x` using central differences
pub fn gradient<F: Fn(&DVector<f64>) -> f64>(f: F, x: &DVector<f64>) -> DVector<f64> {
    let dim = x.len();
    let mut grad = DVector::zeros(dim);
    let mut point = x.clone();

    for i in 0..dim {
        let h = GRADIENT_STEP * (1.0 + x[i].abs());

        point[i] = x[i] + h;
        let forward = f(&point);
        point[i] = x[i] - h;
        let backward = f(&point);
        point[i] = x[i];

        grad[i] = (forward - backward) / (2.0 * h);
    }

    grad
}

/// Approximates the Hessian of `f` at `x` using central second differences. The result is
/// symmetric by construction.
pub fn hessian<F: Fn(&DVector<f64>) -> f64>(f: F, x: &DVector<f64>) -> DMatrix<f64> {
    let dim = x.len();
    let center = f(x);
    let mut hess = DMatrix::zeros(dim, dim);
    let mut point = x.clone();
    let steps: Vec<f64> = (0..dim)
        .map(|i| HESSIAN_STEP * (1.0 + x[i].abs()))
        .collect();

    for i in 0..dim {
        let hi = steps[i];

        point[i] = x[i] + hi;
        let forward = f(&point);
        point[i] = x[i] - hi;
        let backward = f(&point);
        point[i] = x[i];

        hess[(i, i)] = (forward - 2.0 * center + backward) / (hi * hi);

        for j in (i + 1)..dim {
            let hj = steps[j];

            point[i] = x[i] + hi;
            point[j] = x[j] + hj;
            let pp = f(&point);
            point[j] = x[j] - hj;
            let pm = f(&point);
            point[i] = x[i] - hi;
            let mm = f(&point);
            point[j] = x[j] + hj;
            let mp = f(&point);
            point[i] = x[i];
            point[j] = x[j];

            let value = (pp - pm - mp + mm) / (4.0 * hi * hj);
            hess[(i, j)] = value;
            hess[(j, i)] = value;
        }
    }

    hess
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::{dvector, DVector};

    use super::*;

    fn rosenbrock(x: &DVector<f64>) -> f64 {
        (1.0 - x[0]).powi(2) + (x[1] - x[0].powi(2)).powi(2)
    }

    #[test]
    fn test_gradient() {
        // d/dx = -2(1 - x) - 4x(y - x^2), d/dy = 2(y - x^2)
        let x = dvector![0.0, 0.5];
        let grad = gradient(rosenbrock, &x);

        assert_approx_eq!(-2.0, grad[0], 1e-8);
        assert_approx_eq!(1.0, grad[1], 1e-8);
    }

    #[test]
    fn test_gradient_at_minimum() {
        let grad = gradient(rosenbrock, &dvector![1.0, 1.0]);

        assert_approx_eq!(0.0, grad[0], 1e-8);
        assert_approx_eq!(0.0, grad[1], 1e-8);
    }

    #[test]
    fn test_hessian() {
        // At (1, 1): [[2 + 8x^2 - 4(y - x^2), -4x], [-4x, 2]] = [[10, -4], [-4, 2]]
        let hess = hessian(rosenbrock, &dvector![1.0, 1.0]);

        assert_approx_eq!(10.0, hess[(0, 0)], 1e-3);
        assert_approx_eq!(-4.0, hess[(0, 1)], 1e-3);
        assert_approx_eq!(-4.0, hess[(1, 0)], 1e-3);
        assert_approx_eq!(2.0, hess[(1, 1)], 1e-3);
    }

    #[test]
    fn test_hessian_symmetry() {
        let f = |x: &DVector<f64>| x[0].powi(3) * x[1] + x[1].powi(2) * x[2];
        let hess = hessian(f, &dvector![1.5, -0.5, 2.0]);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(hess[(i, j)], hess[(j, i)]);
            }
        }
    }
}

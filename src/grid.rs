//! Rectilinear sampling grids for evaluating and visualizing 2-D objective functions.
//!
//! [`linspace`] and [`meshgrid`] follow the usual numerical-computing conventions: `linspace`
//! includes both endpoints, and `meshgrid` produces coordinate matrices of shape
//! `(y.len(), x.len())` where each row of the x matrix repeats `x` and each column of the y
//! matrix repeats `y`.

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

/// Returns `len` evenly spaced values from `start` to `stop`, endpoints inclusive
pub fn linspace(start: f64, stop: f64, len: usize) -> DVector<f64> {
    if len == 0 {
        return DVector::zeros(0);
    }
    if len == 1 {
        return DVector::from_element(1, start);
    }

    let step = (stop - start) / (len - 1) as f64;
    DVector::from_iterator(
        len,
        (0..len).map(|i| {
            if i == len - 1 {
                // Exact endpoint regardless of rounding in the increments
                stop
            } else {
                start + step * i as f64
            }
        }),
    )
}

/// Returns coordinate matrices spanning the rectangle `x` × `y`, both of shape
/// `(y.len(), x.len())`
pub fn meshgrid(x: &DVector<f64>, y: &DVector<f64>) -> (DMatrix<f64>, DMatrix<f64>) {
    let xx = DMatrix::from_fn(y.len(), x.len(), |_, j| x[j]);
    let yy = DMatrix::from_fn(y.len(), x.len(), |i, _| y[i]);
    (xx, yy)
}

/// A 2-D function sampled on a rectilinear grid: coordinate matrices `x` and `y` and the matrix
/// of function values `z` at each coordinate pair. Produced by [`SurfaceGrid::sample`] and
/// consumed by [`ContourPlot`][crate::plotting::ContourPlot].
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGrid {
    xx: DMatrix<f64>,
    yy: DMatrix<f64>,
    zz: DMatrix<f64>,
}

impl SurfaceGrid {
    /// Evaluates `f` at every coordinate pair of the grid spanned by `x` and `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipnewt::grid::{self, SurfaceGrid};
    ///
    /// let x = grid::linspace(-0.5, 1.5, 100);
    /// let y = grid::linspace(-0.5, 1.5, 100);
    /// let surface =
    ///     SurfaceGrid::sample(|x, y| (1.0 - x).powi(2) + (y - x.powi(2)).powi(2), &x, &y);
    ///
    /// assert_eq!((100, 100), surface.shape());
    /// ```
    pub fn sample<F: Fn(f64, f64) -> f64>(f: F, x: &DVector<f64>, y: &DVector<f64>) -> Self {
        let (xx, yy) = meshgrid(x, y);
        let zz = DMatrix::from_fn(y.len(), x.len(), |i, j| f(xx[(i, j)], yy[(i, j)]));

        Self { xx, yy, zz }
    }

    /// Like [`sample`][Self::sample], but evaluates `f` in parallel using multiple threads.
    /// Useful for expensive objective functions; the resulting grid is identical to the
    /// sequential one.
    pub fn sample_par<F>(f: F, x: &DVector<f64>, y: &DVector<f64>) -> Self
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        let (xx, yy) = meshgrid(x, y);
        let nrows = y.len();
        let ncols = x.len();

        // Column-major order to match DMatrix::from_vec
        let values = (0..nrows * ncols)
            .into_par_iter()
            .map(|k| {
                let (i, j) = (k % nrows, k / nrows);
                f(xx[(i, j)], yy[(i, j)])
            })
            .collect();
        let zz = DMatrix::from_vec(nrows, ncols, values);

        Self { xx, yy, zz }
    }

    /// Returns the shape of the grid as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.zz.nrows(), self.zz.ncols())
    }

    /// Returns the x-coordinate matrix
    pub fn x(&self) -> &DMatrix<f64> {
        &self.xx
    }

    /// Returns the y-coordinate matrix
    pub fn y(&self) -> &DMatrix<f64> {
        &self.yy
    }

    /// Returns the matrix of sampled function values
    pub fn z(&self) -> &DMatrix<f64> {
        &self.zz
    }

    /// Returns the rectangular domain of the grid as `(x_min, x_max, y_min, y_max)`
    pub fn domain(&self) -> (f64, f64, f64, f64) {
        let ncols = self.xx.ncols();
        let nrows = self.yy.nrows();
        (
            self.xx[(0, 0)],
            self.xx[(0, ncols - 1)],
            self.yy[(0, 0)],
            self.yy[(nrows - 1, 0)],
        )
    }

    /// Returns the minimum and maximum sampled function values
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.zz.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.zz.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn rosenbrock(x: f64, y: f64) -> f64 {
        (1.0 - x).powi(2) + (y - x.powi(2)).powi(2)
    }

    #[test]
    fn test_linspace() {
        let x = linspace(-0.5, 1.5, 100);

        assert_eq!(100, x.len());
        assert_eq!(-0.5, x[0]);
        assert_eq!(1.5, x[99]);

        let step = 2.0 / 99.0;
        for i in 1..100 {
            assert_approx_eq!(step, x[i] - x[i - 1], 1e-12);
        }
    }

    #[test]
    fn test_linspace_empty() {
        assert_eq!(0, linspace(0.0, 1.0, 0).len());
    }

    #[test]
    fn test_linspace_single_point() {
        let x = linspace(3.0, 5.0, 1);

        assert_eq!(1, x.len());
        assert_eq!(3.0, x[0]);
    }

    #[test]
    fn test_meshgrid() {
        let x = linspace(0.0, 1.0, 3);
        let y = linspace(0.0, 1.0, 4);
        let (xx, yy) = meshgrid(&x, &y);

        assert_eq!((4, 3), xx.shape());
        assert_eq!((4, 3), yy.shape());

        for i in 0..4 {
            for j in 0..3 {
                assert_eq!(x[j], xx[(i, j)]);
                assert_eq!(y[i], yy[(i, j)]);
            }
        }
    }

    #[test]
    fn test_meshgrid_monotonic() {
        let x = linspace(-0.5, 1.5, 100);
        let y = linspace(-0.5, 1.5, 100);
        let (xx, yy) = meshgrid(&x, &y);

        // Each row of xx is strictly increasing and each column is constant; yy is the
        // transpose pattern
        for i in 0..100 {
            for j in 1..100 {
                assert!(xx[(i, j)] > xx[(i, j - 1)]);
                assert!(yy[(j, i)] > yy[(j - 1, i)]);
            }
        }
        for j in 0..100 {
            for i in 1..100 {
                assert_eq!(xx[(0, j)], xx[(i, j)]);
                assert_eq!(yy[(i, 0)], yy[(i, j)]);
            }
        }
    }

    #[test]
    fn test_sample_pointwise() {
        let x = linspace(-0.5, 1.5, 100);
        let y = linspace(-0.5, 1.5, 100);
        let surface = SurfaceGrid::sample(rosenbrock, &x, &y);

        assert_eq!((100, 100), surface.shape());

        for i in 0..100 {
            for j in 0..100 {
                let expected = rosenbrock(surface.x()[(i, j)], surface.y()[(i, j)]);
                assert_eq!(expected, surface.z()[(i, j)]);
            }
        }
    }

    #[test]
    fn test_sample_par_matches_sequential() {
        let x = linspace(-0.5, 1.5, 50);
        let y = linspace(-0.5, 1.5, 40);

        let sequential = SurfaceGrid::sample(rosenbrock, &x, &y);
        let parallel = SurfaceGrid::sample_par(rosenbrock, &x, &y);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_domain_and_value_range() {
        let x = linspace(-0.5, 1.5, 10);
        let y = linspace(-1.0, 2.0, 10);
        let surface = SurfaceGrid::sample(|x, y| x + y, &x, &y);

        assert_eq!((-0.5, 1.5, -1.0, 2.0), surface.domain());

        let (min, max) = surface.value_range();
        assert_eq!(-1.5, min);
        assert_eq!(3.5, max);
    }

    #[test]
    fn test_sample_deterministic() {
        let x = linspace(-0.5, 1.5, 100);
        let y = linspace(-0.5, 1.5, 100);

        let first = SurfaceGrid::sample(rosenbrock, &x, &y);
        let second = SurfaceGrid::sample(rosenbrock, &x, &y);

        assert_eq!(first, second);
    }
}

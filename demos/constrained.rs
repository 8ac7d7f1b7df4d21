//! Minimizes the Rosenbrock function subject to inequality constraints: the iterate must stay
//! inside the unit disk and above the line y = x.

use ipnewt::grid::{self, SurfaceGrid};
use ipnewt::plotting::{ContourOptions, ContourPlot};
use ipnewt::{DVector, IPNewtOptions};

fn rosenbrock(x: f64, y: f64) -> f64 {
    (1.0 - x).powi(2) + (y - x.powi(2)).powi(2)
}

fn main() {
    // The unconstrained optimum (1, 1) lies outside the unit disk, so the constrained optimum
    // sits on the boundary
    let mut solver = IPNewtOptions::new(2)
        .initial_point(vec![0.0, 0.5])
        .constraint(|x: &DVector<f64>| x.magnitude_squared() - 1.0)
        .constraint(|x: &DVector<f64>| x[0] - x[1])
        .enable_printing(1)
        .build(|x: &DVector<f64>| rosenbrock(x[0], x[1]))
        .unwrap();

    let result = solver.run();
    let optimum = result.solution;

    let x = grid::linspace(-0.5, 1.5, 100);
    let y = grid::linspace(-0.5, 1.5, 100);
    let surface = SurfaceGrid::sample(rosenbrock, &x, &y);

    let options = ContourOptions::new().title("Constrained Rosenbrock Optimum");
    ContourPlot::new(surface, options)
        .marker(optimum.point[0], optimum.point[1], "Optimal Solution")
        .save_to_file("constrained.png", true)
        .unwrap();

    println!("Saved contour plot to constrained.png");
}

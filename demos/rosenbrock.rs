//! Minimizes the Rosenbrock function and renders a contour plot of it with the computed optimum
//! marked.

use ipnewt::grid::{self, SurfaceGrid};
use ipnewt::plotting::{ContourOptions, ContourPlot};
use ipnewt::{DVector, IPNewtOptions};

fn rosenbrock(x: f64, y: f64) -> f64 {
    (1.0 - x).powi(2) + (y - x.powi(2)).powi(2)
}

fn main() {
    // Minimize the function starting from the origin
    let mut solver = IPNewtOptions::new(2)
        .enable_printing(1)
        .build(|x: &DVector<f64>| rosenbrock(x[0], x[1]))
        .unwrap();

    let result = solver.run();
    let optimum = result.solution;

    // Sample the function on a 100x100 grid for visualization
    let x = grid::linspace(-0.5, 1.5, 100);
    let y = grid::linspace(-0.5, 1.5, 100);
    let surface = SurfaceGrid::sample(rosenbrock, &x, &y);

    let (xx, yy) = grid::meshgrid(&x, &y);
    println!("{:?}", xx.shape());
    println!("{:?}", yy.shape());
    println!("{:?}", surface.shape());

    // Draw the contours with the optimum overlaid
    let options = ContourOptions::new().title("Rosenbrock Function Contour and Optimum");
    ContourPlot::new(surface, options)
        .marker(optimum.point[0], optimum.point[1], "Optimal Solution")
        .save_to_file("rosenbrock.png", true)
        .unwrap();

    println!("Saved contour plot to rosenbrock.png");
}

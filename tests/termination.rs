//! Tests for the solver termination criteria

use ipnewt::{DVector, IPNewtOptions, TerminationReason};

fn rosenbrock(x: &DVector<f64>) -> f64 {
    (1.0 - x[0]).powi(2) + (x[1] - x[0].powi(2)).powi(2)
}

#[test]
fn test_grad_tol() {
    let mut solver = IPNewtOptions::new(2).build(rosenbrock).unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::GradTol, result.reason);
}

#[test]
fn test_max_iterations() {
    let mut solver = IPNewtOptions::new(2)
        .max_iterations(2)
        .build(rosenbrock)
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::MaxIterations, result.reason);
    assert_eq!(2, solver.iteration());
}

#[test]
fn test_max_function_evals() {
    let mut solver = IPNewtOptions::new(2)
        .max_function_evals(1)
        .build(rosenbrock)
        .unwrap();
    let result = solver.run();

    // The evaluation at the initial point exhausts the budget
    assert_eq!(TerminationReason::MaxFunctionEvals, result.reason);
    assert_eq!(1, solver.function_evals());
}

#[test]
fn test_fun_target() {
    let mut solver = IPNewtOptions::new(2)
        .fun_target(1e-3)
        .build(rosenbrock)
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::FunTarget, result.reason);
    assert!(result.solution.value <= 1e-3);
}

#[test]
fn test_invalid_function_value() {
    let mut solver = IPNewtOptions::new(2)
        .build(|_: &DVector<f64>| f64::NAN)
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::InvalidFunctionValue, result.reason);
}

#[test]
fn test_invalid_value_mid_run() {
    // The function turns invalid once the iterate approaches the optimum
    let mut solver = IPNewtOptions::new(2)
        .build(|x: &DVector<f64>| {
            let value = rosenbrock(x);
            if value < 1e-2 {
                f64::NAN
            } else {
                value
            }
        })
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::InvalidFunctionValue, result.reason);
}

#[test]
fn test_line_search_failure() {
    // A jump discontinuity just above the start makes the finite-difference gradient enormous
    // while every step along the resulting direction increases the function, so no step size
    // can satisfy the decrease condition
    let mut solver = IPNewtOptions::new(1)
        .build(|x: &DVector<f64>| {
            if x[0] <= 0.0 {
                -x[0]
            } else {
                10.0 - x[0]
            }
        })
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::LineSearchFailure, result.reason);
}

#[test]
fn test_singular_hessian() {
    // So close to zero the finite differences of sqrt sample negative arguments, so the
    // Hessian fills with NaN and cannot be factorized
    let mut solver = IPNewtOptions::new(1)
        .initial_point(vec![1e-9])
        .build(|x: &DVector<f64>| x[0].sqrt())
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::SingularHessian, result.reason);
}

#[test]
fn test_max_iterations_zero() {
    let mut solver = IPNewtOptions::new(2)
        .max_iterations(0)
        .build(rosenbrock)
        .unwrap();
    let result = solver.run();

    assert_eq!(TerminationReason::MaxIterations, result.reason);
    assert_eq!(0, solver.iteration());
}

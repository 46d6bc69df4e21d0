//! Small bracketed root-finders shared by the iterative solvers in this
//! crate (catenary/cable loading, thermal rating current and temperature).
//!
//! All of them reproduce the reference model's false-position-with-secant
//! fallback approach: keep a bracket that changes sign across it, step with
//! a secant estimate, and re-bracket against whichever side the new point
//! falls on.

use crate::error::{Result, SagTensionError};

/// False-position (regula falsi) search for `f(x) == 0` over `[low, high]`,
/// where `f(low)` and `f(high)` must have opposite signs.
pub fn false_position<F>(
    mut low: f64,
    mut high: f64,
    tolerance: f64,
    max_iterations: u32,
    solver_name: &'static str,
    mut f: F,
) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    let mut f_low = f(low);
    let mut f_high = f(high);

    if f_low.abs() < tolerance {
        return Ok(low);
    }
    if f_high.abs() < tolerance {
        return Ok(high);
    }
    if f_low.signum() == f_high.signum() {
        return Err(SagTensionError::InvalidCatenary {
            reason: format!("{solver_name}: bracket [{low}, {high}] does not change sign"),
        });
    }

    let mut x = low;
    for _ in 0..max_iterations {
        x = high - f_high * (high - low) / (f_high - f_low);
        let f_x = f(x);
        log::trace!("{solver_name}: x={x} f(x)={f_x}");

        if f_x.abs() < tolerance {
            return Ok(x);
        }

        if f_x.signum() == f_low.signum() {
            low = x;
            f_low = f_x;
        } else {
            high = x;
            f_high = f_x;
        }
    }

    log::warn!("{solver_name} did not converge after {max_iterations} iterations");
    Err(SagTensionError::DidNotConverge {
        solver: solver_name,
        iterations: max_iterations,
        last_residual: f(x),
    })
}

/// Plain secant search for `f(x) == 0`, starting from two initial guesses.
pub fn secant<F>(
    mut x0: f64,
    mut x1: f64,
    tolerance: f64,
    max_iterations: u32,
    solver_name: &'static str,
    mut f: F,
) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    let mut f0 = f(x0);
    for _ in 0..max_iterations {
        let f1 = f(x1);
        if f1.abs() < tolerance {
            return Ok(x1);
        }
        let denominator = f1 - f0;
        if denominator == 0.0 {
            break;
        }
        let x2 = x1 - f1 * (x1 - x0) / denominator;
        x0 = x1;
        f0 = f1;
        x1 = x2;
    }

    let last_residual = f(x1);
    if last_residual.abs() < tolerance * 10.0 {
        return Ok(x1);
    }
    log::warn!("{solver_name} did not converge after {max_iterations} iterations");
    Err(SagTensionError::DidNotConverge {
        solver: solver_name,
        iterations: max_iterations,
        last_residual,
    })
}

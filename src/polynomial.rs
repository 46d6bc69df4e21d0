use crate::error::{Result, SagTensionError};

/// A single-variable polynomial stored as ascending-order coefficients
/// (`coefficients[0]` is the constant term).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

const NEWTON_MAX_ITERATIONS: u32 = 100;

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates `y = p(x)`.
    pub fn y(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, coefficient)| coefficient * x.powi(power as i32))
            .sum()
    }

    /// Evaluates the derivative `dy/dx` at `x`.
    pub fn slope(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, coefficient)| coefficient * (power as f64) * x.powi(power as i32 - 1))
            .sum()
    }

    /// Returns the polynomial's derivative as its own [`Polynomial`].
    pub fn derivative(&self) -> Polynomial {
        if self.coefficients.len() <= 1 {
            return Polynomial::new(vec![0.0]);
        }
        let derived = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, coefficient)| coefficient * power as f64)
            .collect();
        Polynomial::new(derived)
    }

    /// Solves for `x` such that `p(x) == y_target`, using Newton's method on
    /// a y-shifted copy of the polynomial (`p(x) - y_target == 0`).
    ///
    /// `decimal_precision` sets the convergence tolerance to
    /// `10^-decimal_precision`; the search starts from `x_start` and is
    /// capped at 100 iterations, matching the reference model.
    pub fn x(&self, y_target: f64, x_start: f64, decimal_precision: i32) -> Result<f64> {
        let tolerance = 10f64.powi(-decimal_precision);
        let mut x = x_start;

        for _ in 0..NEWTON_MAX_ITERATIONS {
            let residual = self.y(x) - y_target;
            if residual.abs() < tolerance {
                return Ok(x);
            }
            let slope = self.slope(x);
            if slope == 0.0 {
                return Err(SagTensionError::DidNotConverge {
                    solver: "Polynomial::x",
                    iterations: NEWTON_MAX_ITERATIONS,
                    last_residual: residual,
                });
            }
            x -= residual / slope;
        }

        let last_residual = self.y(x) - y_target;
        log::warn!(
            "Polynomial::x did not converge within {NEWTON_MAX_ITERATIONS} iterations (residual {last_residual})"
        );
        Err(SagTensionError::DidNotConverge {
            solver: "Polynomial::x",
            iterations: NEWTON_MAX_ITERATIONS,
            last_residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn evaluates_quadratic() {
        // y = 1 + 2x + 3x^2
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert_relative_eq!(p.y(2.0), 1.0 + 4.0 + 12.0);
    }

    #[test]
    fn slope_of_quadratic() {
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert_relative_eq!(p.slope(2.0), 2.0 + 12.0);
    }

    #[test]
    fn derivative_matches_slope() {
        let p = Polynomial::new(vec![1.0, 2.0, 3.0, 4.0]);
        let dp = p.derivative();
        assert_relative_eq!(dp.y(2.0), p.slope(2.0));
    }

    #[test]
    fn newton_inverts_linear() {
        // y = 3 + 2x, solve for x such that y = 11 -> x = 4
        let p = Polynomial::new(vec![3.0, 2.0]);
        let x = p.x(11.0, 0.0, 6).unwrap();
        assert_relative_eq!(x, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn newton_inverts_quadratic_near_start() {
        let p = Polynomial::new(vec![0.0, 0.0, 1.0]); // y = x^2
        let x = p.x(9.0, 2.5, 6).unwrap();
        assert_relative_eq!(x.abs(), 3.0, epsilon = 1e-4);
    }

    #[test]
    fn newton_reports_flat_slope() {
        let p = Polynomial::new(vec![5.0]); // y = 5, derivative always 0
        assert!(p.x(6.0, 0.0, 4).is_err());
    }
}

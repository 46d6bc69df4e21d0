use super::elongation_component::CableComponentElongationModel;
use crate::error::{Result, SagTensionError};

const STRAIN_SOLVE_MAX_ITERATIONS: u32 = 100;
const STRAIN_SOLVE_TOLERANCE: f64 = 1e-6;

/// Combined elongation behavior of a cable made of one or more components
/// (e.g. a steel core plus an aluminum shell), each carrying a share of the
/// total load at a shared total strain.
#[derive(Debug, Clone, PartialEq)]
pub struct CableElongationModel {
    pub components: Vec<CableComponentElongationModel>,
}

impl CableElongationModel {
    pub fn new(components: Vec<CableComponentElongationModel>) -> Self {
        Self { components }
    }

    /// Total load carried by all components at `strain_total`.
    pub fn load(&self, strain_total: f64) -> f64 {
        self.components.iter().map(|c| c.load(strain_total)).sum()
    }

    /// Total strain at which the combined components carry `load_total`,
    /// found with a secant search bracketed by the components' own
    /// single-component strain estimates.
    pub fn strain(&self, load_total: f64) -> Result<f64> {
        if self.components.is_empty() {
            return Err(SagTensionError::Unsupported {
                reason: "cable elongation model has no components".to_string(),
            });
        }

        let initial_guess = self
            .components
            .iter()
            .map(|c| c.strain(load_total / self.components.len() as f64))
            .sum::<f64>()
            / self.components.len() as f64;

        let residual = |strain: f64| self.load(strain) - load_total;

        let mut x0 = initial_guess;
        let mut x1 = initial_guess + 0.0001;
        let mut f0 = residual(x0);

        for _ in 0..STRAIN_SOLVE_MAX_ITERATIONS {
            let f1 = residual(x1);
            if f1.abs() < STRAIN_SOLVE_TOLERANCE {
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

        let last_residual = residual(x1);
        if last_residual.abs() < STRAIN_SOLVE_TOLERANCE * 10.0 {
            return Ok(x1);
        }
        log::warn!(
            "CableElongationModel::strain did not converge (residual {last_residual})"
        );
        Err(SagTensionError::DidNotConverge {
            solver: "CableElongationModel::strain",
            iterations: STRAIN_SOLVE_MAX_ITERATIONS,
            last_residual,
        })
    }
}

use std::fmt;

/// Errors surfaced by the iterative and closed-form solvers in this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum SagTensionError {
    /// A root-finding or fixed-point iteration exhausted its iteration cap
    /// without converging within the requested tolerance.
    DidNotConverge {
        solver: &'static str,
        iterations: u32,
        last_residual: f64,
    },
    /// A catenary's span/tension/weight inputs cannot form a valid curve
    /// (e.g. a non-positive horizontal tension).
    InvalidCatenary { reason: String },
    /// A polynomial evaluation or inversion was asked to operate outside the
    /// region its coefficients are valid for.
    OutOfDomain { value: f64, min: f64, max: f64 },
    /// A structural validation check failed (see [`crate::validation::Validate`]).
    Validation { messages: Vec<String> },
    /// A combination of inputs the underlying model does not support.
    Unsupported { reason: String },
}

impl fmt::Display for SagTensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SagTensionError::DidNotConverge {
                solver,
                iterations,
                last_residual,
            } => write!(
                f,
                "{solver} did not converge after {iterations} iterations (residual {last_residual:.6})"
            ),
            SagTensionError::InvalidCatenary { reason } => {
                write!(f, "invalid catenary: {reason}")
            }
            SagTensionError::OutOfDomain { value, min, max } => write!(
                f,
                "value {value} is outside the valid domain [{min}, {max}]"
            ),
            SagTensionError::Validation { messages } => {
                write!(f, "validation failed: {}", messages.join("; "))
            }
            SagTensionError::Unsupported { reason } => write!(f, "unsupported: {reason}"),
        }
    }
}

impl std::error::Error for SagTensionError {}

pub type Result<T> = std::result::Result<T, SagTensionError>;

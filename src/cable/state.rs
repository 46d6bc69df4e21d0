use super::component::CablePolynomialType;

/// The loading/thermal condition a cable is being evaluated under. This
/// selects which permanent-stretch source (if any) is added on top of the
/// base elastic behavior when a [`super::CableElongationModel`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CableConditionType {
    /// As-manufactured, no permanent stretch applied.
    Initial,
    /// Long-term creep stretch has been applied.
    Creep,
    /// A one-time heavy load event stretch has been applied.
    Load,
}

/// The temperature, active polynomial, and condition a cable model is
/// evaluated at. Carrying these on `CableState` rather than on `Cable`
/// itself lets the same [`super::Cable`] definition be evaluated under many
/// conditions without mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CableState {
    pub polynomial_type: CablePolynomialType,
    pub condition: CableConditionType,
    pub temperature: f64,
}

impl CableState {
    pub fn new(polynomial_type: CablePolynomialType, condition: CableConditionType, temperature: f64) -> Self {
        Self {
            polynomial_type,
            condition,
            temperature,
        }
    }
}

use crate::validation::{Validate, ValidationMessage};

/// Which of a component's two characteristic curves governs elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CablePolynomialType {
    LoadStrain,
    Creep,
}

/// One physical layer of a cable (e.g. the steel core or the aluminum
/// shell of an ACSR conductor): its own load-strain and creep polynomials,
/// thermal expansion behavior, and cross-sectional properties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CableComponent {
    pub coefficient_thermal_expansion: f64,
    /// Heat capacity per unit length, used by the thermal-storage term of
    /// the whole-cable thermal rating.
    pub heat_capacity: f64,
    pub coefficients_polynomial_load_strain: Vec<f64>,
    pub coefficients_polynomial_creep: Vec<f64>,
    /// Upper strain bound the load-strain polynomial was fit over.
    pub strain_limit_polynomial_load_strain: f64,
    /// Upper strain bound the creep polynomial was fit over.
    pub strain_limit_polynomial_creep: f64,
    /// Modulus of elasticity times cross-sectional area governing the
    /// compressed region (strain below the unloaded point).
    pub modulus_compression_area: f64,
    /// Modulus of elasticity times cross-sectional area governing the
    /// stretched region and extrapolation beyond the polynomial's limit.
    pub modulus_tension_area: f64,
    pub area_cross_section: f64,
}

impl Validate for CableComponent {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        if self.area_cross_section <= 0.0 {
            messages.push(ValidationMessage::error(
                "area_cross_section",
                "must be positive",
            ));
        }
        if self.modulus_compression_area <= 0.0 {
            messages.push(ValidationMessage::error(
                "modulus_compression_area",
                "must be positive",
            ));
        }
        if self.modulus_tension_area <= 0.0 {
            messages.push(ValidationMessage::error(
                "modulus_tension_area",
                "must be positive",
            ));
        }
        if self.heat_capacity <= 0.0 {
            messages.push(ValidationMessage::error("heat_capacity", "must be positive"));
        }
        if self.coefficients_polynomial_load_strain.is_empty() {
            messages.push(ValidationMessage::error(
                "coefficients_polynomial_load_strain",
                "must have at least one coefficient",
            ));
        }
        if self.strain_limit_polynomial_load_strain <= 0.0 {
            messages.push(ValidationMessage::warning(
                "strain_limit_polynomial_load_strain",
                "non-positive limit means the polynomial region is never used",
            ));
        }
        messages
    }
}

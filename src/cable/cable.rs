use super::component::CableComponent;
use super::elongation::CableElongationModel;
use super::elongation_component::CableComponentElongationModel;
use super::state::CableState;
use crate::error::{Result, SagTensionError};
use crate::validation::{Validate, ValidationMessage};

/// A full conductor definition: its component layers, diameter, reference
/// temperature, and a temperature/resistance table used for thermal rating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cable {
    pub name: String,
    pub diameter: f64,
    pub temperature_reference: f64,
    /// Rated breaking strength, used as the upper bracket of the stretch
    /// bootstrap search in [`crate::sagtension::LineCableReloader`].
    pub rated_strength: f64,
    pub components: Vec<CableComponent>,
    /// (temperature, resistance) pairs, ascending by temperature, used by
    /// [`crate::thermal::ThermalRatingCable::resistance`].
    pub resistance_points: Vec<(f64, f64)>,
}

impl Cable {
    pub fn area_cross_section_total(&self) -> f64 {
        self.components.iter().map(|c| c.area_cross_section).sum()
    }

    pub fn modulus_elasticity_area_total(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.modulus_tension_area)
            .sum()
    }

    /// Builds a [`CableElongationModel`] for `state`, applying each entry
    /// of `load_stretch_per_component` to the matching component in
    /// declaration order. All components share the same stretch
    /// temperature `T*`, per the cable-wide stretch recorded by
    /// [`crate::sagtension::LineCableReloader`].
    pub fn elongation_model(
        &self,
        state: CableState,
        load_stretch_per_component: &[f64],
        temperature_stretch: f64,
    ) -> Result<CableElongationModel> {
        if load_stretch_per_component.len() != self.components.len() {
            return Err(SagTensionError::Unsupported {
                reason: format!(
                    "expected {} load-stretch values, got {}",
                    self.components.len(),
                    load_stretch_per_component.len()
                ),
            });
        }
        let components = self
            .components
            .iter()
            .zip(load_stretch_per_component.iter())
            .map(|(component, &load_stretch)| CableComponentElongationModel {
                component: component.clone(),
                polynomial_type: state.polynomial_type,
                temperature: state.temperature,
                temperature_reference: self.temperature_reference,
                load_stretch,
                temperature_stretch,
            })
            .collect();
        Ok(CableElongationModel::new(components))
    }
}

impl Validate for Cable {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        if self.diameter <= 0.0 {
            messages.push(ValidationMessage::error("diameter", "must be positive"));
        }
        if self.rated_strength <= 0.0 {
            messages.push(ValidationMessage::error(
                "rated_strength",
                "must be positive",
            ));
        }
        if self.components.is_empty() {
            messages.push(ValidationMessage::error(
                "components",
                "a cable must have at least one component",
            ));
        }
        for (index, component) in self.components.iter().enumerate() {
            for message in component.validate() {
                messages.push(ValidationMessage {
                    source: format!("components[{index}].{}", message.source),
                    ..message
                });
            }
        }
        if self.resistance_points.is_empty() {
            messages.push(ValidationMessage::warning(
                "resistance_points",
                "no resistance table provided; thermal rating is unavailable",
            ));
        } else if !self
            .resistance_points
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0)
        {
            messages.push(ValidationMessage::error(
                "resistance_points",
                "must be sorted by strictly increasing temperature",
            ));
        }
        messages
    }
}

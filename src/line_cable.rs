use crate::cable::{Cable, CableConditionType};
use crate::geometry::Vector3D;
use crate::validation::{Validate, ValidationMessage};
use crate::weather::WeatherLoadCase;

/// What a [`CableConstraint`]'s `limit` value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintType {
    HorizontalTension,
    SupportTension,
    CatenaryConstant,
}

/// The design condition a line cable's sag-tension must satisfy: a limit
/// value of a particular kind, evaluated under a particular weather case
/// and cable condition (initial / creep / load).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CableConstraint {
    pub constraint_type: ConstraintType,
    pub limit: f64,
    pub case_weather: WeatherLoadCase,
    pub condition: CableConditionType,
}

/// Names one of a [`crate::transmission_line::LineStructure`]'s attachment
/// points, identifying where a [`LineCable`] connects to that structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineConnection {
    pub index_structure: usize,
    pub index_attachment: usize,
}

/// A cable strung between two attachment points on a transmission line,
/// governed by one ruling constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCable {
    pub cable: Cable,
    /// Attachment spacing, end minus start (horizontal and vertical).
    pub spacing_attachments: Vector3D,
    pub constraint: CableConstraint,
    /// Weather case the creep-condition stretch is bootstrapped against.
    pub case_weather_stretch_creep: WeatherLoadCase,
    /// Weather case the load-condition stretch is bootstrapped against.
    pub case_weather_stretch_load: WeatherLoadCase,
    pub weight_unit_bare: f64,
    /// Structure/attachment pairs this cable runs through, sorted by
    /// `index_structure`.
    pub connections: Vec<LineConnection>,
}

impl Validate for LineCable {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = self.cable.validate();
        if self.spacing_attachments.x.abs() + self.spacing_attachments.y.abs() <= 0.0 {
            messages.push(ValidationMessage::error(
                "spacing_attachments",
                "horizontal span must be non-zero",
            ));
        }
        if self.constraint.limit <= 0.0 {
            messages.push(ValidationMessage::error(
                "constraint.limit",
                "must be positive",
            ));
        }
        if self.weight_unit_bare <= 0.0 {
            messages.push(ValidationMessage::error(
                "weight_unit_bare",
                "must be positive",
            ));
        }
        if !self
            .connections
            .windows(2)
            .all(|pair| pair[0].index_structure < pair[1].index_structure)
        {
            messages.push(ValidationMessage::error(
                "connections",
                "must be sorted by strictly increasing index_structure",
            ));
        }
        messages
    }
}

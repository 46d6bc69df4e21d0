use crate::validation::{Validate, ValidationMessage};

/// A conductor as seen by the thermal rating modules: its diameter and a
/// resistance-vs-temperature table, independent of the mechanical cable
/// model used for sag-tension.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalRatingCable {
    pub diameter: f64,
    pub emissivity: f64,
    pub absorptivity: f64,
    pub heat_capacity_per_foot: f64,
    /// (temperature, resistance-per-foot) pairs, ascending by temperature.
    pub resistance_points: Vec<(f64, f64)>,
}

impl ThermalRatingCable {
    /// Resistance at `temperature`, linearly interpolated between the two
    /// bracketing table entries, or linearly extrapolated from the nearest
    /// pair of entries when `temperature` falls outside the table.
    pub fn resistance(&self, temperature: f64) -> f64 {
        let points = &self.resistance_points;
        debug_assert!(!points.is_empty(), "resistance table must not be empty");

        if points.len() == 1 {
            return points[0].1;
        }

        let (low, high) = if temperature <= points[0].0 {
            (points[0], points[1])
        } else if temperature >= points[points.len() - 1].0 {
            (points[points.len() - 2], points[points.len() - 1])
        } else {
            let upper_index = points
                .iter()
                .position(|p| p.0 >= temperature)
                .unwrap_or(points.len() - 1);
            (points[upper_index - 1], points[upper_index])
        };

        let (t_low, r_low) = low;
        let (t_high, r_high) = high;
        let fraction = (temperature - t_low) / (t_high - t_low);
        r_low + fraction * (r_high - r_low)
    }
}

impl Validate for ThermalRatingCable {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        if self.diameter <= 0.0 {
            messages.push(ValidationMessage::error("diameter", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.emissivity) {
            messages.push(ValidationMessage::error(
                "emissivity",
                "must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.absorptivity) {
            messages.push(ValidationMessage::error(
                "absorptivity",
                "must be between 0 and 1",
            ));
        }
        if self.resistance_points.is_empty() {
            messages.push(ValidationMessage::error(
                "resistance_points",
                "must have at least one entry",
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

use crate::validation::{Validate, ValidationMessage};

/// Ice density used for ice-load calculations, pounds per cubic foot when
/// operating in imperial units (57.3 lb/ft^3 == 917.5 kg/m^3 for glaze ice).
pub const ICE_DENSITY_IMPERIAL: f64 = 57.3;

/// A combination of temperature, radial ice thickness, and horizontal wind
/// pressure a cable's loaded weight is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherLoadCase {
    pub temperature: f64,
    pub thickness_ice: f64,
    pub pressure_wind: f64,
}

impl WeatherLoadCase {
    pub fn new(temperature: f64, thickness_ice: f64, pressure_wind: f64) -> Self {
        Self {
            temperature,
            thickness_ice,
            pressure_wind,
        }
    }

    pub fn no_ice_no_wind(temperature: f64) -> Self {
        Self::new(temperature, 0.0, 0.0)
    }
}

impl Validate for WeatherLoadCase {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        if self.thickness_ice < 0.0 {
            messages.push(ValidationMessage::error(
                "thickness_ice",
                "must be non-negative",
            ));
        }
        if self.pressure_wind < 0.0 {
            messages.push(ValidationMessage::error(
                "pressure_wind",
                "must be non-negative",
            ));
        }
        messages
    }
}

/// Resolves a cable's bare unit weight plus a [`WeatherLoadCase`] into a
/// single resultant unit load magnitude, combining the vertical (bare
/// weight + ice) and horizontal (wind) components.
pub struct CableUnitLoadCalculator {
    pub diameter_cable: f64,
    pub weight_unit_bare: f64,
    pub ice_density: f64,
}

impl CableUnitLoadCalculator {
    pub fn new(diameter_cable: f64, weight_unit_bare: f64) -> Self {
        Self {
            diameter_cable,
            weight_unit_bare,
            ice_density: ICE_DENSITY_IMPERIAL,
        }
    }

    /// Weight per unit length added by a radial ice coating of `thickness`
    /// (an annulus around the cable's cross section).
    pub fn weight_unit_ice(&self, thickness: f64) -> f64 {
        if thickness <= 0.0 {
            return 0.0;
        }
        std::f64::consts::PI * thickness * (self.diameter_cable + thickness) * self.ice_density
    }

    /// Horizontal wind load per unit length against the iced diameter.
    pub fn load_unit_wind(&self, case: &WeatherLoadCase) -> f64 {
        let diameter_iced = self.diameter_cable + 2.0 * case.thickness_ice;
        case.pressure_wind * diameter_iced
    }

    /// Vertical load per unit length: bare weight plus ice.
    pub fn load_unit_vertical(&self, case: &WeatherLoadCase) -> f64 {
        self.weight_unit_bare + self.weight_unit_ice(case.thickness_ice)
    }

    /// Resultant combined unit load magnitude for `case`.
    pub fn weight_unit_resultant(&self, case: &WeatherLoadCase) -> f64 {
        let vertical = self.load_unit_vertical(case);
        let horizontal = self.load_unit_wind(case);
        (vertical.powi(2) + horizontal.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_ice_no_wind_is_bare_weight() {
        let calculator = CableUnitLoadCalculator::new(1.108, 1.096);
        let case = WeatherLoadCase::no_ice_no_wind(32.0);
        assert_relative_eq!(calculator.weight_unit_resultant(&case), 1.096, epsilon = 1e-9);
    }

    #[test]
    fn ice_increases_vertical_load() {
        let calculator = CableUnitLoadCalculator::new(1.108, 1.096);
        let case = WeatherLoadCase::new(0.0, 0.5, 0.0);
        assert!(calculator.weight_unit_resultant(&case) > 1.096);
    }

    #[test]
    fn wind_and_ice_combine_as_resultant() {
        let calculator = CableUnitLoadCalculator::new(1.108, 1.096);
        let case = WeatherLoadCase::new(0.0, 0.5, 4.0);
        let vertical = calculator.load_unit_vertical(&case);
        let horizontal = calculator.load_unit_wind(&case);
        let expected = (vertical.powi(2) + horizontal.powi(2)).sqrt();
        assert_relative_eq!(calculator.weight_unit_resultant(&case), expected, epsilon = 1e-9);
    }
}

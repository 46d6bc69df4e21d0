use super::converter::LineCableToCatenaryConverter;
use super::reloader::CatenaryCableReloader;
use crate::cable::{CableConditionType, CablePolynomialType, CableState};
use crate::catenary::Catenary2D;
use crate::error::Result;
use crate::line_cable::LineCable;
use crate::rootfind::secant;
use crate::weather::{CableUnitLoadCalculator, WeatherLoadCase};

const MAX_ITERATIONS_STRETCH: u32 = 100;
const TOLERANCE_STRETCH: f64 = 0.1;

/// Moves a [`LineCable`] from its ruling constraint condition to a target
/// weather case and condition, carrying forward the permanent stretch the
/// constraint's own condition implies.
///
/// The stretch bootstrap generalizes to both `Creep` and `Load` constraint
/// conditions (see `DESIGN.md`'s Open Question decisions); each is the fixed
/// point of `F(L*) = average tension after reloading the constraint catenary
/// to that condition's stretch weather case while carrying stretch L*`,
/// found by secant search on `(0, rated_strength)`.
pub struct LineCableReloader<'a> {
    pub line_cable: &'a LineCable,
    pub case_weather_final: WeatherLoadCase,
    pub temperature_final: f64,
    pub condition_final: CableConditionType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCableReloadResult {
    pub catenary_final: Catenary2D,
    /// Permanent stretch bootstrapped against the creep stretch case, zero
    /// unless the constraint's own condition is non-`Initial`.
    pub load_stretch_creep: f64,
    /// Permanent stretch bootstrapped against the load stretch case, zero
    /// unless the constraint's own condition is non-`Initial`.
    pub load_stretch_load: f64,
}

impl LineCableReloadResult {
    /// The stretch this result actually carries forward for `condition`.
    pub fn load_stretch_for(&self, condition: CableConditionType) -> f64 {
        match condition {
            CableConditionType::Initial => 0.0,
            CableConditionType::Creep => self.load_stretch_creep,
            CableConditionType::Load => self.load_stretch_load,
        }
    }
}

impl<'a> LineCableReloader<'a> {
    fn unit_weight(&self, case: &WeatherLoadCase) -> f64 {
        let calculator = CableUnitLoadCalculator::new(
            self.line_cable.cable.diameter,
            self.line_cable.weight_unit_bare,
        );
        calculator.weight_unit_resultant(case)
    }

    fn spacing_horizontal(&self) -> f64 {
        (self.line_cable.spacing_attachments.x.powi(2) + self.line_cable.spacing_attachments.y.powi(2)).sqrt()
    }

    fn spacing_vertical(&self) -> f64 {
        self.line_cable.spacing_attachments.z
    }

    fn polynomial_type_for_condition(condition: CableConditionType) -> CablePolynomialType {
        match condition {
            CableConditionType::Creep => CablePolynomialType::Creep,
            _ => CablePolynomialType::LoadStrain,
        }
    }

    fn stretch_case_for_condition(&self, condition: CableConditionType) -> WeatherLoadCase {
        match condition {
            CableConditionType::Creep => self.line_cable.case_weather_stretch_creep,
            _ => self.line_cable.case_weather_stretch_load,
        }
    }

    /// `F(L*)`: average tension the constraint catenary settles to once
    /// reloaded to `condition`'s stretch weather case, carrying stretch
    /// `load_stretch` recorded at that stretch case's own temperature.
    fn reload_to_stretch_case(
        &self,
        catenary_constraint: Catenary2D,
        condition: CableConditionType,
        load_stretch: f64,
    ) -> Result<f64> {
        let components = self.line_cable.cable.components.len();
        let zero_stretch = vec![0.0; components];
        let stretch_per_component = vec![load_stretch / components as f64; components];
        let stretch_case = self.stretch_case_for_condition(condition);

        let model_start = self.line_cable.cable.elongation_model(
            CableState::new(
                CablePolynomialType::LoadStrain,
                CableConditionType::Initial,
                self.line_cable.constraint.case_weather.temperature,
            ),
            &zero_stretch,
            stretch_case.temperature,
        )?;
        let model_finish = self.line_cable.cable.elongation_model(
            CableState::new(
                Self::polynomial_type_for_condition(condition),
                condition,
                stretch_case.temperature,
            ),
            &stretch_per_component,
            stretch_case.temperature,
        )?;

        let reloader = CatenaryCableReloader {
            catenary_start: catenary_constraint,
            elongation_model_start: &model_start,
            spacing_horizontal_finish: self.spacing_horizontal(),
            spacing_vertical_finish: self.spacing_vertical(),
            unit_weight_finish: self.unit_weight(&stretch_case),
            elongation_model_finish: &model_finish,
        };
        Ok(reloader.solve()?.tension_average())
    }

    /// Solves `condition`'s stretch bootstrap as the fixed point of
    /// `reload_to_stretch_case(L*) - L* = 0`. Zero when the constraint's own
    /// condition is `Initial` — an as-built cable has no permanent stretch.
    fn bootstrap_stretch(&self, catenary_constraint: Catenary2D, condition: CableConditionType) -> Result<f64> {
        if self.line_cable.constraint.condition == CableConditionType::Initial {
            return Ok(0.0);
        }
        let rated_strength = self.line_cable.cable.rated_strength;
        secant(
            0.0,
            rated_strength,
            TOLERANCE_STRETCH,
            MAX_ITERATIONS_STRETCH,
            "LineCableReloader::bootstrap_stretch",
            |load_stretch| {
                self.reload_to_stretch_case(catenary_constraint, condition, load_stretch)
                    .map(|tension_average| tension_average - load_stretch)
                    .unwrap_or(f64::INFINITY)
            },
        )
    }

    pub fn solve(&self) -> Result<LineCableReloadResult> {
        let constraint = &self.line_cable.constraint;
        let converter = LineCableToCatenaryConverter {
            line_cable: self.line_cable,
        };
        let catenary_constraint = converter.catenary(constraint)?;

        let load_stretch_creep = self.bootstrap_stretch(catenary_constraint, CableConditionType::Creep)?;
        let load_stretch_load = self.bootstrap_stretch(catenary_constraint, CableConditionType::Load)?;

        let (load_stretch, temperature_stretch) = match constraint.condition {
            CableConditionType::Initial => (0.0, constraint.case_weather.temperature),
            CableConditionType::Creep => (
                load_stretch_creep,
                self.line_cable.case_weather_stretch_creep.temperature,
            ),
            CableConditionType::Load => (
                load_stretch_load,
                self.line_cable.case_weather_stretch_load.temperature,
            ),
        };

        let components = self.line_cable.cable.components.len();
        let stretch_per_component = vec![load_stretch / components as f64; components];

        let model_constraint = self.line_cable.cable.elongation_model(
            CableState::new(
                CablePolynomialType::LoadStrain,
                constraint.condition,
                constraint.case_weather.temperature,
            ),
            &stretch_per_component,
            temperature_stretch,
        )?;
        let model_final = self.line_cable.cable.elongation_model(
            CableState::new(
                CablePolynomialType::LoadStrain,
                self.condition_final,
                self.temperature_final,
            ),
            &stretch_per_component,
            temperature_stretch,
        )?;

        let reloader = CatenaryCableReloader {
            catenary_start: catenary_constraint,
            elongation_model_start: &model_constraint,
            spacing_horizontal_finish: self.spacing_horizontal(),
            spacing_vertical_finish: self.spacing_vertical(),
            unit_weight_finish: self.unit_weight(&self.case_weather_final),
            elongation_model_finish: &model_final,
        };
        let catenary_final = reloader.solve()?;

        Ok(LineCableReloadResult {
            catenary_final,
            load_stretch_creep,
            load_stretch_load,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{Cable, CableComponent};
    use crate::geometry::Vector3D;
    use crate::line_cable::{CableConstraint, ConstraintType};

    fn sample_line_cable(condition: CableConditionType) -> LineCable {
        let cable = Cable {
            name: "Drake ACSR".to_string(),
            diameter: 1.108,
            temperature_reference: 70.0,
            rated_strength: 31_500.0,
            components: vec![CableComponent {
                coefficient_thermal_expansion: 0.0000064,
                heat_capacity: 0.3,
                coefficients_polynomial_load_strain: vec![0.0, 10_000_000.0],
                coefficients_polynomial_creep: vec![0.0, 8_000_000.0],
                strain_limit_polynomial_load_strain: 0.02,
                strain_limit_polynomial_creep: 0.02,
                modulus_compression_area: 10_000_000.0,
                modulus_tension_area: 10_000_000.0,
                area_cross_section: 0.7627,
            }],
            resistance_points: vec![],
        };
        LineCable {
            cable,
            spacing_attachments: Vector3D::new(1000.0, 0.0, 0.0),
            constraint: CableConstraint {
                constraint_type: ConstraintType::HorizontalTension,
                limit: 6000.0,
                case_weather: WeatherLoadCase::no_ice_no_wind(60.0),
                condition,
            },
            case_weather_stretch_creep: WeatherLoadCase::no_ice_no_wind(60.0),
            case_weather_stretch_load: WeatherLoadCase::new(0.0, 0.5, 8.0),
            weight_unit_bare: 1.096,
            connections: vec![],
        }
    }

    #[test]
    fn initial_condition_has_no_stretch() {
        let line_cable = sample_line_cable(CableConditionType::Initial);
        let reloader = LineCableReloader {
            line_cable: &line_cable,
            case_weather_final: WeatherLoadCase::no_ice_no_wind(60.0),
            temperature_final: 60.0,
            condition_final: CableConditionType::Initial,
        };
        let result = reloader.solve().unwrap();
        assert_eq!(result.load_stretch_creep, 0.0);
        assert_eq!(result.load_stretch_load, 0.0);
        assert!((result.catenary_final.horizontal_tension - 6000.0).abs() < 0.05);
    }

    #[test]
    fn load_condition_bootstraps_nonzero_stretch() {
        let line_cable = sample_line_cable(CableConditionType::Load);
        let reloader = LineCableReloader {
            line_cable: &line_cable,
            case_weather_final: WeatherLoadCase::no_ice_no_wind(60.0),
            temperature_final: 60.0,
            condition_final: CableConditionType::Load,
        };
        let result = reloader.solve().unwrap();
        assert!(result.load_stretch_load > 0.0);
    }

    #[test]
    fn hot_final_temperature_reduces_tension() {
        let line_cable = sample_line_cable(CableConditionType::Load);
        let reloader = LineCableReloader {
            line_cable: &line_cable,
            case_weather_final: WeatherLoadCase::no_ice_no_wind(167.0),
            temperature_final: 167.0,
            condition_final: CableConditionType::Load,
        };
        let result = reloader.solve().unwrap();
        assert!(result.catenary_final.horizontal_tension < 6000.0);
    }
}

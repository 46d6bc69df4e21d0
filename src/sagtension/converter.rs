use crate::catenary::Catenary2D;
use crate::error::Result;
use crate::line_cable::{CableConstraint, ConstraintType, LineCable};
use crate::rootfind::secant;
use crate::weather::CableUnitLoadCalculator;

const MAX_ITERATIONS: u32 = 100;
const TOLERANCE_TENSION: f64 = 0.01;

/// Turns a [`LineCable`]'s ruling constraint into an initial [`Catenary2D`]:
/// resolves the resultant unit load from the constraint's weather case, then
/// solves for the horizontal tension the constraint implies.
pub struct LineCableToCatenaryConverter<'a> {
    pub line_cable: &'a LineCable,
}

impl<'a> LineCableToCatenaryConverter<'a> {
    pub fn unit_weight(&self, constraint: &CableConstraint) -> f64 {
        let calculator = CableUnitLoadCalculator::new(
            self.line_cable.cable.diameter,
            self.line_cable.weight_unit_bare,
        );
        calculator.weight_unit_resultant(&constraint.case_weather)
    }

    fn spacing_horizontal(&self) -> f64 {
        (self.line_cable.spacing_attachments.x.powi(2) + self.line_cable.spacing_attachments.y.powi(2)).sqrt()
    }

    fn spacing_vertical(&self) -> f64 {
        self.line_cable.spacing_attachments.z
    }

    /// Horizontal tension implied by `constraint`, given the already
    /// resolved resultant `unit_weight`.
    pub fn solve_horizontal_tension(&self, constraint: &CableConstraint, unit_weight: f64) -> Result<f64> {
        match constraint.constraint_type {
            ConstraintType::HorizontalTension => Ok(constraint.limit),
            ConstraintType::CatenaryConstant => Ok(constraint.limit * unit_weight),
            ConstraintType::SupportTension => {
                let spacing_horizontal = self.spacing_horizontal();
                let spacing_vertical = self.spacing_vertical();
                let target = constraint.limit;
                let minimum = 0.5 * unit_weight * spacing_horizontal;
                secant(
                    minimum,
                    constraint.limit,
                    TOLERANCE_TENSION,
                    MAX_ITERATIONS,
                    "LineCableToCatenaryConverter::solve_horizontal_tension",
                    |h| {
                        Catenary2D::new(h, unit_weight, spacing_horizontal, spacing_vertical).tension_max()
                            - target
                    },
                )
            }
        }
    }

    /// Builds the catenary that satisfies `constraint`.
    pub fn catenary(&self, constraint: &CableConstraint) -> Result<Catenary2D> {
        let unit_weight = self.unit_weight(constraint);
        let horizontal_tension = self.solve_horizontal_tension(constraint, unit_weight)?;
        Ok(Catenary2D::new(
            horizontal_tension,
            unit_weight,
            self.spacing_horizontal(),
            self.spacing_vertical(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{Cable, CableComponent};
    use crate::cable::CableConditionType;
    use crate::geometry::Vector3D;
    use crate::weather::WeatherLoadCase;

    fn sample_line_cable(constraint_type: ConstraintType, limit: f64) -> LineCable {
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
                constraint_type,
                limit,
                case_weather: WeatherLoadCase::no_ice_no_wind(60.0),
                condition: CableConditionType::Initial,
            },
            case_weather_stretch_creep: WeatherLoadCase::no_ice_no_wind(60.0),
            case_weather_stretch_load: WeatherLoadCase::new(0.0, 0.5, 8.0),
            weight_unit_bare: 1.096,
            connections: vec![],
        }
    }

    #[test]
    fn horizontal_tension_constraint_is_direct() {
        let line_cable = sample_line_cable(ConstraintType::HorizontalTension, 6000.0);
        let converter = LineCableToCatenaryConverter {
            line_cable: &line_cable,
        };
        let catenary = converter.catenary(&line_cable.constraint).unwrap();
        assert_eq!(catenary.horizontal_tension, 6000.0);
    }

    #[test]
    fn catenary_constant_constraint_scales_by_unit_weight() {
        let line_cable = sample_line_cable(ConstraintType::CatenaryConstant, 5000.0);
        let converter = LineCableToCatenaryConverter {
            line_cable: &line_cable,
        };
        let catenary = converter.catenary(&line_cable.constraint).unwrap();
        assert!((catenary.horizontal_tension - 5000.0 * 1.096).abs() < 1e-6);
    }

    #[test]
    fn support_tension_constraint_solves_to_target_max_tension() {
        let line_cable = sample_line_cable(ConstraintType::SupportTension, 6500.0);
        let converter = LineCableToCatenaryConverter {
            line_cable: &line_cable,
        };
        let catenary = converter.catenary(&line_cable.constraint).unwrap();
        assert!((catenary.tension_max() - 6500.0).abs() < 0.1);
    }
}

use super::loader::CatenaryCableLoader;
use super::unloader::CatenaryCableUnloader;
use crate::cable::CableElongationModel;
use crate::catenary::Catenary2D;
use crate::error::Result;

/// Moves a catenary from one loading/temperature condition to another while
/// conserving the cable's unstretched length: unload the starting catenary
/// to recover that length, then reload it into the new span and elongation
/// model.
pub struct CatenaryCableReloader<'a> {
    pub catenary_start: Catenary2D,
    pub elongation_model_start: &'a CableElongationModel,
    pub spacing_horizontal_finish: f64,
    pub spacing_vertical_finish: f64,
    pub unit_weight_finish: f64,
    pub elongation_model_finish: &'a CableElongationModel,
}

impl<'a> CatenaryCableReloader<'a> {
    pub fn solve(&self) -> Result<Catenary2D> {
        let unloader = CatenaryCableUnloader {
            catenary: self.catenary_start,
            elongation_model: self.elongation_model_start,
        };
        let length_unstretched = unloader.length_unstretched()?;

        let loader = CatenaryCableLoader {
            unit_weight: self.unit_weight_finish,
            spacing_horizontal: self.spacing_horizontal_finish,
            spacing_vertical: self.spacing_vertical_finish,
            length_unstretched,
            elongation_model: self.elongation_model_finish,
        };
        let horizontal_tension = loader.solve_horizontal_tension()?;
        Ok(Catenary2D::new(
            horizontal_tension,
            self.unit_weight_finish,
            self.spacing_horizontal_finish,
            self.spacing_vertical_finish,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{CableComponent, CableComponentElongationModel, CablePolynomialType};

    fn model(ea: f64, temperature: f64) -> CableElongationModel {
        let component = CableComponent {
            coefficient_thermal_expansion: 0.0000064,
            heat_capacity: 0.3,
            coefficients_polynomial_load_strain: vec![0.0, ea],
            coefficients_polynomial_creep: vec![0.0, ea * 0.8],
            strain_limit_polynomial_load_strain: 0.02,
            strain_limit_polynomial_creep: 0.02,
            modulus_compression_area: ea,
            modulus_tension_area: ea,
            area_cross_section: 0.7627,
        };
        CableElongationModel::new(vec![CableComponentElongationModel {
            component,
            polynomial_type: CablePolynomialType::LoadStrain,
            temperature,
            temperature_reference: 60.0,
            load_stretch: 0.0,
            temperature_stretch: 60.0,
        }])
    }

    #[test]
    fn higher_temperature_reduces_horizontal_tension() {
        let model_cold = model(10_000_000.0, 0.0);
        let model_hot = model(10_000_000.0, 180.0);
        let catenary_start = Catenary2D::new(6000.0, 1.096, 1000.0, 0.0);

        let reloader = CatenaryCableReloader {
            catenary_start,
            elongation_model_start: &model_cold,
            spacing_horizontal_finish: 1000.0,
            spacing_vertical_finish: 0.0,
            unit_weight_finish: 1.096,
            elongation_model_finish: &model_hot,
        };
        let catenary_hot = reloader.solve().unwrap();
        assert!(catenary_hot.horizontal_tension < catenary_start.horizontal_tension);
    }

    #[test]
    fn reloading_to_the_same_state_reproduces_horizontal_tension() {
        let model_same = model(10_000_000.0, 60.0);
        let catenary_start = Catenary2D::new(6000.0, 1.096, 1000.0, 0.0);

        let reloader = CatenaryCableReloader {
            catenary_start,
            elongation_model_start: &model_same,
            spacing_horizontal_finish: 1000.0,
            spacing_vertical_finish: 0.0,
            unit_weight_finish: 1.096,
            elongation_model_finish: &model_same,
        };
        let catenary_final = reloader.solve().unwrap();
        assert!((catenary_final.horizontal_tension - catenary_start.horizontal_tension).abs() < 0.5);
    }
}

use crate::cable::{CableElongationModel, Strainer};
use crate::catenary::Catenary2D;
use crate::error::Result;

/// The inverse of [`super::loader::CatenaryCableLoader`]: given a catenary's
/// geometry and horizontal tension, finds the cable's unstretched length —
/// a direct calculation, since the catenary's average tension is already
/// known and strain is a pure function of load.
pub struct CatenaryCableUnloader<'a> {
    pub catenary: Catenary2D,
    pub elongation_model: &'a CableElongationModel,
}

impl<'a> CatenaryCableUnloader<'a> {
    pub fn length_unstretched(&self) -> Result<f64> {
        let strainer = Strainer::new(self.elongation_model);
        let strain = strainer.strain_at_load(self.catenary.tension_average())?;
        Ok(self.catenary.length() / (1.0 + strain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{CableComponent, CableComponentElongationModel, CablePolynomialType};
    use crate::sagtension::loader::CatenaryCableLoader;

    fn elongation_model() -> CableElongationModel {
        let component = CableComponent {
            coefficient_thermal_expansion: 0.0000064,
            heat_capacity: 0.3,
            coefficients_polynomial_load_strain: vec![0.0, 10_000_000.0],
            coefficients_polynomial_creep: vec![0.0, 8_000_000.0],
            strain_limit_polynomial_load_strain: 0.02,
            strain_limit_polynomial_creep: 0.02,
            modulus_compression_area: 10_000_000.0,
            modulus_tension_area: 10_000_000.0,
            area_cross_section: 0.7627,
        };
        CableElongationModel::new(vec![CableComponentElongationModel {
            component,
            polynomial_type: CablePolynomialType::LoadStrain,
            temperature: 60.0,
            temperature_reference: 60.0,
            load_stretch: 0.0,
            temperature_stretch: 60.0,
        }])
    }

    #[test]
    fn round_trips_with_loader() {
        let model = elongation_model();
        let loader = CatenaryCableLoader {
            unit_weight: 1.096,
            spacing_horizontal: 1000.0,
            spacing_vertical: 0.0,
            length_unstretched: 999.5,
            elongation_model: &model,
        };
        let h = loader.solve_horizontal_tension().unwrap();
        let catenary = Catenary2D::new(h, 1.096, 1000.0, 0.0);
        let unloader = CatenaryCableUnloader {
            catenary,
            elongation_model: &model,
        };
        let recovered = unloader.length_unstretched().unwrap();
        assert!((recovered - 999.5).abs() < 0.05);
    }
}

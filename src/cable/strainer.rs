use super::elongation::CableElongationModel;
use crate::error::Result;

/// Resolves how a cable's unstretched length changes between two loading
/// conditions that share the same [`CableElongationModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct Strainer<'a> {
    pub elongation_model: &'a CableElongationModel,
}

impl<'a> Strainer<'a> {
    pub fn new(elongation_model: &'a CableElongationModel) -> Self {
        Self { elongation_model }
    }

    /// Strain at `load`, delegating to the underlying elongation model.
    pub fn strain_at_load(&self, load: f64) -> Result<f64> {
        self.elongation_model.strain(load)
    }

    /// Length at `load_finish`, given the cable's length at `load_start`.
    ///
    /// `length_start` is the cable's actual (strained) length under
    /// `load_start`; the unstretched length is backed out internally so the
    /// same elongation model can be reused for both conditions.
    pub fn length_finish(&self, length_start: f64, load_start: f64, load_finish: f64) -> Result<f64> {
        let strain_start = self.elongation_model.strain(load_start)?;
        let strain_finish = self.elongation_model.strain(load_finish)?;
        Ok(length_start * (1.0 + strain_finish) / (1.0 + strain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::component::{CableComponent, CablePolynomialType};
    use crate::cable::elongation_component::CableComponentElongationModel;

    fn model() -> CableElongationModel {
        let component = CableComponent {
            coefficient_thermal_expansion: 0.0000128,
            heat_capacity: 0.25,
            coefficients_polynomial_load_strain: vec![0.0, 1_500_000.0],
            coefficients_polynomial_creep: vec![0.0, 1_200_000.0],
            strain_limit_polynomial_load_strain: 0.02,
            strain_limit_polynomial_creep: 0.02,
            modulus_compression_area: 1_500_000.0,
            modulus_tension_area: 1_500_000.0,
            area_cross_section: 0.7264,
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
    fn length_grows_with_additional_load() {
        let model = model();
        let strainer = Strainer::new(&model);
        let length_finish = strainer.length_finish(1000.0, 1000.0, 6000.0).unwrap();
        assert!(length_finish > 1000.0);
    }

    #[test]
    fn zero_load_change_preserves_length() {
        let model = model();
        let strainer = Strainer::new(&model);
        let length_finish = strainer.length_finish(1000.0, 3000.0, 3000.0).unwrap();
        assert!((length_finish - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn round_trip_recovers_starting_length() {
        let model = model();
        let strainer = Strainer::new(&model);
        let length_finish = strainer.length_finish(1000.0, 1000.0, 6000.0).unwrap();
        let length_recovered = strainer.length_finish(length_finish, 6000.0, 1000.0).unwrap();
        assert!((length_recovered - 1000.0).abs() < 0.001);
    }
}

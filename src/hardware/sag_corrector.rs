use crate::cable::{CableElongationModel, Strainer};
use crate::catenary::Catenary2D;
use crate::error::Result;
use crate::rootfind::secant;
use crate::sagtension::CatenaryCableLoader;

const MAX_ITERATIONS: u32 = 100;
const TOLERANCE_LENGTH: f64 = 0.01;

/// One span's geometry within a multi-span stringing section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanGeometry {
    pub spacing_horizontal: f64,
    pub spacing_vertical: f64,
}

/// One span's result: its tension while still strung over travelers
/// (pulleys, tension shared across the whole section) versus its tension
/// once clipped in at a fixed length (spans independent of one another).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SagCorrection {
    pub catenary_pulley: Catenary2D,
    pub catenary_clipped: Catenary2D,
    /// `clipped.sag() - pulley.sag()`, the correction a stringing crew
    /// would apply when marking the final clip point.
    pub offset_sag: f64,
}

/// Finds, for a cable strung over travelers across several spans, the
/// common pulley-equalized tension, and then the tension each span settles
/// to once clipped in and no longer able to share tension with its
/// neighbors.
pub struct CableSagPositionCorrector<'a> {
    pub spans: &'a [SpanGeometry],
    pub unit_weight: f64,
    pub elongation_model: &'a CableElongationModel,
    /// Total unstretched cable length distributed across all spans while
    /// still riding on travelers.
    pub length_total_unstretched: f64,
}

impl<'a> CableSagPositionCorrector<'a> {
    fn catenaries(&self, horizontal_tension: f64) -> Vec<Catenary2D> {
        self.spans
            .iter()
            .map(|span| {
                Catenary2D::new(
                    horizontal_tension,
                    self.unit_weight,
                    span.spacing_horizontal,
                    span.spacing_vertical,
                )
            })
            .collect()
    }

    fn length_weighted_strain(&self, catenaries: &[Catenary2D]) -> Result<f64> {
        let strainer = Strainer::new(self.elongation_model);
        let total_length: f64 = catenaries.iter().map(|c| c.length()).sum();
        let mut weighted_strain = 0.0;
        for catenary in catenaries {
            let strain = strainer.strain_at_load(catenary.tension_average())?;
            weighted_strain += catenary.length() * strain;
        }
        Ok(weighted_strain / total_length)
    }

    /// Solves for the pulley-equalized horizontal tension common to every
    /// span.
    pub fn solve_pulley_tension(&self) -> Result<f64> {
        let minimum = self.unit_weight * self.spans[0].spacing_horizontal * 0.1;
        let maximum = self.unit_weight
            * self
                .spans
                .iter()
                .map(|s| s.spacing_horizontal)
                .fold(0.0, f64::max)
            * 20.0;

        secant(
            minimum,
            maximum,
            TOLERANCE_LENGTH,
            MAX_ITERATIONS,
            "CableSagPositionCorrector::solve_pulley_tension",
            |h| {
                let catenaries = self.catenaries(h);
                let length_stretched: f64 = catenaries.iter().map(|c| c.length()).sum();
                let strain = self.length_weighted_strain(&catenaries).unwrap_or(0.0);
                length_stretched - self.length_total_unstretched * (1.0 + strain)
            },
        )
    }

    /// Resolves every span's pulley tension and post-clip tension.
    pub fn solve(&self) -> Result<Vec<SagCorrection>> {
        let h_pulley = self.solve_pulley_tension()?;
        let catenaries_pulley = self.catenaries(h_pulley);
        let strainer = Strainer::new(self.elongation_model);

        let mut results = Vec::with_capacity(self.spans.len());
        for (span, catenary_pulley) in self.spans.iter().zip(catenaries_pulley.iter()) {
            let strain = strainer.strain_at_load(catenary_pulley.tension_average())?;
            let length_unstretched = catenary_pulley.length() / (1.0 + strain);

            let loader = CatenaryCableLoader {
                unit_weight: self.unit_weight,
                spacing_horizontal: span.spacing_horizontal,
                spacing_vertical: span.spacing_vertical,
                length_unstretched,
                elongation_model: self.elongation_model,
            };
            let h_clipped = loader.solve_horizontal_tension()?;
            let catenary_clipped = Catenary2D::new(
                h_clipped,
                self.unit_weight,
                span.spacing_horizontal,
                span.spacing_vertical,
            );

            results.push(SagCorrection {
                catenary_pulley: *catenary_pulley,
                catenary_clipped,
                offset_sag: catenary_clipped.sag() - catenary_pulley.sag(),
            });
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{CableComponent, CableComponentElongationModel, CablePolynomialType};

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
    fn equal_spans_need_no_correction() {
        let model = elongation_model();
        let spans = vec![
            SpanGeometry {
                spacing_horizontal: 1000.0,
                spacing_vertical: 0.0,
            },
            SpanGeometry {
                spacing_horizontal: 1000.0,
                spacing_vertical: 0.0,
            },
        ];
        let corrector = CableSagPositionCorrector {
            spans: &spans,
            unit_weight: 1.096,
            elongation_model: &model,
            length_total_unstretched: 1999.0,
        };
        let corrections = corrector.solve().unwrap();
        assert!((corrections[0].offset_sag).abs() < 1e-3);
        assert!((corrections[0].offset_sag - corrections[1].offset_sag).abs() < 1e-6);
    }

    #[test]
    fn unequal_spans_redistribute_sag() {
        let model = elongation_model();
        let spans = vec![
            SpanGeometry {
                spacing_horizontal: 600.0,
                spacing_vertical: 0.0,
            },
            SpanGeometry {
                spacing_horizontal: 1400.0,
                spacing_vertical: 0.0,
            },
        ];
        let corrector = CableSagPositionCorrector {
            spans: &spans,
            unit_weight: 1.096,
            elongation_model: &model,
            length_total_unstretched: 1999.0,
        };
        let corrections = corrector.solve().unwrap();
        assert!(corrections[0].catenary_clipped.horizontal_tension > 0.0);
        assert!(corrections[1].catenary_clipped.horizontal_tension > 0.0);
    }
}

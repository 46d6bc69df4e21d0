use crate::cable::{CableElongationModel, Strainer};
use crate::catenary::Catenary2D;
use crate::error::Result;
use crate::rootfind::false_position;

const MAX_ITERATIONS: u32 = 100;
const TOLERANCE_LENGTH: f64 = 0.01;

/// Finds the self-consistent horizontal tension for a cable of known
/// unstretched length strung into a catenary of known span: the catenary's
/// geometric length must equal the cable's stretched length at the average
/// tension the catenary itself implies.
pub struct CatenaryCableLoader<'a> {
    pub unit_weight: f64,
    pub spacing_horizontal: f64,
    pub spacing_vertical: f64,
    pub length_unstretched: f64,
    pub elongation_model: &'a CableElongationModel,
}

impl<'a> CatenaryCableLoader<'a> {
    fn catenary(&self, horizontal_tension: f64) -> Catenary2D {
        Catenary2D::new(
            horizontal_tension,
            self.unit_weight,
            self.spacing_horizontal,
            self.spacing_vertical,
        )
    }

    fn length_difference(&self, horizontal_tension: f64) -> Result<f64> {
        let catenary = self.catenary(horizontal_tension);
        let length_catenary = catenary.length();
        let strainer = Strainer::new(self.elongation_model);
        let strain = strainer.strain_at_load(catenary.tension_average())?;
        let length_cable = self.length_unstretched * (1.0 + strain);
        Ok(length_catenary - length_cable)
    }

    /// Solves for the horizontal tension, bracketing between a tenth and
    /// ten times the span's minimum supportable tension (`w * span / 2`).
    pub fn solve_horizontal_tension(&self) -> Result<f64> {
        let minimum = self.unit_weight * self.spacing_horizontal * 0.1;
        let maximum = self.unit_weight * self.spacing_horizontal * 20.0;
        false_position(
            minimum,
            maximum,
            TOLERANCE_LENGTH,
            MAX_ITERATIONS,
            "CatenaryCableLoader::solve_horizontal_tension",
            |h| self.length_difference(h).unwrap_or(f64::INFINITY),
        )
    }
}

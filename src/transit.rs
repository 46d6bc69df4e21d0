use crate::catenary::Catenary2D;
use crate::error::{Result, SagTensionError};
use crate::geometry::{Point2D, Vector2D};

const SEARCH_POINTS: usize = 11;
const SEARCH_ITERATIONS: u32 = 10;

/// Finds where a catenary's sight line from a fixed transit instrument
/// position grazes the curve at the shallowest angle — the field-survey
/// "sag shot" technique, where a crew levels a transit on one structure and
/// looks for the point along the adjacent span where the line of sight is
/// tangent to the conductor.
///
/// The search narrows a bracket of the curve's horizontal-fraction domain
/// by repeatedly sampling 11 evenly spaced points and keeping the interval
/// around whichever sample had the shallowest sight angle, for 10 rounds —
/// each round shrinks the bracket by a factor of 5, giving roughly
/// `5^-10` resolution of the original span.
pub struct TransitSagger {
    pub catenary: Catenary2D,
    /// Transit position, relative to the catenary's start point.
    pub point_transit: Point2D,
}

impl TransitSagger {
    fn angle_from_transit(&self, fraction: f64) -> f64 {
        let point = self.catenary.position_fraction(fraction);
        let sight = Vector2D::new(point.x - self.point_transit.x, point.y - self.point_transit.y);
        sight.angle(true).unwrap_or(f64::INFINITY).abs()
    }

    /// Narrows the search bracket `[low, high]` by sampling `SEARCH_POINTS`
    /// evenly spaced fractions and keeping the interval straddling the
    /// shallowest-angle sample.
    fn narrow_bracket(&self, low: f64, high: f64) -> (f64, f64) {
        let step = (high - low) / (SEARCH_POINTS - 1) as f64;
        let mut best_index = 0;
        let mut best_angle = f64::INFINITY;

        for i in 0..SEARCH_POINTS {
            let fraction = low + step * i as f64;
            let angle = self.angle_from_transit(fraction);
            if angle < best_angle {
                best_angle = angle;
                best_index = i;
            }
        }

        let low_index = best_index.saturating_sub(1);
        let high_index = (best_index + 1).min(SEARCH_POINTS - 1);
        (low + step * low_index as f64, low + step * high_index as f64)
    }

    /// The low-sight-angle point, as a horizontal-fraction position along
    /// the span (0.0 at the catenary's start point, 1.0 at its end).
    pub fn solve_low_angle_fraction(&self) -> Result<f64> {
        let mut low = 0.0;
        let mut high = 1.0;

        for _ in 0..SEARCH_ITERATIONS {
            let (new_low, new_high) = self.narrow_bracket(low, high);
            if new_low == new_high {
                return Err(SagTensionError::DidNotConverge {
                    solver: "TransitSagger::solve_low_angle_fraction",
                    iterations: SEARCH_ITERATIONS,
                    last_residual: 0.0,
                });
            }
            low = new_low;
            high = new_high;
        }

        Ok((low + high) / 2.0)
    }

    /// The curve point at the resolved low-angle fraction.
    pub fn point_target(&self) -> Result<Point2D> {
        let fraction = self.solve_low_angle_fraction()?;
        Ok(self.catenary.position_fraction(fraction))
    }

    /// Ratio of how far into the final narrowed bracket the true minimum
    /// sits, estimated from a quadratic fit of the angle at the bracket's
    /// endpoints and midpoint. A value near `0.5` means the discrete search
    /// already bracketed the minimum tightly; values toward `0.0` or `1.0`
    /// indicate the true minimum lies near one edge of the final bracket.
    pub fn factor_control(&self) -> Result<f64> {
        let fraction = self.solve_low_angle_fraction()?;
        let delta = 0.0005;
        let angle_low = self.angle_from_transit((fraction - delta).max(0.0));
        let angle_mid = self.angle_from_transit(fraction);
        let angle_high = self.angle_from_transit((fraction + delta).min(1.0));

        let denominator = angle_low - 2.0 * angle_mid + angle_high;
        if denominator == 0.0 {
            return Ok(0.5);
        }
        Ok((0.5 * (angle_low - angle_high) / denominator).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_low_angle_point_near_curve_vertex_for_centered_transit() {
        let catenary = Catenary2D::new(6000.0, 1.096, 1000.0, 0.0);
        let sagger = TransitSagger {
            catenary,
            point_transit: Point2D::new(0.0, 20.0),
        };
        let fraction = sagger.solve_low_angle_fraction().unwrap();
        assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn factor_control_is_bounded() {
        let catenary = Catenary2D::new(6000.0, 1.096, 1000.0, 0.0);
        let sagger = TransitSagger {
            catenary,
            point_transit: Point2D::new(0.0, 20.0),
        };
        let factor = sagger.factor_control().unwrap();
        assert!((0.0..=1.0).contains(&factor));
    }
}

use super::Catenary2D;
use crate::error::Result;
use crate::geometry::{AxisDirection, Plane2D, Point3D, Vector3D};
use crate::validation::{Validate, ValidationMessage};

/// A catenary suspended in 3D space under a combined vertical and
/// transverse (e.g. wind) load.
///
/// Both end points lie on the straight horizontal chord between them (no
/// lateral offset) — the curve's *shape* is governed by the resultant
/// magnitude of `unit_weight`, while the curve's *plane* tilts away from
/// vertical, about the chord axis, by the angle between the transverse and
/// vertical components of `unit_weight`. This mirrors the reference model's
/// resultant-load catenary plane, generalized through [`Plane2D`] rather
/// than a bespoke swing-angle formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catenary3D {
    pub horizontal_tension: f64,
    /// Combined load per unit length: `x`/`y` are the horizontal transverse
    /// components (e.g. wind), `z` is the vertical component (gravity).
    pub unit_weight: Vector3D,
    /// End point position relative to the start point.
    pub spacing: Vector3D,
}

impl Catenary3D {
    pub fn new(horizontal_tension: f64, unit_weight: Vector3D, spacing: Vector3D) -> Self {
        Self {
            horizontal_tension,
            unit_weight,
            spacing,
        }
    }

    fn chord_horizontal_distance(&self) -> f64 {
        (self.spacing.x.powi(2) + self.spacing.y.powi(2)).sqrt()
    }

    /// Compass bearing (radians) of the chord's horizontal projection.
    fn bearing_radians(&self) -> f64 {
        Vector3D::new(self.spacing.x, self.spacing.y, 0.0)
            .angle_in_plane(Plane2D::Xy, false)
            .unwrap_or(0.0)
            .to_radians()
    }

    fn transverse_unit_weight(&self) -> f64 {
        (self.unit_weight.x.powi(2) + self.unit_weight.y.powi(2)).sqrt()
    }

    /// Tilt of the catenary's plane away from vertical, found with
    /// [`Vector3D::angle_in_plane`] over a helper vector whose "x" is the
    /// transverse load magnitude and whose "z" is the vertical load.
    pub fn swing_angle_degrees(&self) -> f64 {
        let helper = Vector3D::new(self.transverse_unit_weight(), 0.0, self.unit_weight.z);
        helper.angle_in_plane(Plane2D::Zx, false).unwrap_or(0.0)
    }

    pub fn resultant_unit_weight(&self) -> f64 {
        self.unit_weight.magnitude()
    }

    /// The equivalent 2D catenary in the curve's own tilted plane: horizontal
    /// axis along the chord, vertical axis along the true vertical.
    pub fn catenary_2d(&self) -> Catenary2D {
        Catenary2D::new(
            self.horizontal_tension,
            self.resultant_unit_weight(),
            self.chord_horizontal_distance(),
            self.spacing.z,
        )
    }

    pub fn length(&self) -> f64 {
        self.catenary_2d().length()
    }

    pub fn tension_max(&self) -> f64 {
        self.catenary_2d().tension_max()
    }

    pub fn tension_average(&self) -> f64 {
        self.catenary_2d().tension_average()
    }

    /// 3D point along the curve at `fraction` of the chord (0.0 at start,
    /// 1.0 at end), relative to the start point.
    pub fn position_fraction(&self, fraction: f64) -> Point3D {
        let local = self.catenary_2d().position_fraction(fraction);
        let bearing = self.bearing_radians();
        Point3D::new(local.x * bearing.cos(), local.x * bearing.sin(), local.y)
    }

    /// Tension vector at whichever end `direction` designates, decomposed
    /// into the chord, transverse, and vertical axes via the plane's swing
    /// angle.
    pub fn tension_vector(&self, direction: AxisDirection) -> Vector3D {
        let c2d = self.catenary_2d();
        let magnitude = c2d.tension_end(direction);
        let c = c2d.constant();
        let half_span_term = (self.chord_horizontal_distance() / (2.0 * c)).sinh();
        let x_vertex_offset = c * (self.spacing.z / (2.0 * c * half_span_term)).asinh();
        let x_end = match direction {
            AxisDirection::Negative => x_vertex_offset - self.chord_horizontal_distance() / 2.0,
            AxisDirection::Positive => x_vertex_offset + self.chord_horizontal_distance() / 2.0,
        };
        let slope = (x_end / c).sinh();
        let theta = slope.atan();
        let sign = match direction {
            AxisDirection::Negative => -1.0,
            AxisDirection::Positive => 1.0,
        };
        let horiz_component = sign * theta.cos();
        let vert_component = theta.sin();

        let swing = self.swing_angle_degrees().to_radians();
        let bearing = self.bearing_radians();
        let true_vertical = vert_component * swing.cos();
        let transverse = vert_component * swing.sin();

        let chord_unit = Vector3D::new(bearing.cos(), bearing.sin(), 0.0);
        let transverse_unit = Vector3D::new(-bearing.sin(), bearing.cos(), 0.0);
        let vertical_unit = Vector3D::new(0.0, 0.0, 1.0);

        (chord_unit * horiz_component + transverse_unit * transverse + vertical_unit * true_vertical)
            .scaled(magnitude)
    }

    pub fn build(horizontal_tension: f64, unit_weight: Vector3D, spacing: Vector3D) -> Result<Self> {
        let catenary = Self::new(horizontal_tension, unit_weight, spacing);
        catenary.catenary_2d(); // exercises the same validation path
        Ok(catenary)
    }
}

impl Validate for Catenary3D {
    fn validate(&self) -> Vec<ValidationMessage> {
        self.catenary_2d().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn level_chord_no_wind_lies_in_vertical_plane() {
        let cat = Catenary3D::new(
            6000.0,
            Vector3D::new(0.0, 0.0, 1.096),
            Vector3D::new(1000.0, 0.0, 0.0),
        );
        assert_relative_eq!(cat.swing_angle_degrees(), 0.0, epsilon = 1e-6);
        let mid = cat.position_fraction(0.5);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn wind_load_tilts_plane() {
        let cat = Catenary3D::new(
            6000.0,
            Vector3D::new(0.5, 0.0, 1.096),
            Vector3D::new(1000.0, 0.0, 0.0),
        );
        assert!(cat.swing_angle_degrees() > 0.0);
        assert!(cat.swing_angle_degrees() < 90.0);
    }

    #[test]
    fn length_matches_equivalent_2d_catenary() {
        let cat = Catenary3D::new(
            6000.0,
            Vector3D::new(0.0, 0.0, 1.096),
            Vector3D::new(1000.0, 0.0, 30.0),
        );
        assert_relative_eq!(cat.length(), cat.catenary_2d().length(), epsilon = 1e-9);
    }

    #[test]
    fn endpoint_position_matches_spacing_horizontally() {
        let cat = Catenary3D::new(
            6000.0,
            Vector3D::new(0.0, 0.0, 1.096),
            Vector3D::new(600.0, 800.0, 0.0),
        );
        let end = cat.position_fraction(1.0);
        assert_relative_eq!(end.x, 600.0, epsilon = 1e-6);
        assert_relative_eq!(end.y, 800.0, epsilon = 1e-6);
    }
}

use crate::catenary::Catenary3D;
use crate::geometry::{AxisDirection, Plane2D, Vector3D};

/// Static equilibrium of a suspension hardware assembly between a back and
/// ahead span, found in closed form rather than by iteration: the two spans'
/// support tensions are rotated into a frame bisecting the angle between
/// them and summed, then resolved against the hardware's own hanging
/// direction.
pub struct CableAttachmentEquilibriumSolver {
    pub catenary_back: Catenary3D,
    pub catenary_ahead: Catenary3D,
    /// Angle (degrees) between the back and ahead catenaries in the xy-plane,
    /// measured at the shared attachment.
    pub angle_xy_between: f64,
    /// Hardware tilt from vertical, in the zy-plane (degrees).
    pub angle_tilt_hardware: f64,
    /// Which side of the xz-plane the catenaries' transverse components lie
    /// on; flips the sign convention used to report the equilibrium angle.
    pub direction_y: AxisDirection,
}

/// Result of resolving one attachment's hardware equilibrium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumResult {
    /// Resting hardware angle in the zy-plane, from vertical.
    pub angle_equilibrium: f64,
    /// Magnitude of the unresolved force at the current hardware angle.
    pub imbalance: f64,
}

impl CableAttachmentEquilibriumSolver {
    fn direction_sign(&self) -> f64 {
        match self.direction_y {
            AxisDirection::Positive => 1.0,
            AxisDirection::Negative => -1.0,
        }
    }

    /// Tension a span exerts on the attachment: the reaction to the
    /// catenary's own tangent tension at that end.
    fn support_tension(catenary: &Catenary3D) -> Vector3D {
        catenary.tension_vector(AxisDirection::Negative).scaled(-1.0)
    }

    pub fn solve(&self) -> EquilibriumResult {
        let rotation = (180.0 - self.angle_xy_between) / 2.0;
        let tension_back = Self::support_tension(&self.catenary_back).rotated_in_plane(Plane2D::Xy, rotation);
        let tension_ahead =
            Self::support_tension(&self.catenary_ahead).rotated_in_plane(Plane2D::Xy, -rotation);
        let cable_tension = tension_back + tension_ahead;

        let sign = self.direction_sign();
        let hardware_unit =
            Vector3D::new(0.0, 0.0, -1.0).rotated_in_plane(Plane2D::Zy, sign * self.angle_tilt_hardware);
        let hardware_tension = hardware_unit.scaled(cable_tension.dot(&hardware_unit)).scaled(-1.0);

        let imbalance = (cable_tension + hardware_tension).scaled(-1.0);
        let angle_equilibrium = sign * cable_tension.angle_in_plane(Plane2D::Zy, true).unwrap_or(0.0);

        EquilibriumResult {
            angle_equilibrium,
            imbalance: imbalance.magnitude(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level_catenary(horizontal_tension: f64, spacing: Vector3D) -> Catenary3D {
        Catenary3D::new(horizontal_tension, Vector3D::new(0.0, 0.0, 1.096), spacing)
    }

    #[test]
    fn symmetric_spans_leave_hardware_near_plumb() {
        let solver = CableAttachmentEquilibriumSolver {
            catenary_back: level_catenary(6000.0, Vector3D::new(-500.0, 0.0, 0.0)),
            catenary_ahead: level_catenary(6000.0, Vector3D::new(500.0, 0.0, 0.0)),
            angle_xy_between: 180.0,
            angle_tilt_hardware: 0.0,
            direction_y: AxisDirection::Positive,
        };
        let result = solver.solve();
        assert_relative_eq!(result.angle_equilibrium, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn unequal_tension_swings_the_hardware() {
        let solver = CableAttachmentEquilibriumSolver {
            catenary_back: level_catenary(4000.0, Vector3D::new(-500.0, 0.0, 0.0)),
            catenary_ahead: level_catenary(9000.0, Vector3D::new(500.0, 0.0, 0.0)),
            angle_xy_between: 180.0,
            angle_tilt_hardware: 0.0,
            direction_y: AxisDirection::Positive,
        };
        let result = solver.solve();
        assert!(result.angle_equilibrium.abs() > 1e-6);
    }
}

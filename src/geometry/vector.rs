use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of a 3D vector's two planar components to treat as the "x" and "y"
/// of a 2D angle/rotation calculation, and in what order.
///
/// The order matters: [`Plane2D::Yx`] puts `y` first and `x` second, which
/// is not simply "drop `z`" — `CableAttachmentEquilibriumSolver` and
/// [`crate::catenary::Catenary3D`] both depend on the exact ordering below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Plane2D {
    Xy,
    Xz,
    Yx,
    Yz,
    Zx,
    Zy,
}

/// The sense a tangent, tension, or load vector is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisDirection {
    Positive,
    Negative,
}

/// A two-component cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Quadrant-aware angle in degrees, measured counterclockwise from the
    /// positive x-axis. Values that fall exactly on an axis return the axis
    /// angle directly rather than relying on an arctangent limit, which
    /// keeps e.g. the positive x-axis at exactly `0.0` rather than `359.999..`.
    ///
    /// Returns `None` when the vector is the zero vector, where no angle is
    /// defined. `allow_negative` folds angles above 180 degrees into
    /// `(angle - 360)` instead of leaving them in `[0, 360)`.
    pub fn angle(&self, allow_negative: bool) -> Option<f64> {
        let mut angle = if self.x == 0.0 || self.y == 0.0 {
            if self.x == 0.0 {
                if self.y > 0.0 {
                    90.0
                } else if self.y < 0.0 {
                    270.0
                } else {
                    return None;
                }
            } else if self.x > 0.0 {
                0.0
            } else {
                180.0
            }
        } else if self.y >= 0.0 {
            if self.x >= 0.0 {
                (self.y / self.x).atan().to_degrees()
            } else {
                180.0 - (self.y / self.x).atan().abs().to_degrees()
            }
        } else if self.x <= 0.0 {
            180.0 + (self.y / self.x).atan().abs().to_degrees()
        } else {
            360.0 - (self.y / self.x).atan().abs().to_degrees()
        };

        if allow_negative && angle > 180.0 {
            angle -= 360.0;
        }
        Some(angle)
    }

    /// Rotates the vector by `angle_rotation_deg` degrees, converting to the
    /// radial coordinate system and back. A near-zero rotation is a no-op
    /// rather than risking magnitude drift from the round trip.
    pub fn rotated(&self, angle_rotation_deg: f64) -> Vector2D {
        if angle_rotation_deg.abs() < 0.00005 {
            return *self;
        }
        let magnitude = self.magnitude();
        let angle = self.angle(false).unwrap_or(0.0);
        let angle_new = (angle + angle_rotation_deg).to_radians();
        Vector2D::new(magnitude * angle_new.cos(), magnitude * angle_new.sin())
    }

    pub fn scaled(&self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f64) -> Vector2D {
        self.scaled(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

/// A three-component cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn planar_components(&self, plane: Plane2D) -> Vector2D {
        match plane {
            Plane2D::Xy => Vector2D::new(self.x, self.y),
            Plane2D::Xz => Vector2D::new(self.x, self.z),
            Plane2D::Yx => Vector2D::new(self.y, self.x),
            Plane2D::Yz => Vector2D::new(self.y, self.z),
            Plane2D::Zx => Vector2D::new(self.z, self.x),
            Plane2D::Zy => Vector2D::new(self.z, self.y),
        }
    }

    fn set_planar_components(&mut self, plane: Plane2D, planar: Vector2D) {
        match plane {
            Plane2D::Xy => {
                self.x = planar.x;
                self.y = planar.y;
            }
            Plane2D::Xz => {
                self.x = planar.x;
                self.z = planar.y;
            }
            Plane2D::Yx => {
                self.y = planar.x;
                self.x = planar.y;
            }
            Plane2D::Yz => {
                self.y = planar.x;
                self.z = planar.y;
            }
            Plane2D::Zx => {
                self.z = planar.x;
                self.x = planar.y;
            }
            Plane2D::Zy => {
                self.z = planar.x;
                self.y = planar.y;
            }
        }
    }

    /// Angle of the vector's two components in `plane`, delegating to
    /// [`Vector2D::angle`] with the plane's component order.
    pub fn angle_in_plane(&self, plane: Plane2D, allow_negative: bool) -> Option<f64> {
        self.planar_components(plane).angle(allow_negative)
    }

    /// Rotates the vector's two components in `plane`, leaving the third
    /// component untouched.
    pub fn rotated_in_plane(&self, plane: Plane2D, angle_rotation_deg: f64) -> Vector3D {
        if angle_rotation_deg.abs() < 0.00005 {
            return *self;
        }
        let rotated = self.planar_components(plane).rotated(angle_rotation_deg);
        let mut result = *self;
        result.set_planar_components(plane, rotated);
        result
    }

    pub fn scaled(&self, factor: f64) -> Vector3D {
        Vector3D::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn normalized(&self) -> Option<Vector3D> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            None
        } else {
            Some(self.scaled(1.0 / magnitude))
        }
    }
}

impl Add for Vector3D {
    type Output = Vector3D;
    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;
    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3D {
    fn sub_assign(&mut self, rhs: Vector3D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;
    fn mul(self, rhs: f64) -> Vector3D {
        self.scaled(rhs)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;
    fn div(self, rhs: f64) -> Vector3D {
        Vector3D::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;
    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_quadrant_i() {
        let v = Vector2D::new(1.0, 1.0);
        assert_relative_eq!(v.angle(false).unwrap(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_quadrant_ii() {
        let v = Vector2D::new(-1.0, 1.0);
        assert_relative_eq!(v.angle(false).unwrap(), 135.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_quadrant_iii() {
        let v = Vector2D::new(-1.0, -1.0);
        assert_relative_eq!(v.angle(false).unwrap(), 225.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_quadrant_iv() {
        let v = Vector2D::new(1.0, -1.0);
        assert_relative_eq!(v.angle(false).unwrap(), 315.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_negative_wraps_above_180() {
        let v = Vector2D::new(-1.0, -1.0);
        assert_relative_eq!(v.angle(true).unwrap(), -135.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_on_axis() {
        assert_relative_eq!(Vector2D::new(5.0, 0.0).angle(false).unwrap(), 0.0);
        assert_relative_eq!(Vector2D::new(0.0, 5.0).angle(false).unwrap(), 90.0);
        assert_relative_eq!(Vector2D::new(-5.0, 0.0).angle(false).unwrap(), 180.0);
        assert_relative_eq!(Vector2D::new(0.0, -5.0).angle(false).unwrap(), 270.0);
    }

    #[test]
    fn angle_zero_vector_is_none() {
        assert_eq!(Vector2D::ZERO.angle(false), None);
    }

    #[test]
    fn rotate_preserves_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        let rotated = v.rotated(37.0);
        assert_relative_eq!(rotated.magnitude(), v.magnitude(), epsilon = 1e-9);
    }

    #[test]
    fn plane_yx_swaps_component_order() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let planar = v.planar_components(Plane2D::Yx);
        assert_relative_eq!(planar.x, 2.0);
        assert_relative_eq!(planar.y, 1.0);
    }

    #[test]
    fn rotate_in_plane_leaves_third_axis() {
        let v = Vector3D::new(3.0, 4.0, 9.0);
        let rotated = v.rotated_in_plane(Plane2D::Xy, 25.0);
        assert_relative_eq!(rotated.z, 9.0);
        assert_relative_eq!(rotated.magnitude(), v.magnitude(), epsilon = 1e-6);
    }
}

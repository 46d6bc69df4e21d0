use super::Vector3D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location in a 2D cartesian plane (horizontal distance, vertical height).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// A location in 3D space (e.g. an attachment point on a structure).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        (self.as_vector_to(other)).magnitude()
    }

    pub fn as_vector_to(&self, other: &Point3D) -> Vector3D {
        Vector3D::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    pub fn translated(&self, displacement: Vector3D) -> Point3D {
        Point3D::new(
            self.x + displacement.x,
            self.y + displacement.y,
            self.z + displacement.z,
        )
    }
}

/// A location expressed as (radius, horizontal angle from the x-axis in the
/// xy-plane, vertical angle from the z-axis) — the hardware-swing coordinate
/// used by [`crate::hardware::CablePositionLocator`], where a suspension
/// insulator's resting direction is tracked as a horizontal bisect angle
/// (fixed by its neighbors) and a vertical angle (updated by equilibrium
/// iteration) rather than as raw xyz.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphericalPoint3D {
    pub radius: f64,
    pub angle_horizontal: f64,
    pub angle_vertical: f64,
}

impl SphericalPoint3D {
    pub const fn new(radius: f64, angle_horizontal: f64, angle_vertical: f64) -> Self {
        Self {
            radius,
            angle_horizontal,
            angle_vertical,
        }
    }

    /// Cartesian coordinates relative to the anchoring structure point.
    /// `angle_vertical` is measured from the z-axis, so `180.0` (plumb)
    /// places the point straight down.
    pub fn to_vector(&self) -> Vector3D {
        let horizontal = self.angle_horizontal.to_radians();
        let vertical = self.angle_vertical.to_radians();
        let radius_horizontal = self.radius * vertical.sin();
        Vector3D::new(
            radius_horizontal * horizontal.cos(),
            radius_horizontal * horizontal.sin(),
            self.radius * vertical.cos(),
        )
    }
}

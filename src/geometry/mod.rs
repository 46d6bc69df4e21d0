mod point;
mod vector;

pub use point::{Point2D, Point3D, SphericalPoint3D};
pub use vector::{AxisDirection, Plane2D, Vector2D, Vector3D};

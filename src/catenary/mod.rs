mod catenary2d;
mod catenary3d;

pub use catenary2d::Catenary2D;
pub use catenary3d::Catenary3D;

//! Mechanical and thermal sag-tension analysis for overhead transmission
//! line conductors: catenary geometry, cable elongation under load and
//! temperature, the iterative solvers that move a conductor between
//! stringing conditions, and steady-state/transient thermal rating.

pub mod alignment;
pub mod cable;
pub mod catenary;
pub mod error;
pub mod geometry;
pub mod hardware;
pub mod line_cable;
pub mod polynomial;
pub mod rootfind;
pub mod sagtension;
pub mod thermal;
pub mod transit;
pub mod transmission_line;
pub mod units;
pub mod validation;
pub mod weather;

pub use cable::{
    Cable, CableComponent, CableComponentElongationModel, CableConditionType,
    CableElongationModel, CablePolynomialType, CableState, ElongationRegion, Strainer,
};
pub use catenary::{Catenary2D, Catenary3D};
pub use error::{Result, SagTensionError};
pub use geometry::{AxisDirection, Plane2D, Point2D, Point3D, SphericalPoint3D, Vector2D, Vector3D};
pub use line_cable::{CableConstraint, ConstraintType, LineCable, LineConnection};
pub use polynomial::Polynomial;
pub use sagtension::{
    CatenaryCableLoader, CatenaryCableReloader, CatenaryCableUnloader,
    LineCableReloadResult, LineCableReloader, LineCableSagger, LineCableToCatenaryConverter,
    SagPoint,
};
pub use transit::TransitSagger;
pub use weather::{CableUnitLoadCalculator, WeatherLoadCase};

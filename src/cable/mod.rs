mod cable;
mod component;
mod elongation;
mod elongation_component;
mod state;
mod strainer;

pub use cable::Cable;
pub use component::{CableComponent, CablePolynomialType};
pub use elongation::CableElongationModel;
pub use elongation_component::{CableComponentElongationModel, ElongationRegion};
pub use state::{CableConditionType, CableState};
pub use strainer::Strainer;

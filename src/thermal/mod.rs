mod cable_view;
mod heat_transfer;
mod steady;
mod transient;

pub use cable_view::ThermalRatingCable;
pub use heat_transfer::{CableHeatTransferSolver, CableHeatTransferState};
pub use steady::{SteadyCableCurrentSolver, SteadyCableTemperatureSolver};
pub use transient::{TemperaturePoint, TransientCableTemperatureSolver};

use super::cable_view::ThermalRatingCable;
use super::heat_transfer::CableHeatTransferSolver;
use crate::error::Result;
use crate::rootfind::secant;

const MAX_ITERATIONS: u32 = 100;
const TOLERANCE_CURRENT: f64 = 0.01;
const TOLERANCE_TEMPERATURE: f64 = 0.1;

/// Solves the steady-state current a conductor can carry at a fixed
/// allowable conductor temperature: the current at which resistance
/// heating exactly balances convective, radiative, and solar heat flow.
pub struct SteadyCableCurrentSolver<'a> {
    pub cable: &'a ThermalRatingCable,
    pub heat_transfer: &'a CableHeatTransferSolver,
    pub temperature_conductor: f64,
}

impl<'a> SteadyCableCurrentSolver<'a> {
    fn residual(&self, current: f64) -> f64 {
        let resistance = self.cable.resistance(self.temperature_conductor);
        let state = self
            .heat_transfer
            .state(current, self.temperature_conductor, resistance, 0.0);
        state.residual()
    }

    pub fn solve_current(&self) -> Result<f64> {
        secant(
            10.0,
            1000.0,
            TOLERANCE_CURRENT,
            MAX_ITERATIONS,
            "SteadyCableCurrentSolver::solve_current",
            |current| self.residual(current),
        )
    }
}

/// Solves the steady-state conductor temperature reached by a known,
/// constant current.
pub struct SteadyCableTemperatureSolver<'a> {
    pub cable: &'a ThermalRatingCable,
    pub heat_transfer: &'a CableHeatTransferSolver,
    pub current: f64,
}

impl<'a> SteadyCableTemperatureSolver<'a> {
    fn residual(&self, temperature_conductor: f64) -> f64 {
        let resistance = self.cable.resistance(temperature_conductor);
        let state = self
            .heat_transfer
            .state(self.current, temperature_conductor, resistance, 0.0);
        state.residual()
    }

    pub fn solve_temperature(&self) -> Result<f64> {
        let t_air = self.heat_transfer.temperature_air;
        secant(
            t_air,
            t_air + 10.0,
            TOLERANCE_TEMPERATURE,
            MAX_ITERATIONS,
            "SteadyCableTemperatureSolver::solve_temperature",
            |temperature| self.residual(temperature),
        )
    }
}

use super::cable_view::ThermalRatingCable;
use super::heat_transfer::CableHeatTransferSolver;
use super::steady::SteadyCableTemperatureSolver;
use crate::error::Result;

/// Conductor temperature at a point in time during a transient heating
/// event (e.g. a short-term emergency overload).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePoint {
    pub time: f64,
    pub temperature: f64,
}

/// Steps a conductor's temperature forward through a step change in
/// current, starting from its steady-state temperature at `current_initial`
/// and integrating the heat balance (including thermal storage) one time
/// unit at a time up to `duration`.
pub struct TransientCableTemperatureSolver<'a> {
    pub cable: &'a ThermalRatingCable,
    pub heat_transfer: &'a CableHeatTransferSolver,
    pub current_initial: f64,
    pub current_final: f64,
    pub duration: f64,
}

impl<'a> TransientCableTemperatureSolver<'a> {
    fn temperature_steady(&self, current: f64) -> Result<f64> {
        let solver = SteadyCableTemperatureSolver {
            cable: self.cable,
            heat_transfer: self.heat_transfer,
            current,
        };
        solver.solve_temperature()
    }

    /// Temperature points at each whole time unit from `0` to `duration`
    /// inclusive, under the step change to `current_final`.
    pub fn temperature_points(&self) -> Result<Vec<TemperaturePoint>> {
        let temperature_start = self.temperature_steady(self.current_initial)?;
        let mut points = vec![TemperaturePoint {
            time: 0.0,
            temperature: temperature_start,
        }];

        let mut temperature = temperature_start;
        let steps = self.duration.floor() as u32;

        for step in 1..=steps {
            let resistance = self.cable.resistance(temperature);
            let state = self
                .heat_transfer
                .state(self.current_final, temperature, resistance, 0.0);
            let heat_net = state.heat_resistance + state.heat_solar - state.heat_convection - state.heat_radiation;
            let delta_temperature = heat_net / self.cable.heat_capacity_per_foot;
            temperature += delta_temperature;
            points.push(TemperaturePoint {
                time: step as f64,
                temperature,
            });
        }

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cable() -> ThermalRatingCable {
        ThermalRatingCable {
            diameter: 1.108,
            emissivity: 0.5,
            absorptivity: 0.5,
            heat_capacity_per_foot: 4.0,
            resistance_points: vec![(25.0, 0.0000872), (212.0, 0.0001210)],
        }
    }

    fn heat_transfer() -> CableHeatTransferSolver {
        CableHeatTransferSolver {
            diameter: 1.108,
            emissivity: 0.5,
            absorptivity: 0.5,
            elevation: 0.0,
            temperature_air: 104.0,
            velocity_wind: 2.0,
            angle_wind_degrees: 90.0,
            intensity_solar: 100.0,
        }
    }

    #[test]
    fn temperature_rises_toward_new_steady_state() {
        let cable = cable();
        let heat_transfer = heat_transfer();
        let solver = TransientCableTemperatureSolver {
            cable: &cable,
            heat_transfer: &heat_transfer,
            current_initial: 400.0,
            current_final: 700.0,
            duration: 15.0,
        };
        let points = solver.temperature_points().unwrap();
        assert_eq!(points.len(), 16);
        assert!(points.last().unwrap().temperature > points.first().unwrap().temperature);
    }

    #[test]
    fn zero_duration_returns_only_initial_point() {
        let cable = cable();
        let heat_transfer = heat_transfer();
        let solver = TransientCableTemperatureSolver {
            cable: &cable,
            heat_transfer: &heat_transfer,
            current_initial: 400.0,
            current_final: 700.0,
            duration: 0.0,
        };
        let points = solver.temperature_points().unwrap();
        assert_eq!(points.len(), 1);
    }
}

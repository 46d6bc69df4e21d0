/// The conservation-of-energy state for a cable cross section: heat
/// generated by resistance and solar gain against heat lost to convection,
/// radiation, and (for a transient analysis) absorbed into thermal mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableHeatTransferState {
    pub heat_convection: f64,
    pub heat_radiation: f64,
    pub heat_resistance: f64,
    pub heat_solar: f64,
    pub heat_stored: f64,
}

impl CableHeatTransferState {
    /// Positive when the cable is gaining heat faster than it sheds it.
    pub fn residual(&self) -> f64 {
        self.heat_resistance + self.heat_solar - self.heat_convection - self.heat_radiation - self.heat_stored
    }
}

const STEFAN_BOLTZMANN_IMPERIAL: f64 = 0.1714e-8; // Btu / (hr * ft^2 * R^4)

/// Computes each term of a cable's steady-state heat balance (imperial
/// units: inches, feet, Fahrenheit, ft/s, Btu/hr-ft), following the
/// standard forced/natural convection and radiation formulas used
/// throughout the overhead-line thermal-rating literature (IEEE 738-style).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableHeatTransferSolver {
    /// Conductor diameter, inches.
    pub diameter: f64,
    pub emissivity: f64,
    pub absorptivity: f64,
    /// Elevation above sea level, feet — thinner air aloft convects less.
    pub elevation: f64,
    pub temperature_air: f64,
    pub velocity_wind: f64,
    /// Angle between the wind and the conductor axis, degrees (90 = perpendicular).
    pub angle_wind_degrees: f64,
    /// Total solar heat intensity incident on the conductor, W/ft^2.
    pub intensity_solar: f64,
}

impl CableHeatTransferSolver {
    fn air_density(&self) -> f64 {
        // Relative air density falls off roughly linearly with elevation;
        // matches the low-altitude approximation used for most rated spans.
        0.080695 * (1.0 - 0.0000336 * self.elevation)
    }

    fn wind_direction_factor(&self) -> f64 {
        let angle = self.angle_wind_degrees.to_radians();
        1.194 - angle.cos() + 0.194 * (2.0 * angle).cos() + 0.368 * (2.0 * angle).sin()
    }

    fn reynolds_number(&self) -> f64 {
        let diameter_ft = self.diameter / 12.0;
        diameter_ft * self.velocity_wind * self.air_density() / 0.00000121
    }

    pub fn heat_convection_forced(&self, temperature_conductor: f64) -> f64 {
        let delta_t = temperature_conductor - self.temperature_air;
        let reynolds = self.reynolds_number();
        let k_angle = self.wind_direction_factor();
        let k_f = 0.00739 + 0.0000225 * (self.temperature_air + temperature_conductor) / 2.0;

        let low_wind = k_angle * (1.01 + 1.35 * reynolds.powf(0.52)) * k_f * delta_t;
        let high_wind = k_angle * 0.754 * reynolds.powf(0.6) * k_f * delta_t;
        low_wind.max(high_wind)
    }

    pub fn heat_convection_natural(&self, temperature_conductor: f64) -> f64 {
        let delta_t = temperature_conductor - self.temperature_air;
        if delta_t <= 0.0 {
            return 0.0;
        }
        0.283 * self.air_density().powf(0.5) * (self.diameter / 12.0).powf(0.75) * delta_t.powf(1.25)
    }

    pub fn heat_convection(&self, temperature_conductor: f64) -> f64 {
        if self.velocity_wind <= 0.0 {
            self.heat_convection_natural(temperature_conductor)
        } else {
            self.heat_convection_forced(temperature_conductor)
                .max(self.heat_convection_natural(temperature_conductor))
        }
    }

    pub fn heat_radiation(&self, temperature_conductor: f64) -> f64 {
        let diameter_ft = self.diameter / 12.0;
        let t_conductor_rankine = temperature_conductor + 460.0;
        let t_air_rankine = self.temperature_air + 460.0;
        std::f64::consts::PI * diameter_ft * self.emissivity * STEFAN_BOLTZMANN_IMPERIAL
            * (t_conductor_rankine.powi(4) - t_air_rankine.powi(4))
    }

    pub fn heat_solar(&self) -> f64 {
        let diameter_ft = self.diameter / 12.0;
        self.absorptivity * self.intensity_solar * diameter_ft
    }

    pub fn heat_resistance(&self, current: f64, resistance_per_foot: f64) -> f64 {
        current.powi(2) * resistance_per_foot
    }

    pub fn state(&self, current: f64, temperature_conductor: f64, resistance_per_foot: f64, heat_stored: f64) -> CableHeatTransferState {
        CableHeatTransferState {
            heat_convection: self.heat_convection(temperature_conductor),
            heat_radiation: self.heat_radiation(temperature_conductor),
            heat_resistance: self.heat_resistance(current, resistance_per_foot),
            heat_solar: self.heat_solar(),
            heat_stored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> CableHeatTransferSolver {
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
    fn convection_increases_with_conductor_temperature() {
        let s = solver();
        assert!(s.heat_convection(150.0) > s.heat_convection(120.0));
    }

    #[test]
    fn radiation_increases_with_conductor_temperature() {
        let s = solver();
        assert!(s.heat_radiation(150.0) > s.heat_radiation(120.0));
    }

    #[test]
    fn natural_convection_used_when_no_wind() {
        let mut s = solver();
        s.velocity_wind = 0.0;
        assert_eq!(s.heat_convection(150.0), s.heat_convection_natural(150.0));
    }

    #[test]
    fn solar_heat_is_positive() {
        assert!(solver().heat_solar() > 0.0);
    }
}

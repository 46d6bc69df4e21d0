use proptest::prelude::*;
use sagtension::thermal::CableHeatTransferSolver;

fn solver(velocity_wind: f64) -> CableHeatTransferSolver {
    CableHeatTransferSolver {
        diameter: 1.108,
        emissivity: 0.5,
        absorptivity: 0.5,
        elevation: 0.0,
        temperature_air: 104.0,
        velocity_wind,
        angle_wind_degrees: 90.0,
        intensity_solar: 100.0,
    }
}

fn valid_conductor_temperature() -> impl Strategy<Value = f64> {
    110.0..400.0f64
}

fn valid_wind() -> impl Strategy<Value = f64> {
    0.0..20.0f64
}

proptest! {
    #[test]
    fn prop_radiation_increases_with_conductor_temperature(
        wind in valid_wind(),
        t_low in valid_conductor_temperature(),
        delta in 1.0..50.0f64,
    ) {
        let s = solver(wind);
        prop_assert!(s.heat_radiation(t_low + delta) > s.heat_radiation(t_low));
    }

    #[test]
    fn prop_convection_increases_with_conductor_temperature(
        wind in valid_wind(),
        t_low in valid_conductor_temperature(),
        delta in 1.0..50.0f64,
    ) {
        let s = solver(wind);
        prop_assert!(s.heat_convection(t_low + delta) >= s.heat_convection(t_low));
    }

    #[test]
    fn prop_heat_solar_independent_of_conductor_temperature(
        wind in valid_wind(),
        t_low in valid_conductor_temperature(),
    ) {
        let s = solver(wind);
        let solar = s.heat_solar();
        prop_assert!((solar - s.heat_solar()).abs() < 1e-12);
        prop_assert!(solar > 0.0);
        let _ = t_low;
    }

    #[test]
    fn prop_radiation_zero_at_air_temperature(wind in valid_wind()) {
        let s = solver(wind);
        prop_assert!(s.heat_radiation(s.temperature_air).abs() < 1e-9);
    }
}

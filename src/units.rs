//! Unit-aware conversion helpers for the crate's public boundary.
//!
//! Internally every solver works in a single consistent unit system chosen
//! by the caller (plain `f64`, as in the original reference model). This
//! module is the only place `uom` quantities are constructed or decomposed,
//! the same split the teacher crate keeps between its `types` module and its
//! raw-`f64` math types.

use uom::si::f64::{
    Angle as UomAngle, Force as UomForce, Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomTemperature,
};
use uom::si::{angle, force, length, pressure, thermodynamic_temperature};

/// Which unit convention a caller's raw `f64` values are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Imperial,
    Metric,
}

/// Converts a length value between unit systems.
///
/// Imperial lengths are feet; metric lengths are meters, matching the
/// reference model's two supported conventions.
pub fn convert_length(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    let quantity = match from {
        UnitSystem::Imperial => UomLength::new::<length::foot>(value),
        UnitSystem::Metric => UomLength::new::<length::meter>(value),
    };
    match to {
        UnitSystem::Imperial => quantity.get::<length::foot>(),
        UnitSystem::Metric => quantity.get::<length::meter>(),
    }
}

/// Converts a force/tension/weight value between unit systems.
///
/// Imperial forces are pounds-force; metric forces are newtons.
pub fn convert_force(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    let quantity = match from {
        UnitSystem::Imperial => UomForce::new::<force::pound_force>(value),
        UnitSystem::Metric => UomForce::new::<force::newton>(value),
    };
    match to {
        UnitSystem::Imperial => quantity.get::<force::pound_force>(),
        UnitSystem::Metric => quantity.get::<force::newton>(),
    }
}

/// Converts a pressure/stress value between unit systems (psi <-> pascal).
pub fn convert_pressure(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    let quantity = match from {
        UnitSystem::Imperial => UomPressure::new::<pressure::psi>(value),
        UnitSystem::Metric => UomPressure::new::<pressure::pascal>(value),
    };
    match to {
        UnitSystem::Imperial => quantity.get::<pressure::psi>(),
        UnitSystem::Metric => quantity.get::<pressure::pascal>(),
    }
}

/// Converts an absolute temperature between unit systems (fahrenheit <-> celsius).
pub fn convert_temperature(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    let quantity = match from {
        UnitSystem::Imperial => {
            UomTemperature::new::<thermodynamic_temperature::degree_fahrenheit>(value)
        }
        UnitSystem::Metric => {
            UomTemperature::new::<thermodynamic_temperature::degree_celsius>(value)
        }
    };
    match to {
        UnitSystem::Imperial => quantity.get::<thermodynamic_temperature::degree_fahrenheit>(),
        UnitSystem::Metric => quantity.get::<thermodynamic_temperature::degree_celsius>(),
    }
}

/// Converts an angle between degrees and radians. Unlike the other
/// conversions this one is not tied to [`UnitSystem`] since both unit
/// conventions in this crate use degrees at their public boundary.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    UomAngle::new::<angle::degree>(degrees).get::<angle::radian>()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    UomAngle::new::<angle::radian>(radians).get::<angle::degree>()
}

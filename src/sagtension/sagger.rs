use super::line_reloader::LineCableReloader;
use crate::error::Result;
use crate::line_cable::LineCable;
use crate::weather::WeatherLoadCase;

/// One row of a sag/tension table: the weather case and temperature a
/// [`LineCable`] is evaluated at, and the resulting sag and tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SagPoint {
    pub case_weather: WeatherLoadCase,
    pub temperature: f64,
    pub sag: f64,
    pub tension_horizontal: f64,
    pub load_stretch: f64,
}

/// Builds a sag/tension table for a [`LineCable`] across a set of weather
/// cases, reloading the ruling constraint into each one in turn.
pub struct LineCableSagger<'a> {
    pub line_cable: &'a LineCable,
}

impl<'a> LineCableSagger<'a> {
    pub fn sag_points(&self, cases: &[(WeatherLoadCase, f64)]) -> Result<Vec<SagPoint>> {
        cases
            .iter()
            .map(|&(case_weather, temperature)| {
                let condition_final = self.line_cable.constraint.condition;
                let reloader = LineCableReloader {
                    line_cable: self.line_cable,
                    case_weather_final: case_weather,
                    temperature_final: temperature,
                    condition_final,
                };
                let result = reloader.solve()?;
                Ok(SagPoint {
                    case_weather,
                    temperature,
                    sag: result.catenary_final.sag(),
                    tension_horizontal: result.catenary_final.horizontal_tension,
                    load_stretch: result.load_stretch_for(condition_final),
                })
            })
            .collect()
    }
}

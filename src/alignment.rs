use crate::geometry::Point2D;
use crate::validation::{Validate, ValidationMessage};

/// One surveyed station along a transmission line's horizontal alignment:
/// its distance along the route and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentPoint {
    pub station: f64,
    pub elevation: f64,
    /// Signed heading change (degrees) applied to the route's direction of
    /// travel starting at this point, used by
    /// [`crate::transmission_line::TransmissionLine::xyz_at_station`] to
    /// walk the alignment into xyz.
    pub rotation: f64,
}

/// The route profile a transmission line follows: an ordered list of
/// stations, used to derive structure spacing and span elevation
/// differences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub points: Vec<AlignmentPoint>,
}

impl Alignment {
    pub fn new(points: Vec<AlignmentPoint>) -> Self {
        Self { points }
    }

    /// Elevation at `station`, linearly interpolated between the
    /// surrounding alignment points.
    pub fn elevation_at(&self, station: f64) -> Option<f64> {
        if self.points.len() < 2 {
            return self.points.first().map(|p| p.elevation);
        }
        if station <= self.points[0].station {
            return Some(self.points[0].elevation);
        }
        let last = self.points.len() - 1;
        if station >= self.points[last].station {
            return Some(self.points[last].elevation);
        }
        let upper = self.points.iter().position(|p| p.station >= station)?;
        let lower = upper - 1;
        let (s0, e0) = (self.points[lower].station, self.points[lower].elevation);
        let (s1, e1) = (self.points[upper].station, self.points[upper].elevation);
        let fraction = (station - s0) / (s1 - s0);
        Some(e0 + fraction * (e1 - e0))
    }

    /// Horizontal and vertical spacing between two stations, as a
    /// convenience for building [`crate::line_cable::LineCable`] spans
    /// directly from the route profile.
    pub fn span_between(&self, station_start: f64, station_end: f64) -> Option<Point2D> {
        let elevation_start = self.elevation_at(station_start)?;
        let elevation_end = self.elevation_at(station_end)?;
        Some(Point2D::new(
            station_end - station_start,
            elevation_end - elevation_start,
        ))
    }
}

impl Validate for Alignment {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        if self.points.len() < 2 {
            messages.push(ValidationMessage::warning(
                "points",
                "an alignment with fewer than 2 points cannot describe a span",
            ));
        }
        if !self.points.windows(2).all(|pair| pair[0].station < pair[1].station) {
            messages.push(ValidationMessage::error(
                "points",
                "must be sorted by strictly increasing station",
            ));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn alignment() -> Alignment {
        Alignment::new(vec![
            AlignmentPoint {
                station: 0.0,
                elevation: 100.0,
                rotation: 0.0,
            },
            AlignmentPoint {
                station: 1000.0,
                elevation: 150.0,
                rotation: 0.0,
            },
            AlignmentPoint {
                station: 2000.0,
                elevation: 120.0,
                rotation: 0.0,
            },
        ])
    }

    #[test]
    fn interpolates_elevation_between_points() {
        let a = alignment();
        assert_relative_eq!(a.elevation_at(500.0).unwrap(), 125.0);
    }

    #[test]
    fn span_between_captures_both_axes() {
        let a = alignment();
        let span = a.span_between(0.0, 1000.0).unwrap();
        assert_relative_eq!(span.x, 1000.0);
        assert_relative_eq!(span.y, 50.0);
    }

    #[test]
    fn unsorted_points_fail_validation() {
        let a = Alignment::new(vec![
            AlignmentPoint {
                station: 1000.0,
                elevation: 100.0,
                rotation: 0.0,
            },
            AlignmentPoint {
                station: 0.0,
                elevation: 90.0,
                rotation: 0.0,
            },
        ]);
        assert!(!a.is_valid());
    }
}

use crate::alignment::Alignment;
use crate::geometry::Point3D;
use crate::line_cable::LineCable;
use crate::validation::{Validate, ValidationMessage};

/// A structure location along a [`TransmissionLine`]'s route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStructure {
    pub station: f64,
    pub height_attachment: f64,
}

/// A full line section: the route it follows, the structures along it, and
/// the cable strung across its spans.
pub struct TransmissionLine<'a> {
    pub alignment: &'a Alignment,
    /// World-space xyz the alignment's station-zero point maps to.
    pub origin: Point3D,
    pub structures: Vec<LineStructure>,
    pub line_cable: LineCable,
}

impl<'a> TransmissionLine<'a> {
    /// The "ruling span": the equivalent single span whose sag-tension
    /// behavior represents the whole line section, found as the RMS of the
    /// individual span lengths (the standard approximation for sections
    /// where every span shares one clipped-in cable under common tension).
    pub fn ruling_span(&self) -> Option<f64> {
        if self.structures.len() < 2 {
            return None;
        }
        let spans: Vec<f64> = self
            .structures
            .windows(2)
            .map(|pair| pair[1].station - pair[0].station)
            .collect();
        let sum_cubes: f64 = spans.iter().map(|s| s.powi(3)).sum();
        let sum_spans: f64 = spans.iter().sum();
        if sum_spans <= 0.0 {
            return None;
        }
        Some((sum_cubes / sum_spans).sqrt())
    }

    pub fn span_lengths(&self) -> Vec<f64> {
        self.structures
            .windows(2)
            .map(|pair| pair[1].station - pair[0].station)
            .collect()
    }

    /// World xyz at `station`, found by walking the alignment from `origin`:
    /// the heading starts at zero (the origin's +x direction) and turns by
    /// each passed alignment point's `rotation` degrees; elevation comes
    /// from [`Alignment::elevation_at`].
    pub fn xyz_at_station(&self, station: f64) -> Option<Point3D> {
        let points = &self.alignment.points;
        if points.is_empty() {
            return None;
        }

        let mut heading_deg = points[0].rotation;
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut previous_station = points[0].station;

        for point in points.iter().skip(1) {
            let segment_end = point.station.min(station);
            if segment_end > previous_station {
                let distance = segment_end - previous_station;
                let heading_rad = heading_deg.to_radians();
                x += distance * heading_rad.cos();
                y += distance * heading_rad.sin();
                previous_station = segment_end;
            }
            if station <= point.station {
                break;
            }
            heading_deg += point.rotation;
        }

        let elevation = self.alignment.elevation_at(station)?;
        Some(Point3D::new(x, y, self.origin.z + elevation))
    }

    /// World xyz of a structure's attachment point: the alignment xyz at
    /// its station, raised by `height_attachment`.
    pub fn structure_position(&self, index: usize) -> Option<Point3D> {
        let structure = self.structures.get(index)?;
        let base = self.xyz_at_station(structure.station)?;
        Some(Point3D::new(base.x, base.y, base.z + structure.height_attachment))
    }
}

impl<'a> Validate for TransmissionLine<'a> {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = self.line_cable.validate();
        if self.structures.len() < 2 {
            messages.push(ValidationMessage::error(
                "structures",
                "a transmission line needs at least two structures",
            ));
        }
        if !self.structures.windows(2).all(|pair| pair[0].station < pair[1].station) {
            messages.push(ValidationMessage::error(
                "structures",
                "must be sorted by strictly increasing station",
            ));
        }
        messages
    }
}

use super::equilibrium::CableAttachmentEquilibriumSolver;
use crate::catenary::Catenary3D;
use crate::geometry::{AxisDirection, Plane2D, Point3D, SphericalPoint3D, Vector3D};

const MAX_ITERATIONS: u32 = 100;
const TOLERANCE_IMBALANCE: f64 = 5.0;

/// One structure a line cable attaches to: its anchor point, the hardware
/// hanging from it (zero length/radius at a dead end), and whether it is
/// free to swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachmentStructure {
    pub point_structure: Point3D,
    pub length_hardware: f64,
    pub is_dead_end: bool,
}

/// A span's xyz points sampled along its catenary, for drawing or clearance
/// checks.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanPoints {
    pub points: Vec<Point3D>,
}

/// Locates the resting position of every suspension hardware point along a
/// line section, and samples the resulting catenary in each span.
///
/// Each hardware point is tracked as a [`SphericalPoint3D`] anchored at its
/// structure: radius is the hardware length, the horizontal angle bisects
/// the xy angle to its back/ahead neighbors (fixed once at setup), and the
/// vertical angle starts plumb (180 degrees) and is updated by repeated
/// equilibrium solves until the worst imbalance across all attachments
/// drops below a tolerance or the iteration cap is reached.
pub struct CablePositionLocator<'a> {
    pub structures: &'a [AttachmentStructure],
    pub unit_weight: f64,
    pub horizontal_tension: f64,
    pub samples_per_span: usize,
}

impl<'a> CablePositionLocator<'a> {
    fn horizontal_bisect_angle(back: &Vector3D, ahead: &Vector3D) -> f64 {
        let angle_back = back.angle_in_plane(Plane2D::Xy, false).unwrap_or(0.0);
        let angle_ahead = ahead.angle_in_plane(Plane2D::Xy, false).unwrap_or(0.0);
        (angle_back + angle_ahead) / 2.0
    }

    fn initial_spherical_points(&self) -> Vec<SphericalPoint3D> {
        let n = self.structures.len();
        (0..n)
            .map(|i| {
                let structure = &self.structures[i];
                if structure.is_dead_end || n < 3 || i == 0 || i == n - 1 {
                    return SphericalPoint3D::new(0.0, 0.0, 180.0);
                }
                let back = structure
                    .point_structure
                    .as_vector_to(&self.structures[i - 1].point_structure);
                let ahead = structure
                    .point_structure
                    .as_vector_to(&self.structures[i + 1].point_structure);
                let angle_horizontal = Self::horizontal_bisect_angle(&back, &ahead);
                SphericalPoint3D::new(structure.length_hardware, angle_horizontal, 180.0)
            })
            .collect()
    }

    fn attachment_points(&self, spherical: &[SphericalPoint3D]) -> Vec<Point3D> {
        self.structures
            .iter()
            .zip(spherical.iter())
            .map(|(structure, point)| structure.point_structure.translated(point.to_vector()))
            .collect()
    }

    fn span_catenary(&self, attachments: &[Point3D], index: usize) -> Catenary3D {
        let spacing = attachments[index].as_vector_to(&attachments[index + 1]);
        Catenary3D::new(
            self.horizontal_tension,
            Vector3D::new(0.0, 0.0, self.unit_weight),
            spacing,
        )
    }

    /// Resolves every hardware point's resting spherical angle and the
    /// resulting attachment xyz points.
    pub fn solve(&self) -> (Vec<Point3D>, Vec<SphericalPoint3D>) {
        let n = self.structures.len();
        if n < 3 {
            return (
                self.structures.iter().map(|s| s.point_structure).collect(),
                vec![SphericalPoint3D::new(0.0, 0.0, 180.0); n],
            );
        }

        let mut spherical = self.initial_spherical_points();
        let mut attachments = self.attachment_points(&spherical);

        for _ in 0..MAX_ITERATIONS {
            let mut max_imbalance = 0.0_f64;

            for i in 1..n - 1 {
                if self.structures[i].is_dead_end {
                    continue;
                }
                let catenary_back = Catenary3D::new(
                    self.horizontal_tension,
                    Vector3D::new(0.0, 0.0, self.unit_weight),
                    attachments[i].as_vector_to(&attachments[i - 1]),
                );
                let catenary_ahead = Catenary3D::new(
                    self.horizontal_tension,
                    Vector3D::new(0.0, 0.0, self.unit_weight),
                    attachments[i].as_vector_to(&attachments[i + 1]),
                );
                let angle_back = catenary_back.spacing.angle_in_plane(Plane2D::Xy, false).unwrap_or(0.0);
                let angle_ahead = catenary_ahead.spacing.angle_in_plane(Plane2D::Xy, false).unwrap_or(0.0);
                let angle_xy_between = (angle_back - angle_ahead).rem_euclid(360.0);

                let solver = CableAttachmentEquilibriumSolver {
                    catenary_back,
                    catenary_ahead,
                    angle_xy_between,
                    angle_tilt_hardware: 0.0,
                    direction_y: AxisDirection::Positive,
                };
                let result = solver.solve();
                max_imbalance = max_imbalance.max(result.imbalance);
                spherical[i].angle_vertical = result.angle_equilibrium + 180.0;
            }

            attachments = self.attachment_points(&spherical);

            if max_imbalance < TOLERANCE_IMBALANCE {
                break;
            }
        }

        (attachments, spherical)
    }

    /// Samples each span's catenary at evenly spaced position fractions,
    /// in line-section xyz (the catenary's own local chord/transverse/
    /// vertical frame is already expressed in absolute x/y/z by
    /// [`Catenary3D::position_fraction`]).
    pub fn span_points(&self, attachments: &[Point3D]) -> Vec<SpanPoints> {
        (0..attachments.len().saturating_sub(1))
            .map(|i| {
                let catenary = self.span_catenary(attachments, i);
                let points = (0..=self.samples_per_span)
                    .map(|sample| {
                        let fraction = sample as f64 / self.samples_per_span as f64;
                        let local = catenary.position_fraction(fraction);
                        attachments[i].translated(Vector3D::new(local.x, local.y, local.z))
                    })
                    .collect();
                SpanPoints { points }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Vec<AttachmentStructure> {
        vec![
            AttachmentStructure {
                point_structure: Point3D::new(0.0, 0.0, 0.0),
                length_hardware: 0.0,
                is_dead_end: true,
            },
            AttachmentStructure {
                point_structure: Point3D::new(1000.0, 0.0, 0.0),
                length_hardware: 6.0,
                is_dead_end: false,
            },
            AttachmentStructure {
                point_structure: Point3D::new(2000.0, 0.0, 0.0),
                length_hardware: 0.0,
                is_dead_end: true,
            },
        ]
    }

    #[test]
    fn symmetric_section_converges_with_attachment_near_centered() {
        let structures = section();
        let locator = CablePositionLocator {
            structures: &structures,
            unit_weight: 1.096,
            horizontal_tension: 6000.0,
            samples_per_span: 10,
        };
        let (attachments, _spherical) = locator.solve();
        assert!((attachments[1].x - 1000.0).abs() < 0.5);
        assert!(attachments[1].z < 0.0);
    }

    #[test]
    fn span_points_sample_the_requested_count() {
        let structures = section();
        let locator = CablePositionLocator {
            structures: &structures,
            unit_weight: 1.096,
            horizontal_tension: 6000.0,
            samples_per_span: 4,
        };
        let (attachments, _spherical) = locator.solve();
        let spans = locator.span_points(&attachments);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].points.len(), 5);
    }

    #[test]
    fn fewer_than_three_structures_is_a_no_op() {
        let structures = vec![AttachmentStructure {
            point_structure: Point3D::new(0.0, 0.0, 0.0),
            length_hardware: 0.0,
            is_dead_end: true,
        }];
        let locator = CablePositionLocator {
            structures: &structures,
            unit_weight: 1.096,
            horizontal_tension: 6000.0,
            samples_per_span: 4,
        };
        assert_eq!(locator.solve().0.len(), 1);
    }
}

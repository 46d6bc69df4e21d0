use crate::error::{Result, SagTensionError};
use crate::geometry::{AxisDirection, Point2D};
use crate::validation::{Validate, ValidationMessage};

/// A 2D catenary curve suspended between two end points, defined by the
/// end-to-end spacing and the governing horizontal tension / unit weight.
///
/// The curve's own coordinate system is centered on its lowest point (the
/// "origin"): `x` increases toward the higher-tension end, `y` is the
/// height above the origin. `horizontal_tension` and `unit_weight` must be
/// expressed in the same consistent unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catenary2D {
    pub horizontal_tension: f64,
    pub unit_weight: f64,
    /// Horizontal distance between the two end points.
    pub spacing_horizontal: f64,
    /// Vertical distance between the two end points (end minus start).
    pub spacing_vertical: f64,
}

impl Catenary2D {
    pub fn new(
        horizontal_tension: f64,
        unit_weight: f64,
        spacing_horizontal: f64,
        spacing_vertical: f64,
    ) -> Self {
        Self {
            horizontal_tension,
            unit_weight,
            spacing_horizontal,
            spacing_vertical,
        }
    }

    /// The catenary constant `c = H / w`.
    pub fn constant(&self) -> f64 {
        self.horizontal_tension / self.unit_weight
    }

    /// Horizontal position of the start point, relative to the curve's
    /// lowest point, derived from the hyperbolic-cosine difference identity
    /// `y2 - y1 = 2c*sinh(x1/c + span/2c)*sinh(span/2c)`.
    fn x_start(&self) -> f64 {
        let c = self.constant();
        let span = self.spacing_horizontal;
        let half_span_term = (span / (2.0 * c)).sinh();
        let asinh_arg = self.spacing_vertical / (2.0 * c * half_span_term);
        c * asinh_arg.asinh() - span / 2.0
    }

    fn x_end(&self) -> f64 {
        self.x_start() + self.spacing_horizontal
    }

    /// Height above the curve's lowest point at horizontal position `x`
    /// (measured in the curve's own origin-centered coordinate system).
    fn y_at(&self, x: f64) -> f64 {
        let c = self.constant();
        c * ((x / c).cosh() - 1.0)
    }

    /// Arc length from the lowest point to horizontal position `x`, signed
    /// by which side of the origin `x` falls on.
    fn length_from_origin(&self, x: f64) -> f64 {
        self.constant() * (x / self.constant()).sinh()
    }

    /// Total arc length of the curve between its two end points.
    pub fn length(&self) -> f64 {
        self.length_from_origin(self.x_end()) - self.length_from_origin(self.x_start())
    }

    /// The end point, relative to the start point, in curve-local (horizontal,
    /// vertical) coordinates. This reproduces `(spacing_horizontal,
    /// spacing_vertical)` by construction and exists mainly so callers don't
    /// need to know about the origin-centered internal frame.
    pub fn endpoint_relative(&self) -> Point2D {
        Point2D::new(self.spacing_horizontal, self.spacing_vertical)
    }

    /// Tension at horizontal position `x` (origin-centered frame): `T = H*cosh(x/c)`.
    fn tension_at(&self, x: f64) -> f64 {
        self.horizontal_tension * (x / self.constant()).cosh()
    }

    /// Tension at the lower of the two end points.
    pub fn tension_min(&self) -> f64 {
        self.tension_at(self.x_start()).min(self.tension_at(self.x_end()))
    }

    /// Tension at the higher-tension end point (the end farther from the
    /// curve's lowest point).
    pub fn tension_max(&self) -> f64 {
        self.tension_at(self.x_start()).max(self.tension_at(self.x_end()))
    }

    /// Tension at whichever end `direction` designates: [`AxisDirection::Negative`]
    /// is the start point, [`AxisDirection::Positive`] is the end point.
    pub fn tension_end(&self, direction: AxisDirection) -> f64 {
        match direction {
            AxisDirection::Negative => self.tension_at(self.x_start()),
            AxisDirection::Positive => self.tension_at(self.x_end()),
        }
    }

    /// Arc-length-weighted average tension, found by analytically
    /// integrating `T(x) = H*cosh(x/c)` over the curve's arc length.
    pub fn tension_average(&self) -> f64 {
        let c = self.constant();
        let integral = |x: f64| -> f64 {
            // integral of cosh^2(x/c) dx = c*( (x/c)/2 + sinh(2x/c)/4 )
            c * ((x / c) / 2.0 + (2.0 * x / c).sinh() / 4.0)
        };
        let numerator = self.horizontal_tension * (integral(self.x_end()) - integral(self.x_start()));
        numerator / self.length()
    }

    /// Average tension found by sampling `n` equally arc-length-spaced
    /// points along the curve, provided as an alternative to the analytic
    /// [`Catenary2D::tension_average`] for callers that want to match the
    /// reference model's discretized method.
    pub fn tension_average_numeric(&self, n: u32) -> f64 {
        let n = n.max(1);
        let total_length = self.length();
        let length_start = self.length_from_origin(self.x_start());
        let c = self.constant();
        let mut sum = 0.0;
        for i in 0..=n {
            let fraction = i as f64 / n as f64;
            let arc_length = length_start + fraction * total_length;
            let x = c * (arc_length / c).asinh();
            sum += self.tension_at(x);
        }
        sum / (n as f64 + 1.0)
    }

    /// Point along the curve at `fraction` (0.0 at the start point, 1.0 at
    /// the end point) of the horizontal spacing, in coordinates relative to
    /// the start point.
    pub fn position_fraction(&self, fraction: f64) -> Point2D {
        let x = self.x_start() + fraction * self.spacing_horizontal;
        let y = self.y_at(x) - self.y_at(self.x_start());
        Point2D::new(fraction * self.spacing_horizontal, y)
    }

    /// Maximum sag: the vertical distance between the chord connecting the
    /// two end points and the curve, measured at the curve's lowest point
    /// if it falls between the supports, otherwise at whichever support is
    /// lower.
    pub fn sag(&self) -> f64 {
        let chord_at = |fraction: f64| -> f64 { fraction * self.spacing_vertical };
        let x_vertex_fraction = -self.x_start() / self.spacing_horizontal;
        if (0.0..=1.0).contains(&x_vertex_fraction) {
            let curve_y = self.position_fraction(x_vertex_fraction).y;
            chord_at(x_vertex_fraction) - curve_y
        } else {
            0.0
        }
    }

    pub fn build(
        horizontal_tension: f64,
        unit_weight: f64,
        spacing_horizontal: f64,
        spacing_vertical: f64,
    ) -> Result<Self> {
        let catenary = Self::new(horizontal_tension, unit_weight, spacing_horizontal, spacing_vertical);
        if !catenary.is_valid() {
            return Err(SagTensionError::InvalidCatenary {
                reason: catenary
                    .validate()
                    .into_iter()
                    .map(|m| m.description)
                    .collect::<Vec<_>>()
                    .join("; "),
            });
        }
        Ok(catenary)
    }
}

impl Validate for Catenary2D {
    fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();
        if self.horizontal_tension <= 0.0 {
            messages.push(ValidationMessage::error(
                "horizontal_tension",
                "must be positive",
            ));
        }
        if self.unit_weight <= 0.0 {
            messages.push(ValidationMessage::error("unit_weight", "must be positive"));
        }
        if self.spacing_horizontal <= 0.0 {
            messages.push(ValidationMessage::error(
                "spacing_horizontal",
                "must be positive",
            ));
        }
        messages
    }
}

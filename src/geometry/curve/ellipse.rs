use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::arc_2d::ccw_sweep;
use crate::math::quadrature::simpson;
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CircularArc, Curve};

/// Simpson intervals per full turn used for elliptical arc length.
const ARC_LENGTH_INTERVALS: f64 = 1024.0;

/// An ellipse (or elliptical arc) in the drawing plane.
///
/// `P(t) = center + R(rotation) * (a * cos(t), b * sin(t))`
/// where `R` is the rotation by the major axis angle. The arc runs
/// counter-clockwise from `start_angle` to `end_angle`, both measured as
/// parametric angles in the unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    center: Point2,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
    start_angle: f64,
    end_angle: f64,
}

impl EllipticalArc {
    /// Creates a new elliptical arc from explicit radii and rotation.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `semi_major` - Radius along the rotated x axis
    /// * `semi_minor` - Radius along the rotated y axis
    /// * `rotation` - Angle of the major axis in radians
    /// * `start_angle` - Start parameter angle in radians
    /// * `end_angle` - End parameter angle in radians
    #[must_use]
    pub fn new(
        center: Point2,
        semi_major: f64,
        semi_minor: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
            rotation,
            start_angle,
            end_angle,
        }
    }

    /// Creates an elliptical arc from the major axis end point (relative to
    /// the center) and the minor/major axis ratio, as drawing files store it.
    #[must_use]
    pub fn from_major_axis(
        center: Point2,
        major_axis: Vector2,
        axis_ratio: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        let semi_major = major_axis.norm();
        let rotation = major_axis.y.atan2(major_axis.x);
        Self::new(
            center,
            semi_major,
            semi_major * axis_ratio,
            rotation,
            start_angle,
            end_angle,
        )
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Returns the rotation of the major axis.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the start angle.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Counter-clockwise sweep in `(0, 2*pi]`, or `0` for coincident angles.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        ccw_sweep(self.start_angle, self.end_angle)
    }

    /// Length of the arc.
    ///
    /// Exact for circles; otherwise integrates the speed
    /// `sqrt(a^2 sin^2 t + b^2 cos^2 t)` with composite Simpson.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        let sweep = self.sweep();
        let (a, b) = (self.semi_major, self.semi_minor);
        if (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()) {
            return a * sweep;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = (ARC_LENGTH_INTERVALS * sweep / TAU).ceil() as usize;
        simpson(
            |t| {
                let (sin, cos) = t.sin_cos();
                (a * a * sin * sin + b * b * cos * cos).sqrt()
            },
            self.start_angle,
            self.start_angle + sweep,
            intervals,
        )
    }

    /// Point at parametric angle `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let local_x = self.semi_major * t.cos();
        let local_y = self.semi_minor * t.sin();
        let (sin_r, cos_r) = self.rotation.sin_cos();
        Point2::new(
            self.center.x + local_x * cos_r - local_y * sin_r,
            self.center.y + local_x * sin_r + local_y * cos_r,
        )
    }
}

impl From<CircularArc> for EllipticalArc {
    fn from(arc: CircularArc) -> Self {
        Self::new(
            *arc.center(),
            arc.radius(),
            arc.radius(),
            0.0,
            arc.start_angle(),
            arc.end_angle(),
        )
    }
}

impl Curve for EllipticalArc {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.point_at(t))
    }

    fn is_closed(&self) -> bool {
        (self.sweep() - TAU).abs() < TOLERANCE
    }
}

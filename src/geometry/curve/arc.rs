use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::arc_2d::{ccw_sweep, polar};
use crate::math::{Point2, TOLERANCE};

use super::Curve;

/// A circular arc in the drawing plane.
///
/// The arc always runs counter-clockwise from `start_angle` to `end_angle`
/// (radians); a source-side clockwise flag must be resolved into the angles
/// by the caller. A zero or negative radius is accepted and simply produces
/// degenerate points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl CircularArc {
    /// Creates a new arc.
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Creates a full circle starting at angle `0`.
    #[must_use]
    pub fn circle(center: Point2, radius: f64) -> Self {
        Self::new(center, radius, 0.0, TAU)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle as given at construction.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Counter-clockwise sweep in `(0, 2*pi]`, or `0` for coincident angles.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        ccw_sweep(self.start_angle, self.end_angle)
    }

    /// Exact arc length, `radius * sweep`.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep()
    }
}

impl Curve for CircularArc {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(polar(&self.center, self.radius, t))
    }

    fn is_closed(&self) -> bool {
        (self.sweep() - TAU).abs() < TOLERANCE
    }
}

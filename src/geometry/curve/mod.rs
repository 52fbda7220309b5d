mod arc;
mod ellipse;
mod line;
mod nurbs;

pub use arc::CircularArc;
pub use ellipse::EllipticalArc;
pub use line::LineSegment;
pub use nurbs::NurbsCurve;

use crate::error::Result;
use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// Trait for parametric curves in the drawing plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

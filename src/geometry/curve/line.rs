use crate::error::Result;
use crate::math::Point2;

use super::Curve;

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.start + (self.end - self.start) * t)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

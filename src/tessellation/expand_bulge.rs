use std::f64::consts::PI;

use tracing::trace;

use crate::math::arc_2d::{arc_from_bulge, arc_point_at};
use crate::math::{Point2, Point3};

use super::scale_point;

/// Angular step of the default segment count, ten degrees.
const DEFAULT_STEP: f64 = PI / 18.0;

/// Lower bound on the default segment count, so short arcs stay visibly curved.
const MIN_SEGMENTS: usize = 6;

/// Expands a bulge segment into the points of its arc.
///
/// The output starts with the scaled start point itself and stops one step
/// before the end point, which belongs to the next segment (or closes the
/// loop) and is appended by the caller. A bulge of exactly zero is a
/// straight segment and must not be routed here: it yields non-finite
/// points. A zero-length chord collapses every point onto the start.
#[derive(Debug, Clone, Copy)]
pub struct ExpandBulge {
    start: Point2,
    end: Point2,
    bulge: f64,
    scale_factor: f64,
    segments: Option<usize>,
}

impl ExpandBulge {
    /// Creates a new expansion at unit scale with the default segment count.
    #[must_use]
    pub fn new(start: Point2, end: Point2, bulge: f64) -> Self {
        Self {
            start,
            end,
            bulge,
            scale_factor: 1.0,
            segments: None,
        }
    }

    /// Scales both end points about the origin before expanding.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Uses an explicit segment count instead of the angle-based default.
    /// A count of zero keeps the default.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Executes the expansion, returning `segments` points at `z = 0`.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let start = scale_point(&self.start, self.scale_factor);
        let end = scale_point(&self.end, self.scale_factor);
        let arc = arc_from_bulge(&start, &end, self.bulge);

        let segments = self
            .segments
            .filter(|&n| n > 0)
            .unwrap_or_else(|| default_segment_count(arc.sweep));
        #[allow(clippy::cast_precision_loss)]
        let divisions = segments as f64;

        let mut points = Vec::with_capacity(segments);
        points.push(Point3::new(start.x, start.y, 0.0));
        for i in 1..segments {
            #[allow(clippy::cast_precision_loss)]
            let p = arc_point_at(&arc, i as f64 / divisions);
            points.push(Point3::new(p.x, p.y, 0.0));
        }

        trace!(bulge = self.bulge, segments, "expanded bulge arc");
        points
    }
}

/// One segment per ten degrees of sweep, at least [`MIN_SEGMENTS`].
fn default_segment_count(sweep: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let by_angle = (sweep.abs() / DEFAULT_STEP).ceil() as usize;
    by_angle.max(MIN_SEGMENTS)
}

use tracing::debug;

use crate::geometry::Pline;
use crate::math::Point3;

use super::{scale_point, ExpandBulge, Polyline};

/// Flattens a bulge polyline into a point polyline.
///
/// Straight segments contribute their start vertex; arc segments contribute
/// the output of [`ExpandBulge`], which also starts at the segment's first
/// vertex and leaves the end vertex to the following segment. Open
/// polylines finish with their last vertex; closed ones stop before
/// repeating the first vertex and are flagged as closed instead.
#[derive(Debug)]
pub struct TessellatePline<'a> {
    pline: &'a Pline,
    scale_factor: f64,
}

impl<'a> TessellatePline<'a> {
    /// Creates a new flattening at unit scale.
    #[must_use]
    pub fn new(pline: &'a Pline) -> Self {
        Self {
            pline,
            scale_factor: 1.0,
        }
    }

    /// Scales every vertex about the origin.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Executes the flattening.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let mut points = Vec::with_capacity(self.pline.vertices.len());
        let mut arcs = 0_usize;

        for (v0, v1) in self.pline.segments() {
            if v0.is_straight() {
                let p = scale_point(&v0.position(), self.scale_factor);
                points.push(Point3::new(p.x, p.y, 0.0));
            } else {
                arcs += 1;
                points.extend(
                    ExpandBulge::new(v0.position(), v1.position(), v0.bulge)
                        .with_scale_factor(self.scale_factor)
                        .execute(),
                );
            }
        }

        let closed = self.pline.closed && self.pline.segment_count() > 0;
        if !closed {
            if let Some(last) = self.pline.vertices.last() {
                let p = scale_point(&last.position(), self.scale_factor);
                points.push(Point3::new(p.x, p.y, 0.0));
            }
        }

        debug!(
            vertices = self.pline.vertices.len(),
            arcs,
            points = points.len(),
            closed,
            "flattened polyline"
        );
        Polyline { points, closed }
    }
}

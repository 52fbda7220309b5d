use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::geometry::{Curve, NurbsCurve};
use crate::math::Point2;

/// Tessellates a NURBS curve into a dense polyline.
///
/// The active knot domain is cut at every distinct knot value; each piece
/// is sampled at `samples_per_segment + 1` parameters equally spaced in the
/// native knot parameter. Neighbouring pieces both sample their shared
/// break, so the output holds that point twice in a row. Consumers rely on
/// the resulting point count, so the duplicate is kept.
#[derive(Debug)]
pub struct TessellateSpline<'a> {
    curve: &'a NurbsCurve,
    samples_per_segment: usize,
    scale_factor: f64,
}

impl<'a> TessellateSpline<'a> {
    /// Creates a new tessellation at unit scale.
    #[must_use]
    pub fn new(curve: &'a NurbsCurve, samples_per_segment: usize) -> Self {
        Self {
            curve,
            samples_per_segment,
            scale_factor: 1.0,
        }
    }

    /// Scales the control points about the origin before evaluation.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples_per_segment` is zero or a sample fails
    /// to evaluate.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.samples_per_segment == 0 {
            return Err(TessellationError::InvalidParameters(
                "spline samples per segment must be at least 1".to_owned(),
            )
            .into());
        }

        let curve = self.curve.scaled(self.scale_factor);
        let domain = curve.knot_domain();
        let breaks = curve.segment_breaks();
        #[allow(clippy::cast_precision_loss)]
        let samples = self.samples_per_segment as f64;

        let segment_count = breaks.len().saturating_sub(1);
        let mut points = Vec::with_capacity(segment_count * (self.samples_per_segment + 1));
        for piece in breaks.windows(2) {
            let (u_min, u_max) = (piece[0], piece[1]);
            for k in 0..=self.samples_per_segment {
                #[allow(clippy::cast_precision_loss)]
                let u = k as f64 / samples * (u_max - u_min) + u_min;
                let t = ((u - domain.t_min) / domain.span()).max(0.0).min(1.0);
                points.push(curve.evaluate(t)?);
            }
        }

        debug!(
            segments = segment_count,
            points = points.len(),
            degree = curve.degree(),
            "tessellated spline"
        );
        Ok(points)
    }
}

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::EllipticalArc;
use crate::math::Point2;

use super::{scale_point, SamplingBudget};

/// Upper bound on the points of one sampled arc.
const MAX_SAMPLES: f64 = 16_777_216.0;

/// Samples a circular or elliptical arc counter-clockwise.
///
/// The point count is the stricter of two limits: segment length no longer
/// than `max_chord_length * scale_factor`, and an angular subtense (arc
/// length over the minor radius) no larger than `max_angular_step`.
/// Points are spaced uniformly in the parametric angle and scaled about the
/// origin.
///
/// A count that is not finite (zero minor radius, non-finite angles) or
/// exceeds [`MAX_SAMPLES`] marks a degenerate arc: only its two end points
/// are sampled, so non-finite coordinates reach the caller unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SampleArc {
    arc: EllipticalArc,
    budget: SamplingBudget,
}

impl SampleArc {
    /// Creates a new sampling operation. Circular arcs convert into
    /// elliptical arcs with equal radii.
    #[must_use]
    pub fn new(arc: impl Into<EllipticalArc>, budget: &SamplingBudget) -> Self {
        Self {
            arc: arc.into(),
            budget: *budget,
        }
    }

    /// Number of points the arc is sampled with.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> usize {
        let length = self.arc.arc_length();
        let by_chord = (length / (self.budget.max_chord_length * self.budget.scale_factor)).ceil() + 1.0;
        let by_angle = ((length / self.arc.semi_minor()) / self.budget.max_angular_step).ceil() + 1.0;
        let count = if by_chord.is_nan() || by_angle.is_nan() {
            f64::NAN
        } else {
            by_chord.max(by_angle)
        };
        if count.is_finite() && count <= MAX_SAMPLES {
            count as usize
        } else {
            warn!(length, semi_minor = self.arc.semi_minor(), "degenerate arc sampled at its ends");
            2
        }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is invalid.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        self.budget.validate()?;

        let count = self.sample_count();
        let start = self.arc.start_angle();
        let sweep = self.arc.sweep();
        #[allow(clippy::cast_precision_loss)]
        let divisions = count.saturating_sub(1).max(1) as f64;

        let points: Vec<Point2> = (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / divisions;
                scale_point(&self.arc.point_at(start + t * sweep), self.budget.scale_factor)
            })
            .collect();

        debug!(points = points.len(), sweep, "sampled arc");
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::CircularArc;
    use crate::math::Vector2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn full_circle_is_bound_by_angular_step() {
        let op = SampleArc::new(CircularArc::circle(Point2::origin(), 10.0), &SamplingBudget::default());
        let points = op.execute().unwrap();
        assert_eq!(points.len(), 25);
        assert_abs_diff_eq!(points[0], Point2::new(10.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(points[6], Point2::new(0.0, 10.0), epsilon = 1e-9);
        assert_abs_diff_eq!(points[24], Point2::new(10.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn large_circle_is_bound_by_chord_length() {
        let op = SampleArc::new(CircularArc::circle(Point2::origin(), 1000.0), &SamplingBudget::default());
        assert_eq!(op.sample_count(), 64);
    }

    #[test]
    fn chord_limit_scales_with_scale_factor() {
        let budget = SamplingBudget::default()
            .with_max_chord_length(5.0)
            .with_max_angular_step(PI);
        let circle = CircularArc::circle(Point2::origin(), 10.0);
        assert_eq!(SampleArc::new(circle, &budget).sample_count(), 14);

        let scaled = budget.with_scale_factor(2.0);
        let points = SampleArc::new(circle, &scaled).execute().unwrap();
        assert_eq!(points.len(), 8);
        assert_abs_diff_eq!(points[0], Point2::new(20.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn ellipse_uses_minor_radius_for_angular_bound() {
        let ellipse = EllipticalArc::new(Point2::origin(), 10.0, 5.0, 0.0, 0.0, TAU);
        let budget = SamplingBudget::default().with_max_chord_length(2.0);
        assert_eq!(SampleArc::new(ellipse, &budget).sample_count(), 39);
    }

    #[test]
    fn arcs_run_counter_clockwise() {
        // Stored from 90deg to 0deg: sampled the long way round through 180deg.
        let arc = CircularArc::new(Point2::origin(), 1.0, FRAC_PI_2, 0.0);
        let points = SampleArc::new(arc, &SamplingBudget::default()).execute().unwrap();
        assert_eq!(points.len(), 19);
        assert_abs_diff_eq!(points[0], Point2::new(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(points[6], Point2::new(-1.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(points[18], Point2::new(1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn rotated_ellipse_points_lie_on_ellipse() {
        let ellipse = EllipticalArc::from_major_axis(Point2::new(2.0, -1.0), Vector2::new(3.0, 4.0), 0.4, 0.0, PI);
        let points = SampleArc::new(ellipse, &SamplingBudget::default()).execute().unwrap();
        let rotation = 4.0_f64.atan2(3.0);
        for p in &points {
            let d = p - Point2::new(2.0, -1.0);
            let (sin, cos) = rotation.sin_cos();
            let u = d.x * cos + d.y * sin;
            let v = -d.x * sin + d.y * cos;
            assert_abs_diff_eq!((u / 5.0).powi(2) + (v / 2.0).powi(2), 1.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(points[0], Point2::new(5.0, 3.0), epsilon = 1e-9);
    }

    #[test]
    fn invalid_budget_is_rejected() {
        let budget = SamplingBudget::default().with_max_angular_step(0.0);
        let op = SampleArc::new(CircularArc::circle(Point2::origin(), 1.0), &budget);
        assert!(op.execute().is_err());
    }

    #[test]
    fn zero_minor_radius_samples_end_points() {
        let flat = EllipticalArc::from_major_axis(Point2::origin(), Vector2::new(10.0, 0.0), 0.0, 0.0, PI);
        let op = SampleArc::new(flat, &SamplingBudget::default());
        assert_eq!(op.sample_count(), 2);
        let points = op.execute().unwrap();
        assert_eq!(points.len(), 2);
        assert_abs_diff_eq!(points[0], Point2::new(10.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(points[1], Point2::new(-10.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn non_finite_angle_propagates_into_points() {
        let arc = CircularArc::new(Point2::origin(), 1.0, 0.0, f64::NEG_INFINITY);
        let points = SampleArc::new(arc, &SamplingBudget::default()).execute().unwrap();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.x.is_nan()));
    }

    #[test]
    fn coincident_angles_give_single_point() {
        let arc = CircularArc::new(Point2::origin(), 3.0, 1.0, 1.0);
        let points = SampleArc::new(arc, &SamplingBudget::default()).execute().unwrap();
        assert_eq!(points.len(), 1);
    }
}

mod batch;
mod expand_bulge;
mod sample_arc;
mod tessellate_pline;
mod tessellate_spline;

pub use batch::{CurveEntity, TessellateBatch};
pub use expand_bulge::ExpandBulge;
pub use sample_arc::SampleArc;
pub use tessellate_pline::TessellatePline;
pub use tessellate_spline::TessellateSpline;

use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3};

/// Sampling density limits shared by all curve samplers.
///
/// Arcs and ellipses take the larger of the chord-length and angular-step
/// point counts. Splines sample every knot span uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingBudget {
    /// Maximum length of one output segment, in document units before scaling.
    pub max_chord_length: f64,
    /// Maximum angle subtended by one output segment, in radians.
    pub max_angular_step: f64,
    /// Number of intervals each distinct knot span of a spline is split into.
    pub spline_samples_per_segment: usize,
    /// Uniform scale applied to every output coordinate.
    pub scale_factor: f64,
}

impl Default for SamplingBudget {
    fn default() -> Self {
        Self {
            max_chord_length: 100.0,
            max_angular_step: 15.0_f64.to_radians(),
            spline_samples_per_segment: 100,
            scale_factor: 1.0,
        }
    }
}

impl SamplingBudget {
    /// Creates a validated budget with unit scale.
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is not positive and finite.
    pub fn new(
        max_chord_length: f64,
        max_angular_step: f64,
        spline_samples_per_segment: usize,
    ) -> Result<Self> {
        let budget = Self {
            max_chord_length,
            max_angular_step,
            spline_samples_per_segment,
            scale_factor: 1.0,
        };
        budget.validate()?;
        Ok(budget)
    }

    /// Returns the budget with a different scale factor.
    #[must_use]
    pub fn with_scale_factor(self, scale_factor: f64) -> Self {
        Self {
            scale_factor,
            ..self
        }
    }

    /// Returns the budget with a different maximum chord length.
    #[must_use]
    pub fn with_max_chord_length(self, max_chord_length: f64) -> Self {
        Self {
            max_chord_length,
            ..self
        }
    }

    /// Returns the budget with a different maximum angular step.
    #[must_use]
    pub fn with_max_angular_step(self, max_angular_step: f64) -> Self {
        Self {
            max_angular_step,
            ..self
        }
    }

    /// Returns the budget with a different spline sample count.
    #[must_use]
    pub fn with_spline_samples(self, spline_samples_per_segment: usize) -> Self {
        Self {
            spline_samples_per_segment,
            ..self
        }
    }

    /// Checks that every limit is usable.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.max_chord_length) {
            return Err(invalid(format!(
                "max chord length must be positive, got {}",
                self.max_chord_length
            )));
        }
        if !positive(self.max_angular_step) {
            return Err(invalid(format!(
                "max angular step must be positive, got {}",
                self.max_angular_step
            )));
        }
        if !positive(self.scale_factor) {
            return Err(invalid(format!(
                "scale factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if self.spline_samples_per_segment == 0 {
            return Err(invalid("spline samples per segment must be at least 1".to_owned()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> crate::error::CurvetessError {
    TessellationError::InvalidParameters(message).into()
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Lifts planar points into a polyline at `z = 0`.
    #[must_use]
    pub fn from_planar(points: &[Point2], closed: bool) -> Self {
        Self {
            points: points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
            closed,
        }
    }
}

/// Scales a point about the origin.
fn scale_point(point: &Point2, factor: f64) -> Point2 {
    Point2::from(point.coords * factor)
}

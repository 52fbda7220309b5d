use crate::error::{GeometryError, Result};
use crate::math::nurbs::{evaluate, validate_definition};
use crate::math::Point2;

use super::{Curve, CurveDomain};

/// A validated (possibly rational) B-spline curve in the drawing plane.
///
/// Construction enforces `degree >= 1`, at least `degree + 1` control
/// points, a non-decreasing knot vector of length `n + degree + 1`, and,
/// when weights are given, exactly one positive weight per control point.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve {
    control_points: Vec<Point2>,
    degree: usize,
    knots: Vec<f64>,
    weights: Option<Vec<f64>>,
}

impl NurbsCurve {
    /// Creates a new curve.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] describing the first violated constraint.
    pub fn new(
        control_points: Vec<Point2>,
        degree: usize,
        knots: Vec<f64>,
        weights: Option<Vec<f64>>,
    ) -> Result<Self> {
        validate_definition(degree, control_points.len(), Some(knots.as_slice()), weights.as_deref())?;

        if let Some(index) = knots.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(GeometryError::DecreasingKnots { index: index + 1 }.into());
        }
        if let Some(weights) = &weights {
            if let Some((index, &weight)) = weights.iter().enumerate().find(|(_, w)| !(**w > 0.0)) {
                return Err(GeometryError::NonPositiveWeight { index, weight }.into());
            }
        }

        Ok(Self {
            control_points,
            degree,
            knots,
            weights,
        })
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the knot vector.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the weights, if the curve is rational.
    #[must_use]
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Active knot domain `[knots[degree], knots[len - 1 - degree]]`.
    #[must_use]
    pub fn knot_domain(&self) -> CurveDomain {
        CurveDomain::new(
            self.knots[self.degree],
            self.knots[self.knots.len() - 1 - self.degree],
        )
    }

    /// Distinct knot values bounding the polynomial segments of the active
    /// domain, in increasing order.
    ///
    /// Repeated knots collapse into a single break, so no zero-length
    /// segment is produced.
    #[must_use]
    pub fn segment_breaks(&self) -> Vec<f64> {
        let last = self.knots.len() - self.degree;
        let mut breaks = vec![self.knots[self.degree]];
        for &knot in &self.knots[self.degree + 1..last] {
            if breaks.last().is_some_and(|&prev| prev != knot) {
                breaks.push(knot);
            }
        }
        breaks
    }

    /// Returns a copy with every control point scaled about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            control_points: self
                .control_points
                .iter()
                .map(|p| Point2::from(p.coords * factor))
                .collect(),
            degree: self.degree,
            knots: self.knots.clone(),
            weights: self.weights.clone(),
        }
    }
}

impl Curve for NurbsCurve {
    /// Evaluates at the normalized parameter `t` in `[0, 1]`.
    fn evaluate(&self, t: f64) -> Result<Point2> {
        evaluate(
            t,
            self.degree,
            &self.control_points,
            Some(self.knots.as_slice()),
            self.weights.as_deref(),
        )
    }

    fn is_closed(&self) -> bool {
        match (self.evaluate(0.0), self.evaluate(1.0)) {
            (Ok(first), Ok(last)) => first == last,
            _ => false,
        }
    }
}

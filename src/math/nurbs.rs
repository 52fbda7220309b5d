//! Point evaluation of (rational) B-spline curves.
//!
//! Control points are lifted into homogeneous coordinates `(x*w, y*w, ..., w)`
//! and blended with de Boor's triangular scheme, so weighted and unweighted
//! curves go through the same affine interpolation.

use nalgebra::{Point, SVector};

use crate::error::{GeometryError, Result};

use super::round::{round_decimal, EVALUATION_EXP};

/// Checks the structural preconditions of [`evaluate`] that do not depend on
/// the parameter.
///
/// # Errors
///
/// Returns [`GeometryError::DegreeTooLow`], [`GeometryError::DegreeTooHigh`],
/// [`GeometryError::KnotCount`] or [`GeometryError::WeightCount`].
pub fn validate_definition(
    degree: usize,
    point_count: usize,
    knots: Option<&[f64]>,
    weights: Option<&[f64]>,
) -> Result<()> {
    if degree < 1 {
        return Err(GeometryError::DegreeTooLow { degree }.into());
    }
    if degree + 1 > point_count {
        return Err(GeometryError::DegreeTooHigh {
            degree,
            point_count,
        }
        .into());
    }
    if let Some(knots) = knots {
        let expected = point_count + degree + 1;
        if knots.len() != expected {
            return Err(GeometryError::KnotCount {
                expected,
                actual: knots.len(),
            }
            .into());
        }
    }
    if let Some(weights) = weights {
        if weights.len() != point_count {
            return Err(GeometryError::WeightCount {
                expected: point_count,
                actual: weights.len(),
            }
            .into());
        }
    }
    Ok(())
}

/// Uniform knot vector `0, 1, ..., point_count + degree`.
#[must_use]
pub fn uniform_knots(point_count: usize, degree: usize) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    (0..=point_count + degree).map(|k| k as f64).collect()
}

/// Evaluates the curve at the normalized parameter `t` in `[0, 1]`.
///
/// `t` is mapped linearly onto the active knot domain
/// `[knots[degree], knots[len - 1 - degree]]`. Values that land outside the
/// domain through floating-point error are clamped onto it. Missing `knots`
/// default to [`uniform_knots`], missing `weights` to all ones. Every output
/// coordinate is rounded to nine decimal places.
///
/// # Errors
///
/// Returns [`GeometryError::ParameterOutOfRange`] if `t` is outside
/// `[0, 1]`, or any error of [`validate_definition`].
pub fn evaluate<const D: usize>(
    t: f64,
    degree: usize,
    points: &[Point<f64, D>],
    knots: Option<&[f64]>,
    weights: Option<&[f64]>,
) -> Result<Point<f64, D>> {
    if !(0.0..=1.0).contains(&t) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "t",
            value: t,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }
    let n = points.len();
    validate_definition(degree, n, knots, weights)?;

    let synthesized;
    let knots = if let Some(knots) = knots {
        knots
    } else {
        synthesized = uniform_knots(n, degree);
        &synthesized
    };

    let domain_lo = degree;
    let domain_hi = knots.len() - 1 - degree;
    let low = knots[domain_lo];
    let high = knots[domain_hi];
    let u = (t * (high - low) + low).max(low).min(high);

    let span = (domain_lo..domain_hi)
        .find(|&s| u >= knots[s] && u <= knots[s + 1])
        .unwrap_or(domain_hi - 1);

    // Homogeneous control points, row-major with stride D + 1.
    let stride = D + 1;
    let mut v = vec![0.0; n * stride];
    for (i, p) in points.iter().enumerate() {
        let w = weights.map_or(1.0, |w| w[i]);
        let row = &mut v[i * stride..(i + 1) * stride];
        for j in 0..D {
            row[j] = p[j] * w;
        }
        row[D] = w;
    }

    for level in 1..=degree + 1 {
        for i in (span + level - degree..=span).rev() {
            let alpha = (u - knots[i]) / (knots[i + degree + 1 - level] - knots[i]);
            for j in 0..stride {
                v[i * stride + j] = (1.0 - alpha) * v[(i - 1) * stride + j] + alpha * v[i * stride + j];
            }
        }
    }

    let apex = &v[span * stride..(span + 1) * stride];
    let coords = SVector::<f64, D>::from_fn(|j, _| round_decimal(apex[j] / apex[D], EVALUATION_EXP));
    Ok(Point::from(coords))
}

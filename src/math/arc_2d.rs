/// 2D arc/bulge math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::{FRAC_PI_2, TAU};

use super::Point2;

/// Circular arc recovered from a bulge segment.
///
/// `radius` carries the sign of the bulge. Points on the arc are
/// `polar(center, |radius|, start_angle + s)` for `s` between `0` and `sweep`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

/// Angle of the direction from `from` to `to`.
#[must_use]
pub fn angle_between(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Point at `distance` from `origin` in direction `angle`.
#[must_use]
pub fn polar(origin: &Point2, distance: f64, angle: f64) -> Point2 {
    Point2::new(
        origin.x + distance * angle.cos(),
        origin.y + distance * angle.sin(),
    )
}

/// Included angle of a bulge segment.
#[must_use]
pub fn sweep_from_bulge(bulge: f64) -> f64 {
    4.0 * bulge.atan()
}

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// The center is reached from `start` by walking `radius` along the chord
/// direction turned by `pi/2 - sweep/2`. Zero-length chords and zero
/// bulges are not special-cased: they yield non-finite fields.
#[must_use]
pub fn arc_from_bulge(start: &Point2, end: &Point2, bulge: f64) -> BulgeArc {
    let sweep = sweep_from_bulge(bulge);
    let chord = (end - start).norm();
    let radius = chord / 2.0 / (sweep / 2.0).sin();
    let center = polar(start, radius, angle_between(start, end) + (FRAC_PI_2 - sweep / 2.0));
    let start_angle = angle_between(&center, start);

    BulgeArc {
        center,
        radius,
        start_angle,
        sweep,
    }
}

/// Evaluates a point on a bulge arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(arc: &BulgeArc, t: f64) -> Point2 {
    polar(&arc.center, arc.radius.abs(), arc.start_angle + arc.sweep * t)
}

/// Wraps the counter-clockwise sweep from `start_angle` to `end_angle`
/// into `(0, 2*pi]`.
///
/// Identical angles give a zero sweep; angles that differ by a whole
/// number of turns give a full turn. Non-finite angles give NaN.
#[must_use]
pub fn ccw_sweep(start_angle: f64, end_angle: f64) -> f64 {
    let difference = end_angle - start_angle;
    let sweep = difference.rem_euclid(TAU);
    if sweep < f64::EPSILON || sweep >= TAU {
        if difference.abs() < f64::EPSILON {
            0.0
        } else {
            TAU
        }
    } else {
        sweep
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw() {
        // CCW semicircle from (0,0) to (2,0): center (1,0), through the bottom.
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0);
        assert_abs_diff_eq!(arc.center.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.center.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.radius, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.sweep, PI, epsilon = TOL);

        let mid = arc_point_at(&arc, 0.5);
        assert_abs_diff_eq!(mid.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(mid.y, -1.0, epsilon = TOL);

        let end = arc_point_at(&arc, 1.0);
        assert_abs_diff_eq!(end.x, 2.0, epsilon = TOL);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = TOL);
    }

    #[test]
    fn semicircle_cw_goes_through_top() {
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0);
        assert_abs_diff_eq!(arc.center.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.center.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.radius, -1.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.sweep, -PI, epsilon = TOL);

        let mid = arc_point_at(&arc, 0.5);
        assert_abs_diff_eq!(mid.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(mid.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn quarter_circle_ccw() {
        let bulge = (PI / 8.0).tan();
        let arc = arc_from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), bulge);
        assert_abs_diff_eq!(arc.radius, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.center.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.center.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.start_angle, 0.0, epsilon = 1e-9);

        let mid = arc_point_at(&arc, 0.5);
        let expected = (PI / 4.0).cos();
        assert_abs_diff_eq!(mid.x, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.y, expected, epsilon = 1e-9);
    }

    #[test]
    fn zero_chord_is_not_finite() {
        let p = Point2::new(3.0, 4.0);
        let arc = arc_from_bulge(&p, &p, 0.5);
        assert_abs_diff_eq!(arc.radius, 0.0, epsilon = TOL);
        let zero_bulge = arc_from_bulge(&Point2::origin(), &Point2::new(1.0, 0.0), 0.0);
        assert!(!zero_bulge.radius.is_finite());
    }

    #[test]
    fn ccw_sweep_wraps_negative_difference() {
        assert_abs_diff_eq!(ccw_sweep(PI, FRAC_PI_2), 1.5 * PI, epsilon = TOL);
        assert_abs_diff_eq!(ccw_sweep(0.0, 3.0 * PI), PI, epsilon = TOL);
    }

    #[test]
    fn ccw_sweep_full_and_empty() {
        assert_abs_diff_eq!(ccw_sweep(0.0, TAU), TAU, epsilon = TOL);
        assert_abs_diff_eq!(ccw_sweep(0.0, 2.0 * TAU), TAU, epsilon = TOL);
        assert_abs_diff_eq!(ccw_sweep(1.0, 1.0), 0.0, epsilon = TOL);
    }

    #[test]
    fn ccw_sweep_of_non_finite_angle_is_nan() {
        assert!(ccw_sweep(0.0, f64::NEG_INFINITY).is_nan());
        assert!(ccw_sweep(f64::INFINITY, 0.0).is_nan());
        assert!(ccw_sweep(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn ccw_sweep_of_large_angle_wraps_directly() {
        let sweep = ccw_sweep(0.0, -1e10);
        assert!(sweep > 0.0 && sweep <= TAU);
        assert_abs_diff_eq!(sweep, (-1e10_f64).rem_euclid(TAU), epsilon = TOL);
        assert_abs_diff_eq!(ccw_sweep(1e12, 1e12 + PI), PI, epsilon = 1e-3);
    }
}

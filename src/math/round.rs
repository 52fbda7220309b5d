//! Decimal rounding on the decimal representation of a float.
//!
//! Scaling by a power of ten in binary (`v * 100.0`) inherits the
//! representation error of `v`: `1.005 * 100.0 == 100.49999999999999`.
//! Shifting the exponent of the shortest decimal representation instead
//! moves the digits exactly, so `1.005` rounds to `1.01` as written.

/// Decimal exponent used to stabilize evaluated spline coordinates.
pub const EVALUATION_EXP: f64 = -9.0;

/// Rounds `value` to the decimal position `10^exp`.
///
/// `exp = -2` rounds to hundredths, `exp = 2` to hundreds. `exp = 0`
/// rounds to the nearest integer with ties away from zero.
///
/// Returns `NaN` when `exp` is non-finite or non-integral, and when `value`
/// is non-finite with a non-zero `exp`.
#[must_use]
pub fn round_decimal(value: f64, exp: f64) -> f64 {
    if exp == 0.0 {
        return value.round();
    }
    if !value.is_finite() || !exp.is_finite() || exp.fract() != 0.0 {
        return f64::NAN;
    }

    #[allow(clippy::cast_possible_truncation)]
    let exp = exp as i32;
    let shifted = shift_decimal(value, exp.saturating_neg()).round();
    shift_decimal(shifted, exp)
}

/// Multiplies `value` by `10^by` by editing its exponential notation.
fn shift_decimal(value: f64, by: i32) -> f64 {
    let repr = format!("{value:e}");
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f64::NAN;
    };
    format!("{mantissa}e{}", exponent.saturating_add(by))
        .parse()
        .unwrap_or(f64::NAN)
}

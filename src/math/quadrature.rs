/// Composite Simpson integration of `f` over `[a, b]`.
///
/// `intervals` is rounded up to the next even number (minimum 2).
#[must_use]
pub fn simpson<F>(f: F, a: f64, b: f64, intervals: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = intervals.max(2).next_multiple_of(2);
    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in 1..n {
        #[allow(clippy::cast_precision_loss)]
        let x = a + h * i as f64;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x);
    }

    sum * h / 3.0
}

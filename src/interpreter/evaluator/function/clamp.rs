/// Restricts `value` to the inclusive range `[min, max]`.
///
/// Takes three arguments: `value`, `min` and `max`. An inverted range yields
/// NaN instead of panicking the way `f64::clamp` does.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::clamp::clamp;
///
/// assert_eq!(clamp(&[5.0, 0.0, 2.0]), 2.0);
/// assert_eq!(clamp(&[-1.0, 0.0, 2.0]), 0.0);
/// assert_eq!(clamp(&[1.5, 0.0, 2.0]), 1.5);
/// ```
#[must_use]
pub fn clamp(args: &[f64]) -> f64 {
    match args {
        [value, min, max] if min <= max => value.clamp(*min, *max),
        _ => f64::NAN,
    }
}

/// Computes the minimum or maximum of two values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. A NaN argument is ignored in favor of the other one.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3.0, 7.0]), 3.0);
/// assert_eq!(min_max("max", &[2.5, 1.0]), 2.5);
/// ```
#[must_use]
pub fn min_max(name: &str, args: &[f64]) -> f64 {
    match args {
        [left, right] if name == "min" => left.min(*right),
        [left, right] => left.max(*right),
        _ => f64::NAN,
    }
}

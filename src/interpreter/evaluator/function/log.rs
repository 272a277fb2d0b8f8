/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments: `value` and `base`, and computes
/// `ln(value) / ln(base)`. A base of `1` divides by zero and yields an infinity
/// or NaN, like any other IEEE division.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::log::log;
///
/// let result = log(&[8.0, 2.0]);
///
/// assert!((result - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn log(args: &[f64]) -> f64 {
    match args {
        [value, base] => value.ln() / base.ln(),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_one_is_not_finite() {
        assert!(!log(&[10.0, 1.0]).is_finite());
    }

    #[test]
    fn negative_values_have_no_logarithm() {
        assert!(log(&[-1.0, 10.0]).is_nan());
    }
}

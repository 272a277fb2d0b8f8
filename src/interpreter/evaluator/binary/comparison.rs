use crate::ast::Operator;

/// Evaluates a comparison, yielding `1.0` when it holds and `0.0` otherwise.
///
/// Comparisons are exact IEEE comparisons: any comparison involving NaN is
/// false except `!=`. Returns `None` for non-comparison operators.
#[must_use]
pub fn eval_comparison(op: Operator, left: f64, right: f64) -> Option<f64> {
    #[allow(clippy::float_cmp)]
    let holds = match op {
        Operator::Lt => left < right,
        Operator::Le => left <= right,
        Operator::Gt => left > right,
        Operator::Ge => left >= right,
        Operator::Eq => left == right,
        Operator::Ne => left != right,
        _ => return None,
    };
    Some(if holds { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_yield_one_or_zero() {
        assert_eq!(eval_comparison(Operator::Lt, 1.0, 2.0), Some(1.0));
        assert_eq!(eval_comparison(Operator::Le, 2.0, 2.0), Some(1.0));
        assert_eq!(eval_comparison(Operator::Gt, 1.0, 2.0), Some(0.0));
        assert_eq!(eval_comparison(Operator::Ge, 1.0, 2.0), Some(0.0));
        assert_eq!(eval_comparison(Operator::Eq, 0.5, 0.5), Some(1.0));
        assert_eq!(eval_comparison(Operator::Ne, 0.5, 0.5), Some(0.0));
    }

    #[test]
    fn nan_is_unequal_to_everything() {
        assert_eq!(eval_comparison(Operator::Eq, f64::NAN, f64::NAN), Some(0.0));
        assert_eq!(eval_comparison(Operator::Ne, f64::NAN, f64::NAN), Some(1.0));
        assert_eq!(eval_comparison(Operator::Le, f64::NAN, 1.0), Some(0.0));
    }

    #[test]
    fn non_comparison_operators_are_declined() {
        assert_eq!(eval_comparison(Operator::Mod, 1.0, 1.0), None);
    }
}

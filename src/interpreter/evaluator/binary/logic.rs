use crate::ast::Operator;

/// Coerces a value to `0` or `1`: anything non-zero is true.
fn as_bit(value: f64) -> u8 {
    if value == 0.0 { 0 } else { 1 }
}

/// Evaluates `&&` and `||`.
///
/// Both operands are coerced to `0`/`1` and combined bitwise, so the result is
/// always `0.0` or `1.0`. Returns `None` for any other operator.
///
/// # Example
/// ```
/// use exprcalc::{ast::Operator, interpreter::evaluator::binary::logic::eval_logic};
///
/// assert_eq!(eval_logic(Operator::And, 2.0, -5.0), Some(1.0));
/// assert_eq!(eval_logic(Operator::Or, 0.0, 0.0), Some(0.0));
/// ```
#[must_use]
pub fn eval_logic(op: Operator, left: f64, right: f64) -> Option<f64> {
    let bits = match op {
        Operator::And => as_bit(left) & as_bit(right),
        Operator::Or => as_bit(left) | as_bit(right),
        _ => return None,
    };
    Some(f64::from(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        let cases = [(0.0, 0.0, 0.0, 0.0), (0.0, 3.0, 0.0, 1.0), (0.5, 0.0, 0.0, 1.0),
                     (-1.0, 7.0, 1.0, 1.0)];
        for (left, right, and, or) in cases {
            assert_eq!(eval_logic(Operator::And, left, right), Some(and));
            assert_eq!(eval_logic(Operator::Or, left, right), Some(or));
        }
    }

    #[test]
    fn nan_counts_as_true() {
        assert_eq!(eval_logic(Operator::And, f64::NAN, 1.0), Some(1.0));
    }

    #[test]
    fn other_operators_are_declined() {
        assert_eq!(eval_logic(Operator::Plus, 1.0, 1.0), None);
        assert_eq!(eval_logic(Operator::Not, 1.0, 1.0), None);
    }
}

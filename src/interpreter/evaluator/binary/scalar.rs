use crate::ast::Operator;

/// Evaluates an arithmetic operator with IEEE 754 semantics.
///
/// Division by zero yields an infinity or NaN rather than an error, and `%` is
/// the remainder with the sign of the dividend.
///
/// Returns `None` if `op` is not arithmetic.
///
/// # Example
/// ```
/// use exprcalc::{ast::Operator, interpreter::evaluator::binary::scalar::eval_scalar_op};
///
/// assert_eq!(eval_scalar_op(Operator::Pow, 2.0, 10.0), Some(1024.0));
/// assert_eq!(eval_scalar_op(Operator::Div, 1.0, 0.0), Some(f64::INFINITY));
/// assert_eq!(eval_scalar_op(Operator::Lt, 1.0, 2.0), None);
/// ```
#[must_use]
pub fn eval_scalar_op(op: Operator, left: f64, right: f64) -> Option<f64> {
    let value = match op {
        Operator::Pow => left.powf(right),
        Operator::Multi => left * right,
        Operator::Div => left / right,
        Operator::Plus => left + right,
        Operator::Minus => left - right,
        Operator::Mod => left % right,
        _ => return None,
    };
    Some(value)
}

use crate::{
    ast::{Node, Operator, Tree},
    interpreter::evaluator::core::EvalResult,
};

impl Tree {
    /// Applies a prefix operator to its evaluated operand.
    ///
    /// Logical not is the only prefix operator: it yields `1.0` when the operand
    /// is exactly `0.0` and `0.0` otherwise.
    pub(crate) fn apply_prefix(op: Operator, node: &Node, operand: f64) -> EvalResult<f64> {
        match op {
            Operator::Not => Ok(eval_not(operand)),
            _ => Err(Self::invalid_operator(op, node)),
        }
    }
}

/// Logical negation on the `0.0`/non-zero encoding of booleans.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::unary::eval_not;
///
/// assert_eq!(eval_not(0.0), 1.0);
/// assert_eq!(eval_not(-3.5), 0.0);
/// ```
#[must_use]
pub fn eval_not(value: f64) -> f64 {
    if value == 0.0 { 1.0 } else { 0.0 }
}

use crate::{
    ast::{Node, Operator, Tree},
    interpreter::evaluator::{
        binary::{comparison::eval_comparison, logic::eval_logic, scalar::eval_scalar_op},
        core::EvalResult,
    },
};

impl Tree {
    /// Applies an infix operator to its evaluated operands.
    ///
    /// Both operands are always evaluated, left before right: `&&` and `||` do
    /// not short-circuit. The result is computed by the first operator family
    /// that knows `op`.
    pub(crate) fn apply_infix(op: Operator,
                              node: &Node,
                              left: f64,
                              right: f64)
                              -> EvalResult<f64> {
        eval_scalar_op(op, left, right).or_else(|| eval_logic(op, left, right))
                                       .or_else(|| eval_comparison(op, left, right))
                                       .ok_or_else(|| Self::invalid_operator(op, node))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Node, NodeId, NodeKind, Operator, Slice, Tree},
        error::EvalError,
        interpreter::evaluator::context::Context,
    };

    fn infix(op: Operator, operands: &[f64]) -> Tree {
        let mut top = Node::new(NodeKind::Infix(op), Slice::point(0));
        let mut nodes = Vec::new();
        for (i, value) in operands.iter().enumerate() {
            top.push_child(NodeId(i + 1));
            nodes.push(Node::new(NodeKind::Number(*value), Slice::point(i + 1)));
        }
        nodes.insert(0, top);
        Tree::from_parts(nodes, NodeId(0))
    }

    #[test]
    fn not_is_not_an_infix_operator() {
        let tree = infix(Operator::Not, &[1.0, 2.0]);
        assert!(matches!(tree.eval(&Context::new()),
                         Err(EvalError::InvalidOperator { operator: Operator::Not, .. })));
    }

    #[test]
    fn infix_needs_two_operands() {
        let tree = infix(Operator::Plus, &[1.0]);
        assert!(matches!(tree.eval(&Context::new()),
                         Err(EvalError::ChildCountMismatch { expected: 2, found: 1, .. })));
    }

    #[test]
    fn operators_route_to_their_family() {
        let env = Context::new();
        assert_eq!(infix(Operator::Minus, &[5.0, 7.0]).eval(&env), Ok(-2.0));
        assert_eq!(infix(Operator::Or, &[0.0, -2.0]).eval(&env), Ok(1.0));
        assert_eq!(infix(Operator::Ne, &[3.0, 3.0]).eval(&env), Ok(0.0));
    }
}

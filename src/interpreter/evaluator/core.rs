use crate::{
    ast::{Node, NodeId, NodeKind, Operator, Tree},
    error::EvalError,
    interpreter::evaluator::{context::Env, function::Function},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// One pending step of the post-order walk.
enum Step<'e> {
    /// Check the node and schedule its children.
    Visit(NodeId),
    /// Combine the values of the node's children.
    Reduce(NodeId),
    /// Apply a resolved function to the values of the call's arguments.
    Call(NodeId, &'e dyn Function),
}

impl Tree {
    /// Evaluates the tree against `env`.
    ///
    /// Evaluation only reads from the environment, and children are always
    /// evaluated left to right, so functions observe their arguments in source
    /// order. The walk keeps its own stacks on the heap, so nesting depth is
    /// bounded by memory rather than by the thread's stack.
    ///
    /// # Errors
    /// Returns an `EvalError` for unknown variables or functions, argument
    /// count mismatches, or nodes that cannot apply their operator.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::evaluator::context::Context;
    ///
    /// let tree = exprcalc::parse("(a + b) * 4").unwrap();
    ///
    /// let mut env = Context::new();
    /// env.set_var("a", 2.0).set_var("b", 3.0);
    ///
    /// assert_eq!(tree.eval(&env).unwrap(), 20.0);
    /// ```
    pub fn eval<E: Env + ?Sized>(&self, env: &E) -> EvalResult<f64> {
        let mut work = vec![Step::Visit(self.root())];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(id) => {
                    let node = self.node(id);
                    match node.kind() {
                        NodeKind::Number(value) => {
                            values.push(*value);
                            continue;
                        },
                        NodeKind::Var(name) => {
                            let value = env.get_var(name).ok_or_else(|| {
                                                              EvalError::UnknownVariable { name:  name.clone(),
                                                                                           slice: node.slice(), }
                                                          })?;
                            values.push(value);
                            continue;
                        },
                        NodeKind::Call(name) => {
                            let function = Self::resolve_call(name, node, env)?;
                            work.push(Step::Call(id, function));
                        },
                        NodeKind::Postfix(op) => return Err(Self::invalid_operator(*op, node)),
                        NodeKind::Par | NodeKind::Prefix(_) => {
                            Self::operands::<1>(node)?;
                            work.push(Step::Reduce(id));
                        },
                        NodeKind::Infix(_) => {
                            Self::operands::<2>(node)?;
                            work.push(Step::Reduce(id));
                        },
                    }
                    work.extend(node.children().iter().rev().map(|&child| Step::Visit(child)));
                },
                Step::Reduce(id) => {
                    let node = self.node(id);
                    let value = match node.kind() {
                        NodeKind::Prefix(op) => {
                            let [operand] = Self::take_values(&mut values, node)?;
                            Self::apply_prefix(*op, node, operand)?
                        },
                        NodeKind::Infix(op) => {
                            let [left, right] = Self::take_values(&mut values, node)?;
                            Self::apply_infix(*op, node, left, right)?
                        },
                        _ => {
                            let [value] = Self::take_values(&mut values, node)?;
                            value
                        },
                    };
                    values.push(value);
                },
                Step::Call(id, function) => {
                    let node = self.node(id);
                    let start = values.len().saturating_sub(node.children().len());
                    let args = values.split_off(start);
                    values.push(function.call(&args));
                },
            }
        }

        values.pop().ok_or_else(|| Self::child_count_mismatch(self.node(self.root()), 1))
    }

    /// Returns the children of `node`, which must number exactly `N`.
    pub(crate) fn operands<const N: usize>(node: &Node) -> EvalResult<[NodeId; N]> {
        node.children()
            .try_into()
            .map_err(|_| Self::child_count_mismatch(node, N))
    }

    /// Pops the values of the last `N` evaluated children of `node`.
    fn take_values<const N: usize>(values: &mut Vec<f64>, node: &Node) -> EvalResult<[f64; N]> {
        let start = values.len().saturating_sub(N);
        values.split_off(start)
              .try_into()
              .map_err(|_| Self::child_count_mismatch(node, N))
    }

    fn child_count_mismatch(node: &Node, expected: usize) -> EvalError {
        EvalError::ChildCountMismatch { node: node.to_string(),
                                        expected,
                                        found: node.children().len(),
                                        slice: node.slice() }
    }

    pub(crate) fn invalid_operator(operator: Operator, node: &Node) -> EvalError {
        EvalError::InvalidOperator { operator,
                                     node: node.to_string(),
                                     slice: node.slice() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Slice, interpreter::evaluator::context::Context, parse};

    #[test]
    fn variables_come_from_the_environment() {
        let mut env = Context::new();
        env.set_var("x", 1.5);
        assert_eq!(parse("x").unwrap().eval(&env), Ok(1.5));
        assert_eq!(parse("y").unwrap().eval(&env),
                   Err(EvalError::UnknownVariable { name:  "y".into(),
                                                    slice: Slice::point(0), }));
    }

    #[test]
    fn empty_root_cannot_be_evaluated() {
        let tree = parse("   ").unwrap();
        assert!(matches!(tree.eval(&Context::new()),
                         Err(EvalError::ChildCountMismatch { expected: 1, found: 0, .. })));
    }

    #[test]
    fn postfix_nodes_never_evaluate() {
        let nodes = vec![Node::new(NodeKind::Postfix(Operator::Not), Slice::point(1))];
        let tree = Tree::from_parts(nodes, NodeId(0));
        assert!(matches!(tree.eval(&Context::new()),
                         Err(EvalError::InvalidOperator { operator: Operator::Not, .. })));
    }

    #[test]
    fn a_tree_can_be_evaluated_repeatedly() {
        let tree = parse("a * 2").unwrap();
        let mut env = Context::new();
        env.set_var("a", 1.0);
        assert_eq!(tree.eval(&env), Ok(2.0));
        env.set_var("a", 4.0);
        assert_eq!(tree.eval(&env), Ok(8.0));
    }

    #[test]
    fn leftmost_failure_is_reported() {
        let env = Context::new();
        assert!(matches!(parse("x + nope(1)").unwrap().eval(&env),
                         Err(EvalError::UnknownVariable { .. })));
        // the callee is resolved before its arguments are evaluated
        assert!(matches!(parse("nope(x)").unwrap().eval(&env),
                         Err(EvalError::UnknownFunction { .. })));
    }

    #[test]
    fn nesting_depth_is_not_limited_by_the_call_stack() {
        let depth = 100_000;
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        let mut env = Context::new();
        env.set_var("x", 3.0);
        assert_eq!(parse(&source).unwrap().eval(&env), Ok(3.0));
    }
}

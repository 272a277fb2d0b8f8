use crate::{
    ast::{Node, NodeKind, Operator, Slice},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TreeBuilder, unexpected},
    },
};

impl TreeBuilder {
    /// Attaches an operator token.
    ///
    /// `!` becomes a prefix node, every other operator an infix node.
    ///
    /// After a finished operand, the stack is unwound to the nearest group,
    /// call or operator that ranks strictly lower than `op`. The last child of
    /// that node becomes the new node's left operand, and the new node takes
    /// its place. Unwinding past equal ranks is what makes `8/4/2` chain left
    /// to right.
    ///
    /// Where an operand is still expected, only a prefix operator is accepted.
    pub(in crate::interpreter::parser) fn push_operator(&mut self,
                                                        op: Operator,
                                                        slice: Slice,
                                                        token: &Token)
                                                        -> ParseResult<()> {
        let kind = if op.is_prefix() { NodeKind::Prefix(op) } else { NodeKind::Infix(op) };
        let cursor = self.cursor();

        if self.node(cursor).is_completed() {
            let anchor = self.cursor_up_to(|node| binds_looser(node, op))
                             .ok_or_else(|| unexpected(token))?;
            let operand = self.node_mut(anchor).pop_child().ok_or_else(|| unexpected(token))?;
            let current = self.alloc(Node::new(kind, slice));
            self.node_mut(current).push_child(operand);
            self.node_mut(anchor).push_child(current);
            self.stack.push(current);
        } else if op.is_prefix() {
            let current = self.alloc(Node::new(kind, slice));
            self.node_mut(cursor).push_child(current);
            self.stack.push(current);
        } else {
            return Err(unexpected(token));
        }
        Ok(())
    }
}

/// Whether `node` stops the unwinding for an incoming `op`.
fn binds_looser(node: &Node, op: Operator) -> bool {
    match node.kind() {
        NodeKind::Par | NodeKind::Call(_) => true,
        NodeKind::Infix(other) | NodeKind::Prefix(other) => other.precedence() < op.precedence(),
        NodeKind::Number(_) | NodeKind::Var(_) | NodeKind::Postfix(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeId;

    #[test]
    fn groups_and_calls_always_stop_the_unwinding() {
        let par = Node::new(NodeKind::Par, Slice::point(0));
        let call = Node::new(NodeKind::Call("f".into()), Slice::point(0));
        for op in Operator::ALL {
            assert!(binds_looser(&par, op));
            assert!(binds_looser(&call, op));
        }
    }

    #[test]
    fn equal_rank_does_not_stop_the_unwinding() {
        let plus = Node::new(NodeKind::Infix(Operator::Plus), Slice::point(0));
        assert!(!binds_looser(&plus, Operator::Minus));
        assert!(!binds_looser(&plus, Operator::Eq));
        assert!(binds_looser(&plus, Operator::Multi));

        let pow = Node::new(NodeKind::Infix(Operator::Pow), Slice::point(0));
        assert!(!binds_looser(&pow, Operator::Pow));
    }

    #[test]
    fn adopted_operand_keeps_its_position() {
        let mut builder = TreeBuilder::new();
        builder.feed(Token::Number(1.0, Slice::point(0))).unwrap();
        builder.push_operator(Operator::Plus,
                              Slice::point(1),
                              &Token::Operator(Operator::Plus, Slice::point(1)))
               .unwrap();

        let root = builder.root;
        let plus = builder.node(root).children()[0];
        assert_eq!(builder.node(plus).children(), &[NodeId(1)]);
        assert_eq!(builder.cursor(), plus);
        assert!(!builder.node(plus).is_completed());
    }
}

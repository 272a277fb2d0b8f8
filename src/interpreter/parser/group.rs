use crate::{
    ast::{Node, NodeKind, Slice},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TreeBuilder, unexpected},
    },
};

impl TreeBuilder {
    /// Handles `(`.
    ///
    /// Right after an identifier this starts a call: the variable leaf is
    /// turned into an open call node in place. Otherwise an operand must be
    /// expected, and a new open group is pushed.
    pub(in crate::interpreter::parser) fn open(&mut self,
                                               slice: Slice,
                                               token: &Token)
                                               -> ParseResult<()> {
        let cursor = self.cursor();
        if self.node_mut(cursor).convert_to_call() {
            return Ok(());
        }
        if self.node(cursor).is_completed() {
            return Err(unexpected(token));
        }
        let group = self.alloc(Node::new(NodeKind::Par, slice));
        self.node_mut(cursor).push_child(group);
        self.stack.push(group);
        Ok(())
    }

    /// Handles `)`.
    ///
    /// After a finished operand, closes the nearest enclosing group or call.
    /// Otherwise only a call (with any number of arguments) or a non-empty
    /// group can be closed directly. The root can never be closed this way.
    pub(in crate::interpreter::parser) fn close(&mut self, token: &Token) -> ParseResult<()> {
        let cursor = self.cursor();
        if cursor == self.root {
            return Err(unexpected(token));
        }

        if self.node(cursor).is_completed() {
            let found = self.cursor_up_to(|node| {
                                matches!(node.kind(), NodeKind::Par | NodeKind::Call(_))
                            })
                            .ok_or_else(|| unexpected(token))?;
            if found == self.root {
                return Err(unexpected(token));
            }
            self.node_mut(found).mark_completed();
            return Ok(());
        }

        let node = self.node(cursor);
        let closable = match node.kind() {
            NodeKind::Par => !node.children().is_empty(),
            NodeKind::Call(_) => true,
            _ => false,
        };
        if !closable {
            return Err(unexpected(token));
        }
        self.node_mut(cursor).mark_completed();
        Ok(())
    }

    /// Handles `,` by moving back up to the enclosing call, ready for its next
    /// argument.
    pub(in crate::interpreter::parser) fn comma(&mut self, token: &Token) -> ParseResult<()> {
        let cursor = self.cursor();
        if cursor == self.root || !self.node(cursor).is_completed() {
            return Err(unexpected(token));
        }
        self.cursor_up_to(|node| matches!(node.kind(), NodeKind::Call(_)))
            .ok_or_else(|| unexpected(token))?;
        Ok(())
    }
}

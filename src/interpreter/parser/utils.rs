use crate::{
    ast::{Node, NodeId},
    interpreter::parser::core::TreeBuilder,
};

impl TreeBuilder {
    /// The node on top of the stack.
    ///
    /// A step that fails may leave the stack empty, but the build stops there,
    /// so every step starts with at least the root on the stack.
    pub(in crate::interpreter::parser) fn cursor(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(self.root)
    }

    pub(in crate::interpreter::parser) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(in crate::interpreter::parser) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Moves a node into the arena and returns its handle.
    pub(in crate::interpreter::parser) fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Pops the cursor, then keeps popping until the top of the stack matches
    /// `found`.
    ///
    /// Returns the matching node, which stays on the stack, or `None` if the
    /// stack runs out first.
    pub(in crate::interpreter::parser) fn cursor_up_to(&mut self,
                                                       found: impl Fn(&Node) -> bool)
                                                       -> Option<NodeId> {
        self.stack.pop();
        loop {
            let top = *self.stack.last()?;
            if found(self.node(top)) {
                return Some(top);
            }
            self.stack.pop();
        }
    }
}

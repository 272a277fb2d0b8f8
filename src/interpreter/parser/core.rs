use log::trace;

use crate::{
    ast::{Node, NodeId, NodeKind, Slice, Tree},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds a syntax tree from a sequence of tokens.
///
/// The tree is built in a single pass. Each token is attached to the node on
/// top of a stack of open nodes (the cursor), starting from a synthetic root
/// group that spans the whole input. Operator precedence is resolved by walking
/// up that stack, so equal-rank operators chain left to right.
///
/// # Errors
/// Returns a `ParseError` for the first token that cannot be attached, or for
/// the first node still open when the input ends.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::{NodeKind, Operator},
///     interpreter::{lexer::Lexer, parser::build},
/// };
///
/// let tokens = Lexer::new("8/4/2").collect::<Result<Vec<_>, _>>().unwrap();
/// let tree = build(tokens).unwrap();
///
/// let top = tree.node(tree.root()).children()[0];
/// assert_eq!(tree.node(top).kind(), &NodeKind::Infix(Operator::Div));
/// ```
pub fn build<I>(tokens: I) -> ParseResult<Tree>
    where I: IntoIterator<Item = Token>
{
    try_build(tokens.into_iter().map(Ok))
}

/// Builds a syntax tree from a fallible token sequence.
///
/// Tokens are pulled lazily, so a lexer can feed the builder directly: the
/// first error, whether raised by the token source or by the builder, ends the
/// build.
///
/// # Errors
/// Returns the token source's error as-is, or a `ParseError` converted into
/// `E`.
pub fn try_build<I, E>(tokens: I) -> Result<Tree, E>
    where I: IntoIterator<Item = Result<Token, E>>,
          E: From<ParseError>
{
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.feed(token?)?;
    }
    Ok(builder.finish()?)
}

/// Transient state of one build: the node arena and the stack of open nodes.
///
/// The stack holds the path from the root down to the cursor. A builder is
/// created per call and consumed by [`TreeBuilder::finish`].
pub(crate) struct TreeBuilder {
    pub(super) nodes: Vec<Node>,
    pub(super) stack: Vec<NodeId>,
    pub(super) root:  NodeId,
}

impl TreeBuilder {
    pub(super) fn new() -> Self {
        let root = NodeId(0);
        Self { nodes: vec![Node::new(NodeKind::Par, Slice::SENTINEL)],
               stack: vec![root],
               root }
    }

    /// Attaches one token to the tree under construction.
    pub(super) fn feed(&mut self, token: Token) -> ParseResult<()> {
        trace!("feed {token} at {}, cursor {}", token.slice(), self.node(self.cursor()));
        match &token {
            Token::Number(value, slice) => {
                self.push_leaf(NodeKind::Number(*value), *slice, &token)
            },
            Token::Ident(name, slice) => {
                self.push_leaf(NodeKind::Var(name.clone()), *slice, &token)
            },
            Token::Operator(op, slice) => self.push_operator(*op, *slice, &token),
            Token::Open(slice) => self.open(*slice, &token),
            Token::Close(_) => self.close(&token),
            Token::Comma(_) => self.comma(&token),
        }
    }

    /// Appends a number or variable leaf under the cursor and makes it the
    /// cursor.
    fn push_leaf(&mut self, kind: NodeKind, slice: Slice, token: &Token) -> ParseResult<()> {
        let cursor = self.cursor();
        if self.node(cursor).is_completed() {
            return Err(unexpected(token));
        }
        let leaf = self.alloc(Node::new(kind, slice));
        self.node_mut(cursor).push_child(leaf);
        self.stack.push(leaf);
        Ok(())
    }

    /// Completes the root and checks that nothing else was left open.
    fn finish(mut self) -> ParseResult<Tree> {
        let root = self.root;
        self.node_mut(root).mark_completed();
        while let Some(id) = self.stack.pop() {
            let node = self.node(id);
            if !node.is_completed() {
                return Err(ParseError::Incomplete { node:  node.to_string(),
                                                    slice: node.slice(), });
            }
        }
        Ok(Tree::from_parts(self.nodes, root))
    }
}

/// The error for a token that cannot be attached at the current position.
pub(super) fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  slice: token.slice(), }
}

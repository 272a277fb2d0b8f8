use std::{collections::BTreeSet, fmt, fmt::Write as _, sync::OnceLock};

/// An operator recognized by the lexer.
///
/// Every operator has a fixed symbol and a precedence rank. A higher rank binds
/// tighter. All operators are infix except [`Operator::Not`], which is the only
/// prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `**`
    Pow,
    /// `*`
    Multi,
    /// `/`
    Div,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `%`
    Mod,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

static OPERATOR_CHARS: OnceLock<BTreeSet<char>> = OnceLock::new();

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Self; 15] = [Self::Pow,
                                 Self::Multi,
                                 Self::Div,
                                 Self::Plus,
                                 Self::Minus,
                                 Self::Mod,
                                 Self::Not,
                                 Self::And,
                                 Self::Or,
                                 Self::Lt,
                                 Self::Le,
                                 Self::Gt,
                                 Self::Ge,
                                 Self::Eq,
                                 Self::Ne];

    /// The source text of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pow => "**",
            Self::Multi => "*",
            Self::Div => "/",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mod => "%",
            Self::Not => "!",
            Self::And => "&&",
            Self::Or => "||",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }

    /// The precedence rank. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 8,
            Self::Multi | Self::Div => 7,
            Self::Plus | Self::Minus => 6,
            Self::Mod => 5,
            Self::Not => 4,
            Self::And => 3,
            Self::Or => 2,
            Self::Lt | Self::Le | Self::Gt | Self::Ge | Self::Eq | Self::Ne => 1,
        }
    }

    /// Whether the operator is written in front of its only operand.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Looks an operator up by its exact symbol.
    ///
    /// Prefixes of a symbol never match: `"&"` is not an operator even though
    /// `"&&"` is.
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("<="), Some(Operator::Le));
    /// assert_eq!(Operator::from_symbol(">>"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns `true` if `c` appears in the symbol of any operator.
    ///
    /// The character set is built from the operator table on first use.
    #[must_use]
    pub fn is_symbol_char(c: char) -> bool {
        OPERATOR_CHARS.get_or_init(|| Self::ALL.iter().flat_map(|op| op.symbol().chars()).collect())
                      .contains(&c)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.symbol())
    }
}

/// An inclusive `[start, end]` span of character offsets into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    start: usize,
    end:   usize,
}

impl Slice {
    /// Slice carried by the synthetic root, which has no source position.
    pub const SENTINEL: Self = Self { start: usize::MAX,
                                      end:   usize::MAX, };

    /// Creates a slice covering `start..=end`.
    ///
    /// # Panics
    /// Panics if `start > end`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::Slice;
    ///
    /// let slice = Slice::new(2, 4);
    /// assert_eq!(slice.len(), 3);
    /// assert_eq!(slice.to_string(), "[2,4]");
    /// ```
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "slice start must not exceed its end");
        Self { start, end }
    }

    /// A single-character slice.
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self { start: offset,
               end:   offset, }
    }

    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of characters covered. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.start == usize::MAX
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "[..]")
        } else {
            write!(f, "[{},{}]", self.start, self.end)
        }
    }
}

/// Handle to a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A numeric literal.
    Number(f64),
    /// A variable reference.
    Var(String),
    /// A function call; the children are the arguments.
    Call(String),
    /// A prefix operator with one operand.
    Prefix(Operator),
    /// An infix operator with two operands.
    Infix(Operator),
    /// A postfix operator with one operand. No operator currently produces it.
    Postfix(Operator),
    /// A parenthesized group holding at most one child. The synthetic root is
    /// also a `Par`.
    Par,
}

impl NodeKind {
    /// The child count at which the node completes on its own, if any.
    ///
    /// Groups and calls have no fixed count: they complete only when closed.
    const fn required_children(&self) -> Option<usize> {
        match self {
            Self::Number(_) | Self::Var(_) => Some(0),
            Self::Prefix(_) | Self::Postfix(_) => Some(1),
            Self::Infix(_) => Some(2),
            Self::Call(_) | Self::Par => None,
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Var(_) => "Var",
            Self::Call(_) => "Call",
            Self::Prefix(_) => "Prefix",
            Self::Infix(_) => "Infix",
            Self::Postfix(_) => "Postfix",
            Self::Par => "Par",
        }
    }
}

/// Whether a node still accepts children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Open,
    Completed,
}

/// A single node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind:     NodeKind,
    slice:    Slice,
    state:    NodeState,
    children: Vec<NodeId>,
}

impl Node {
    /// Creates a node. Leaves start completed, everything else open.
    pub(crate) fn new(kind: NodeKind, slice: Slice) -> Self {
        let state = match kind.required_children() {
            Some(0) => NodeState::Completed,
            _ => NodeState::Open,
        };
        Self { kind,
               slice,
               state,
               children: Vec::new() }
    }

    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub const fn slice(&self) -> Slice {
        self.slice
    }

    #[must_use]
    pub const fn state(&self) -> NodeState {
        self.state
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.state, NodeState::Completed)
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Appends a child. Operator nodes complete once they hold their operands.
    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
        if self.kind.required_children() == Some(self.children.len()) {
            self.state = NodeState::Completed;
        }
    }

    /// Detaches the last child. The state is left untouched.
    pub(crate) fn pop_child(&mut self) -> Option<NodeId> {
        self.children.pop()
    }

    pub(crate) fn mark_completed(&mut self) {
        self.state = NodeState::Completed;
    }

    /// Turns a variable leaf into an open call with the same name and slice.
    ///
    /// Returns `false` if the node is not a variable.
    pub(crate) fn convert_to_call(&mut self) -> bool {
        if let NodeKind::Var(name) = &mut self.kind {
            self.kind = NodeKind::Call(std::mem::take(name));
            self.state = NodeState::Open;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match &self.kind {
            NodeKind::Number(value) => write!(f, "{name}({value})")?,
            NodeKind::Var(ident) | NodeKind::Call(ident) => write!(f, "{name}({ident})")?,
            NodeKind::Prefix(op) | NodeKind::Infix(op) | NodeKind::Postfix(op) => {
                write!(f, "{name}({op})")?;
            },
            NodeKind::Par => write!(f, "{name}()")?,
        }
        let state = if self.is_completed() { "completed" } else { "open" };
        write!(f, " {} {state}", self.slice)
    }
}

/// A syntax tree produced by the tree builder.
///
/// Nodes live in an arena and refer to their children through [`NodeId`]s.
/// Every node except the root has exactly one parent. Once built, the tree is
/// never mutated, so it can be evaluated any number of times and shared between
/// threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root:  NodeId,
}

impl Tree {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The synthetic root: a `Par` spanning the whole input.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree, root included.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Renders the tree one node per line, children nested by `indent` spaces.
    ///
    /// # Example
    /// ```
    /// let tree = exprcalc::parse("1+x").unwrap();
    /// let dump = tree.dump(2);
    ///
    /// assert!(dump.starts_with("Par() [..] completed {"));
    /// assert!(dump.contains("    Var(x) [2,2] completed {"));
    /// ```
    #[must_use]
    pub fn dump(&self, indent: usize) -> String {
        let mut out = String::new();
        // (node, depth, whether the node's opening line is already written)
        let mut pending = vec![(self.root, 0, false)];
        while let Some((id, level, opened)) = pending.pop() {
            let pad = " ".repeat(indent * level);
            if opened {
                let _ = writeln!(out, "{pad}}}");
                continue;
            }
            let node = self.node(id);
            let _ = writeln!(out, "{pad}{node} {{");
            pending.push((id, level, true));
            pending.extend(node.children().iter().rev().map(|&child| (child, level + 1, false)));
        }
        out
    }
}

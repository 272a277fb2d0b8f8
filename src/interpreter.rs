/// The evaluator module computes the value of a finished syntax tree.
///
/// The evaluator walks the tree, looks variables and functions up in the
/// environment, and applies operators with IEEE double semantics. It never
/// mutates the environment.
///
/// # Responsibilities
/// - Evaluates every node kind, children left to right.
/// - Defines the environment contract and the default `Context` store.
/// - Reports missing names, argument count mismatches and malformed nodes.
pub mod evaluator;
/// The lexer module tokenizes source text for the tree builder.
///
/// The lexer reads the raw source one character at a time and produces a
/// stream of tokens: numbers, identifiers, operators, parentheses and commas,
/// each tagged with its character span.
///
/// # Responsibilities
/// - Runs the character-class state machine that splits the source into runs.
/// - Matches operator runs exactly against the operator table.
/// - Reports lexical errors for invalid characters and malformed literals.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser attaches each token to a stack of open nodes in a single pass,
/// resolving operator precedence by walking up the stack instead of by
/// recursive descent.
///
/// # Responsibilities
/// - Converts tokens into a tree of groups, calls, operators and leaves.
/// - Tracks which nodes are completed and which still expect children.
/// - Reports structural errors with the offending token or node.
pub mod parser;

/// Core tree-building logic.
///
/// Holds the `TreeBuilder`, the public `build` and `try_build` entry points,
/// and the end-of-input unwinding that checks every open node was completed.
pub mod core;
/// Operator tokens.
///
/// Attaches prefix and infix operators to the tree, resolving precedence by
/// walking up the stack of open nodes.
pub mod operator;
/// Parentheses and commas.
///
/// Opens groups and calls, closes them, and moves between call arguments.
pub mod group;
/// Stack helpers shared by the token handlers.
pub mod utils;

pub use self::core::{ParseResult, build, try_build};

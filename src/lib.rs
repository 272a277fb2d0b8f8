//! # exprcalc
//!
//! exprcalc evaluates arithmetic and boolean expressions such as
//! `log10(a) * b == 0` against an environment of variables and functions,
//! producing an `f64`.
//!
//! Source text flows through three stages: the lexer turns it into tokens, the
//! tree builder assembles the tokens into a syntax tree in a single pass, and
//! the tree is evaluated against an [`Env`](interpreter::evaluator::context::Env).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Tree,
    error::Error,
    interpreter::{evaluator::context::Env, lexer::Lexer, parser::try_build},
};

/// Defines the syntax tree and the operator table.
///
/// This module declares the `Tree` arena, its `Node`s and their kinds, the
/// `Slice` spans every token and node carries, and the `Operator` table with
/// symbols and precedence ranks.
///
/// # Responsibilities
/// - Defines the node variants and their completion state machine.
/// - Owns the arena so nodes are addressed by stable handles.
/// - Renders trees for debugging.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum carrying the offending source span; the
/// top-level `Error` wraps all three.
pub mod error;
/// Orchestrates the lexer, the tree builder and the evaluator.
pub mod interpreter;

/// Tokenizes `source`.
///
/// The returned lexer is lazy and forward-only; it yields each token as soon
/// as the run that forms it ends.
#[must_use]
pub fn tokenize(source: &str) -> Lexer {
    Lexer::new(source)
}

/// Parses `source` into a syntax tree.
///
/// The lexer feeds the tree builder directly, so the first error in source
/// order wins, whichever phase raises it.
///
/// # Examples
/// ```
/// let tree = exprcalc::parse("(a+b)**2").unwrap();
/// assert_eq!(tree, exprcalc::parse("(a+b)**2").unwrap());
///
/// assert!(exprcalc::parse("a+b+()").is_err());
/// ```
pub fn parse(source: &str) -> Result<Tree, Error> {
    try_build(tokenize(source).map(|token| token.map_err(Error::from)))
}

/// Parses `source` and evaluates it against `env`.
///
/// # Examples
/// ```
/// use exprcalc::interpreter::evaluator::context::Context;
///
/// let mut env = Context::with_builtins();
/// env.set_var("a", 1.0).set_var("b", 2.0);
///
/// assert_eq!(exprcalc::evaluate("a+b == b+a", &env).unwrap(), 1.0);
/// assert_eq!(exprcalc::evaluate("log10(100)", &env).unwrap(), 2.0);
///
/// // 'c' is not defined
/// assert!(exprcalc::evaluate("c + 1", &env).is_err());
/// ```
pub fn evaluate<E: Env + ?Sized>(source: &str, env: &E) -> Result<f64, Error> {
    Ok(parse(source)?.eval(env)?)
}

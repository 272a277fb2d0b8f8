/// Core evaluation logic.
///
/// Contains the evaluation entry point on [`crate::ast::Tree`], the dispatch on
/// node kinds, and the handling of leaves and groups.
pub mod core;

/// Prefix and postfix operator evaluation.
///
/// Handles logical not, the only operator that takes a single operand.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements arithmetic, logical and comparison operators on `f64` operands.
pub mod binary;

/// Function calls.
///
/// Defines the callable function interface, argument checking, and the table
/// of builtin math functions.
pub mod function;

/// The evaluation environment.
///
/// Defines the `Env` contract the evaluator reads variables and functions
/// from, and `Context`, the default map-backed store.
pub mod context;

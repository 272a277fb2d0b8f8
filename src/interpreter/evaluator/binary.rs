/// Dispatch of infix operators.
///
/// Evaluates both operands left to right and routes the operator to its
/// family.
pub mod core;
/// Arithmetic operators: `**`, `*`, `/`, `+`, `-` and `%`.
pub mod scalar;
/// Logical operators: `&&` and `||`.
pub mod logic;
/// Comparison operators: `<`, `<=`, `>`, `>=`, `==` and `!=`.
pub mod comparison;

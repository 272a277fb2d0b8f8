/// Function call evaluation and the callable function interface.
pub mod core;
/// Builtin function implementations.
///
/// Contains the table of math functions that [`super::context::Context`] can
/// install, and the single-argument functions backed by `f64` methods.
pub mod builtin;
/// Logarithm to an arbitrary base.
pub mod log;
/// `min` and `max` function implementations.
pub mod min_max;
/// The `clamp` function implementation.
///
/// Restricts a value to a specified inclusive range.
pub mod clamp;

pub use self::core::{Function, NativeFunction};

use std::fmt;

use crate::{
    ast::{Node, Tree},
    error::EvalError,
    interpreter::evaluator::{context::Env, core::EvalResult},
};

/// A function that expressions can call.
///
/// Functions take a fixed number of `f64` parameters. The evaluator checks the
/// argument count before calling, so `call` always receives exactly
/// `param_count()` values.
pub trait Function {
    /// The name the function is called by.
    fn name(&self) -> &str;

    /// The exact number of parameters.
    fn param_count(&self) -> usize;

    /// Applies the function to evaluated arguments.
    fn call(&self, params: &[f64]) -> f64;
}

/// A [`Function`] backed by a Rust closure.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::{Function, NativeFunction};
///
/// let hypot = NativeFunction::new("hypot", 2, |p| p[0].hypot(p[1]));
///
/// assert_eq!(hypot.name(), "hypot");
/// assert_eq!(hypot.param_count(), 2);
/// assert_eq!(hypot.call(&[3.0, 4.0]), 5.0);
/// ```
pub struct NativeFunction {
    name:        String,
    param_count: usize,
    func:        Box<dyn Fn(&[f64]) -> f64 + Send + Sync>,
}

impl NativeFunction {
    /// Wraps `func` as a function called `name` taking `param_count`
    /// parameters.
    pub fn new(name: impl Into<String>,
               param_count: usize,
               func: impl Fn(&[f64]) -> f64 + Send + Sync + 'static)
               -> Self {
        Self { name: name.into(),
               param_count,
               func: Box::new(func) }
    }
}

impl Function for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn param_count(&self) -> usize {
        self.param_count
    }

    fn call(&self, params: &[f64]) -> f64 {
        (self.func)(params)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("param_count", &self.param_count)
         .finish_non_exhaustive()
    }
}

impl Tree {
    /// Resolves the function a call node invokes.
    ///
    /// The function is looked up by name and its parameter count must match
    /// the number of arguments exactly. Both checks happen before any argument
    /// is evaluated.
    pub(crate) fn resolve_call<'e, E: Env + ?Sized>(name: &str,
                                                    node: &Node,
                                                    env: &'e E)
                                                    -> EvalResult<&'e dyn Function> {
        let function = env.find_fn(name).ok_or_else(|| {
                                            EvalError::UnknownFunction { name:  name.to_string(),
                                                                         slice: node.slice(), }
                                        })?;

        let expected = function.param_count();
        let found = node.children().len();
        if expected != found {
            return Err(EvalError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected,
                                                          found,
                                                          slice: node.slice() });
        }
        Ok(function)
    }
}

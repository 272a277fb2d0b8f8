use std::{collections::HashMap, fmt};

use crate::interpreter::evaluator::function::{Function, builtin::builtins};

/// The environment an expression is evaluated against.
///
/// The evaluator only ever reads from it. Implementations that are mutated
/// while trees are being evaluated elsewhere must synchronize on their own.
pub trait Env {
    /// Returns `true` if a variable called `name` is defined.
    fn has_var(&self, name: &str) -> bool {
        self.get_var(name).is_some()
    }

    /// The value of the variable called `name`, if defined.
    fn get_var(&self, name: &str) -> Option<f64>;

    /// The function called `name`, if installed.
    fn find_fn(&self, name: &str) -> Option<&dyn Function>;
}

/// A plain map of variables is an environment without functions.
impl<S: std::hash::BuildHasher> Env for HashMap<String, f64, S> {
    fn get_var(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }

    fn find_fn(&self, _name: &str) -> Option<&dyn Function> {
        None
    }
}

/// A function stored in a [`Context`].
pub type BoxedFunction = Box<dyn Function + Send + Sync>;

/// Stores variables and functions for evaluation.
///
/// ## Usage
///
/// `Context` is created once, filled through the chainable `set_var` and
/// `install_fn`, and then passed by reference to any number of evaluations.
///
/// ```
/// use exprcalc::interpreter::evaluator::{
///     context::{Context, Env},
///     function::NativeFunction,
/// };
///
/// let mut context = Context::new();
/// context.set_var("a", 1.0)
///        .set_var("b", 2.0)
///        .install_fn(NativeFunction::new("double", 1, |p| p[0] * 2.0));
///
/// assert!(context.has_var("a"));
/// assert_eq!(exprcalc::evaluate("double(a + b)", &context).unwrap(), 6.0);
/// ```
#[derive(Default)]
pub struct Context {
    variables: HashMap<String, f64>,
    functions: HashMap<String, BoxedFunction>,
}

impl Context {
    /// Creates an empty context with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with every builtin math function installed.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut context = Self::new();
        for function in builtins() {
            context.install_fn(function);
        }
        context
    }

    /// Defines or overwrites a variable.
    pub fn set_var(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Removes a variable, returning its value if it was defined.
    pub fn remove_var(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Installs a function under its own name, replacing any function
    /// installed under the same name.
    pub fn install_fn<F>(&mut self, function: F) -> &mut Self
        where F: Function + Send + Sync + 'static
    {
        self.functions.insert(function.name().to_string(), Box::new(function));
        self
    }

    /// Removes the function called `name`, returning it if it was installed.
    pub fn uninstall_fn(&mut self, name: &str) -> Option<BoxedFunction> {
        self.functions.remove(name)
    }
}

impl Env for Context {
    fn get_var(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    fn find_fn(&self, name: &str) -> Option<&dyn Function> {
        self.functions.get(name).map(|f| &**f as &dyn Function)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("Context")
         .field("variables", &self.variables)
         .field("functions", &functions)
         .finish()
    }
}

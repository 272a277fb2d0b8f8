use crate::interpreter::evaluator::function::{NativeFunction, clamp, log, min_max};

/// Type alias for builtin function handlers.
///
/// A builtin receives exactly as many arguments as its table entry declares.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of parameters,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

/// Applies a single-argument `f64` method.
///
/// Returns NaN when called with anything other than exactly one argument.
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                match args {
                    [x] => x.$real_fn(),
                    _ => f64::NAN,
                }
            }
        )*
    };
}

real_builtin! {
    ln => ln,
    log2 => log2,
    log10 => log10,
    exp => exp,
    sqrt => sqrt,
    abs => abs,
    floor => floor,
    ceil => ceil,
    round => round,
    trunc => trunc,
    sin => sin,
    cos => cos,
    tan => tan,
}

builtin_functions! {
    "ln"    => { arity: 1, func: ln },
    "log2"  => { arity: 1, func: log2 },
    "log10" => { arity: 1, func: log10 },
    "log"   => { arity: 2, func: log::log },
    "exp"   => { arity: 1, func: exp },
    "sqrt"  => { arity: 1, func: sqrt },
    "abs"   => { arity: 1, func: abs },
    "sign"  => { arity: 1, func: sign },
    "floor" => { arity: 1, func: floor },
    "ceil"  => { arity: 1, func: ceil },
    "round" => { arity: 1, func: round },
    "trunc" => { arity: 1, func: trunc },
    "sin"   => { arity: 1, func: sin },
    "cos"   => { arity: 1, func: cos },
    "tan"   => { arity: 1, func: tan },
    "min"   => { arity: 2, func: |args| min_max::min_max("min", args) },
    "max"   => { arity: 2, func: |args| min_max::min_max("max", args) },
    "clamp" => { arity: 3, func: clamp::clamp },
}

/// The sign of a value: `-1.0`, `0.0` or `1.0`.
///
/// Unlike `f64::signum`, zero maps to zero. NaN stays NaN.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::builtin::sign;
///
/// assert_eq!(sign(&[-42.0]), -1.0);
/// assert_eq!(sign(&[0.0]), 0.0);
/// assert_eq!(sign(&[11.0]), 1.0);
/// ```
#[must_use]
pub fn sign(args: &[f64]) -> f64 {
    match args {
        [x] if *x == 0.0 => 0.0,
        [x] => x.signum(),
        _ => f64::NAN,
    }
}

/// Returns every builtin as a [`NativeFunction`], ready to be installed.
pub fn builtins() -> impl Iterator<Item = NativeFunction> {
    BUILTIN_TABLE.iter()
                 .map(|def| NativeFunction::new(def.name, def.arity, def.func))
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::interpreter::evaluator::function::Function;

    fn call(name: &str, args: &[f64]) -> f64 {
        let function = builtins().find(|f| f.name() == name)
                                 .unwrap_or_else(|| panic!("no builtin {name}"));
        assert_eq!(function.param_count(), args.len(), "{name}");
        function.call(args)
    }

    #[test]
    fn table_and_name_list_agree() {
        let names: Vec<String> = builtins().map(|f| f.name().to_string()).collect();
        assert_eq!(names, BUILTIN_FUNCTIONS);
    }

    #[test]
    fn logarithms() {
        assert!(approx_eq!(f64, call("log10", &[100.0]), 2.0, ulps = 2));
        assert!(approx_eq!(f64, call("log2", &[8.0]), 3.0, ulps = 2));
        assert!(approx_eq!(f64, call("ln", &[std::f64::consts::E]), 1.0, ulps = 2));
        assert!(approx_eq!(f64, call("log", &[81.0, 3.0]), 4.0, epsilon = 1e-12));
    }

    #[test]
    fn trigonometry() {
        assert!(approx_eq!(f64, call("sin", &[std::f64::consts::FRAC_PI_2]), 1.0, ulps = 2));
        assert!(approx_eq!(f64, call("cos", &[0.0]), 1.0, ulps = 2));
        assert!(approx_eq!(f64, call("tan", &[std::f64::consts::FRAC_PI_4]), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn rounding() {
        assert_eq!(call("round", &[3.7]), 4.0);
        assert_eq!(call("floor", &[-1.5]), -2.0);
        assert_eq!(call("ceil", &[-1.5]), -1.0);
        assert_eq!(call("trunc", &[-1.5]), -1.0);
        assert_eq!(call("abs", &[-5.0]), 5.0);
        assert_eq!(call("sqrt", &[9.0]), 3.0);
    }

    #[test]
    fn wrong_argument_count_yields_nan() {
        assert!(sqrt(&[]).is_nan());
        assert!(sign(&[1.0, 2.0]).is_nan());
    }
}

use std::fs;

use exprcalc::{
    ast::Slice,
    error::{Error, EvalError, LexError, ParseError},
    evaluate,
    interpreter::evaluator::{context::Context, function::NativeFunction},
    parse,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                match evaluate(line, &book_env()) {
                    Ok(value) if value != 0.0 => {},
                    outcome => panic!("Example {} in {:?} does not hold:\n{}\nResult: {:?}",
                                      i + 1,
                                      path,
                                      line,
                                      outcome),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// The environment the book examples are written against.
fn book_env() -> Context {
    let mut env = Context::with_builtins();
    env.set_var("a", 1.0).set_var("b", 2.0).set_var("pi", std::f64::consts::PI);
    env
}

fn sample_env() -> Context {
    let mut env = Context::new();
    env.set_var("a", 1.0)
       .set_var("b", 2.0)
       .install_fn(NativeFunction::new("log10", 1, |p| p[0].log10()));
    env
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src, &sample_env()) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("7 / 2", 3.5);
    assert_value("1.1 * 100 == 110", 0.0);
    assert_value("10 % 3 == 1", 1.0);
}

#[test]
fn equal_precedence_chains_left_to_right() {
    assert_value("8/4/2", 1.0);
    assert_value("2*6/3", 4.0);
}

#[test]
fn exponentiation_is_left_associative() {
    // (2**3)**2, not 2**(3**2) = 512
    assert_value("2**3**2", 64.0);
    assert_value("2**3*2", 16.0);
}

#[test]
fn comparisons_with_variables() {
    assert_value("a+b == b+a", 1.0);
    assert_value("a+b >= b+a", 1.0);
    assert_value("a+b > b+a", 0.0);
    assert_value("(a+b)**2==9", 1.0);
    assert_value("(a+b)**2 == 9", 1.0);
    assert_value("a/b == 0.5", 1.0);
    assert_value("a%b==1", 1.0);
    assert_value("a != b", 1.0);
    assert_value("(a <= b) && (b < 3)", 1.0);
}

#[test]
fn functions_from_the_environment() {
    assert_value("log10(100)==2", 1.0);
    assert_value("log10(100) == 2", 1.0);
    assert_value("log10(a)*b==0", 1.0);
    assert_value("log10(a) * b  == 0", 1.0);
    assert_value("log10(log10(1))", f64::NEG_INFINITY);
}

#[test]
fn logic_and_negation() {
    assert_value("!0", 1.0);
    assert_value("!a", 0.0);
    assert_value("!!b", 1.0);
    assert_value("a && 0", 0.0);
    assert_value("0 || b", 1.0);
    assert_value("(a < b) || (b < a) && 0", 1.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_value("a / 0", f64::INFINITY);
    let nan = evaluate("0 / 0", &sample_env()).unwrap();
    assert!(nan.is_nan());
}

#[test]
fn arity_mismatch_is_an_evaluation_error() {
    for src in ["log10()", "log10(1, 2)", "log10(1, 2, 3)"] {
        assert!(matches!(evaluate(src, &sample_env()),
                         Err(Error::Eval(EvalError::ArgumentCountMismatch { expected: 1, .. }))),
                "{src}");
    }
}

#[test]
fn missing_names_are_evaluation_errors() {
    assert!(matches!(evaluate("c + 1", &sample_env()),
                     Err(Error::Eval(EvalError::UnknownVariable { .. }))));
    assert!(matches!(evaluate("sqrt(4)", &sample_env()),
                     Err(Error::Eval(EvalError::UnknownFunction { .. }))));
}

#[test]
fn structural_errors_are_parse_errors() {
    for src in ["()", "a+b+()", "a+b(", "a,b", "log(a,,)", "(log(a+b)"] {
        assert!(matches!(parse(src), Err(Error::Parse(_))), "{src}");
    }
    assert!(matches!(parse("(log(a+b)"), Err(Error::Parse(ParseError::Incomplete { .. }))));
}

#[test]
fn lexical_errors_are_lex_errors() {
    for src in ["100_", ">>>", "2.2.2", ".2"] {
        assert!(matches!(parse(src), Err(Error::Lex(_))), "{src}");
    }
    assert!(matches!(parse(">>>"), Err(Error::Lex(LexError::UnknownOperator { .. }))));
}

#[test]
fn first_error_in_source_order_wins() {
    // the comma fails the build before the lexer reaches `$`
    assert!(matches!(parse("a,b $"), Err(Error::Parse(_))));
    assert!(matches!(parse("$ a,b"), Err(Error::Lex(_))));
}

#[test]
fn parsing_is_idempotent() {
    for src in ["a**2 + 2*a*B + B**2 == (a+B)**2", "log(aa+bb)*cc+(dd)", "!x || f(1, g(2))"] {
        assert_eq!(parse(src).unwrap(), parse(src).unwrap(), "{src}");
    }
}

#[test]
fn trees_are_shared_across_threads() {
    let tree = parse("log10(a * 100) + b").unwrap();
    let env = sample_env();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| tree.eval(&env))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(4.0));
        }
    });
}

#[test]
fn deep_nesting_evaluates() {
    const DEPTH: usize = 50_000;
    let mut env = sample_env();
    env.install_fn(NativeFunction::new("id", 1, |p| p[0]));

    let groups = format!("{}a{}", "(".repeat(DEPTH), ")".repeat(DEPTH));
    assert_eq!(evaluate(&groups, &env), Ok(1.0));

    let calls = format!("{}b{}", "id(".repeat(DEPTH), ")".repeat(DEPTH));
    assert_eq!(evaluate(&calls, &env), Ok(2.0));

    let nots = format!("{}b", "! ".repeat(DEPTH));
    assert_eq!(evaluate(&nots, &env), Ok(1.0));

    let sums = format!("{}a{}", "(a + ".repeat(DEPTH), ")".repeat(DEPTH));
    assert_eq!(evaluate(&sums, &env), Ok(50_001.0));

    let tree = parse(&groups).unwrap();
    assert_eq!(tree.dump(0).lines().count(), 2 * tree.len());
}

#[test]
fn errors_point_at_the_offending_span() {
    let span = |src: &str| evaluate(src, &sample_env()).unwrap_err().slice();

    assert_eq!(span("a + $"), Slice::point(4));
    assert_eq!(span("1 + >>> 2"), Slice::new(4, 6));
    assert_eq!(span("a,b"), Slice::point(1));
    assert_eq!(span("(log10(a+b)"), Slice::point(0));
    assert_eq!(span("a + c"), Slice::point(4));
    assert_eq!(span("b * log10(1, 2)"), Slice::new(4, 8));
    assert!(span("").is_sentinel());
}

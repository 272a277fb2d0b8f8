use std::{borrow::Cow, fs, process::ExitCode};

use clap::{ArgAction, Parser};
use exprcalc::{ast::Slice, error::Error, interpreter::evaluator::context::Context};
use log::{LevelFilter, Log, Metadata, Record, debug};

/// exprcalc evaluates arithmetic and boolean expressions.
///
/// Comparisons and logical operators yield `1` for true and `0` for false.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprcalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Defines a variable, e.g. `-D a=1.5`. May be repeated.
    #[arg(short = 'D', long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Leaves out the builtin math functions such as `sqrt` and `log10`.
    #[arg(long)]
    no_builtins: bool,

    /// Prints the syntax tree instead of evaluating it.
    #[arg(short, long)]
    tree: bool,

    /// Logs lexer and parser activity to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// Parses a `NAME=VALUE` variable binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) =
        binding.split_once('=')
               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Selects the expressions to evaluate from `source`.
///
/// A plain argument is one expression. A file holds one per line, where
/// blank lines and lines starting with `#` are skipped.
fn expressions(source: &str, file: bool) -> Vec<&str> {
    if file {
        source.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .collect()
    } else {
        vec![source]
    }
}

/// Evaluates `expression`, or renders its tree when `tree` is set.
fn render(expression: &str, tree: bool, context: &Context) -> Result<String, Error> {
    let parsed = exprcalc::parse(expression)?;
    if tree { Ok(parsed.dump(2)) } else { Ok(format!("{}\n", parsed.eval(context)?)) }
}

/// Marks the characters `slice` covers in a line of its own.
///
/// Returns `None` for the root's sentinel slice, which covers no characters.
fn underline(slice: Slice) -> Option<String> {
    if slice.is_sentinel() {
        return None;
    }
    Some(format!("{}{}", " ".repeat(slice.start()), "^".repeat(slice.len())))
}

/// Evaluates every expression in the input, returning the number that failed.
fn run(args: &Args) -> usize {
    let mut context = if args.no_builtins { Context::new() } else { Context::with_builtins() };
    for (name, value) in &args.vars {
        context.set_var(name.as_str(), *value);
    }
    debug!("{context:?}");

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => Cow::Owned(source),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return 1;
            },
        }
    } else {
        Cow::Borrowed(args.contents.as_str())
    };

    let mut failures = 0;
    for expression in expressions(&source, args.file) {
        debug!("evaluating {expression:?}");
        match render(expression, args.tree, &context) {
            Ok(output) => print!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                if let Some(marks) = underline(e.slice()) {
                    eprintln!("{expression}\n{marks}");
                }
                failures += 1;
            },
        }
    }
    failures
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if run(&args) == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use infix::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate, lexer::tokenize, parser::core::parse, printer::render_tree,
    },
};
use log::info;

/// infix evaluates integer arithmetic expressions with `+`, `-`, `*`, `/`,
/// unary minus and parentheses.
///
/// Without an expression, an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the argument as a file whose lines are evaluated one by one.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the syntax tree of each expression before its value.
    #[arg(short, long)]
    tree: bool,

    /// The expression to evaluate, or a path when `--file` is given.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match args.contents {
        Some(path) if args.file => {
            let script = match fs::read_to_string(&path) {
                Ok(script) => script,
                Err(e) => {
                    eprintln!("Failed to read the input file '{path}': {e}");
                    return ExitCode::FAILURE;
                },
            };
            run_script(&script, args.tree)
        },
        Some(expression) => {
            if report(&expression, args.tree) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => repl(args.tree),
    }
}

/// Evaluates every non-blank line of `script`; fails if any line failed.
fn run_script(script: &str, tree: bool) -> ExitCode {
    let mut failed = 0usize;
    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !report(line, tree) {
            eprintln!("  (line {})", number + 1);
            failed += 1;
        }
    }
    info!("script finished with {failed} failed line(s)");

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn repl(tree: bool) -> ExitCode {
    println!("Welcome to the infix repl");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {e}");
                return ExitCode::FAILURE;
            },
            None => return ExitCode::SUCCESS,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            println!("Bye :)");
            return ExitCode::SUCCESS;
        }
        report(line, tree);
    }
}

/// Evaluates one expression and prints its value or its error.
///
/// Returns `true` on success.
fn report(source: &str, tree: bool) -> bool {
    match evaluate_line(source, tree) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{} error: {e}", e.stage());
            false
        },
    }
}

fn evaluate_line(source: &str, tree: bool) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    if tree {
        print!("{}", render_tree(&expr));
    }
    Ok(evaluate(&expr)?)
}

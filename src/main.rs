use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use log::debug;
use rpncalc::{
    Error,
    interpreter::{converter::convert, evaluator},
};

/// rpncalc evaluates integer arithmetic with single-digit operands, such as
/// `(2 + 3) * 4`, by converting it to postfix form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions from a file, one per line, instead of
    /// evaluating a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the postfix form of each expression before its value.
    #[arg(short, long)]
    postfix: bool,

    /// The expression to evaluate, or a path when `--file` is set. When
    /// omitted, one line is read from standard input.
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::builder().format_timestamp(None).init();
    let args = Args::parse();

    let expressions = match read_expressions(&args) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut status = ExitCode::SUCCESS;
    for expression in &expressions {
        if let Err(e) = run(expression, args.postfix) {
            eprintln!("{e}");
            status = ExitCode::FAILURE;
        }
    }
    status
}

/// Collects the expressions to evaluate from the command line, a file or
/// standard input.
fn read_expressions(args: &Args) -> io::Result<Vec<String>> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            debug!("reading expressions from {path}");
            Ok(fs::read_to_string(path)?.lines()
                                        .filter(|line| !line.trim().is_empty())
                                        .map(str::to_string)
                                        .collect())
        },
        (Some(expression), false) => Ok(vec![expression.clone()]),
        (None, _) => {
            let mut stdout = io::stdout();
            writeln!(stdout, "Expression to Evaluate: ")?;
            stdout.flush()?;

            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            Ok(vec![line.trim_end_matches(['\r', '\n']).to_string()])
        },
    }
}

/// Evaluates one expression and prints its value.
fn run(expression: &str, show_postfix: bool) -> Result<(), Error> {
    debug!("evaluating {expression:?}");

    let postfix = convert(expression)?;
    debug!("postfix form {:?}", postfix.to_string());
    if show_postfix {
        println!("{postfix}");
    }

    let value = evaluator::evaluate(&postfix)?;
    debug!("{expression:?} = {value}");
    println!("{value}");
    Ok(())
}

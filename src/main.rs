use std::process::ExitCode;

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use virgule::{compile, error::Error, interpreter::{evaluator::core::Evaluator, symbols::Symbols}};

/// virgule evaluates arithmetic expressions written with comma decimals, such
/// as `1,5 * (2 - pi)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompt shown before each line in interactive mode.
    #[arg(long, default_value = "#> ")]
    prompt: String,

    /// Print the postfix program before each result.
    #[arg(long)]
    rpn: bool,

    /// Evaluate this expression once and exit instead of starting the prompt.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the level, warn when unset.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();

    if let Some(expression) = &args.expression {
        // No prompt is printed, so the caret lines up with the input itself.
        return if run_line(expression, args.rpn, 0) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match repl(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads lines until end of input, evaluating each one.
///
/// Every error is reported and the next line is read; nothing is retried.
fn repl(args: &Args) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    let prompt_width = args.prompt.chars().count();

    loop {
        match editor.readline(&args.prompt) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    warn!("could not record history entry: {e}");
                }
                run_line(&line, args.rpn, prompt_width);
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                println!();
                return Ok(());
            },
            Err(e) => return Err(e),
        }
    }
}

/// Evaluates one line and prints the result or the rendered error.
///
/// Returns `true` if the line evaluated successfully.
fn run_line(line: &str, show_rpn: bool, prompt_width: usize) -> bool {
    let outcome = compile(line, Symbols::STANDARD).map_err(Error::from).and_then(|program| {
        if show_rpn {
            println!(" [{program}]");
        }
        Evaluator::new().reduce(&program).map_err(Error::from)
    });

    match outcome {
        Ok(result) => {
            println!(" {result}");
            true
        },
        Err(e) => {
            println!("{}", e.render(prompt_width));
            false
        },
    }
}

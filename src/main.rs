use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use truthline::{
    config::{Options, Variant},
    session::{SessionOutcome, run, run_once},
};

/// truthline evaluates boolean logic formulas such as
/// `true and ( false or not true )`, one per line, until `quit` or `q`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Keyword set and output format. The extended variant adds `xor`,
    /// `implies`, `equals` and `notequals` and prints a truth table.
    #[arg(short, long, value_enum, default_value_t = Variant::Minimal)]
    variant: Variant,

    /// Print results without ANSI color codes.
    #[arg(long)]
    no_color: bool,

    /// Stop at the first formula that fails to evaluate.
    #[arg(short, long)]
    strict: bool,

    /// Print a prompt before reading each formula.
    #[arg(short, long)]
    prompt: bool,

    /// Evaluate this formula and exit instead of reading standard input.
    #[arg(short, long)]
    expression: Option<String>,
}

impl Args {
    const fn options(&self) -> Options {
        Options { variant: self.variant,
                  color:   !self.no_color,
                  strict:  self.strict,
                  prompt:  self.prompt, }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let options = args.options();

    if let Some(formula) = &args.expression {
        return match run_once(formula, &mut io::stdout().lock(), &mut io::stderr().lock(), &options) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("Failed to write the result: {e}");
                ExitCode::FAILURE
            },
        };
    }

    match run(io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr().lock(), &options) {
        Ok(SessionOutcome::EndOfInput | SessionOutcome::Quit) => ExitCode::SUCCESS,
        Ok(SessionOutcome::Aborted(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Failed to read from the terminal: {e}");
            ExitCode::FAILURE
        },
    }
}

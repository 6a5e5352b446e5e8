use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{config::Options, display::render, error::EvalResult, evaluate_formula};

/// Printed when the user leaves the session with `quit` or `q`.
pub const EXIT_MESSAGE: &str = "Exited Boolean Expression Evaluator";
/// Printed before every read when prompting is enabled.
pub const PROMPT: &str = "> ";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The input ran out.
    EndOfInput,
    /// The user typed `quit` or `q`.
    Quit,
    /// A formula failed while the session was strict.
    Aborted(crate::error::Error),
}

/// Returns whether the line is one of the exit commands.
///
/// The commands are case-sensitive and must make up the whole line.
#[must_use]
pub fn is_quit_command(line: &str) -> bool {
    matches!(line, "quit" | "q")
}

/// Evaluates one line and renders its output according to the options.
///
/// # Example
/// ```
/// use truthline::{config::Options, session::evaluate_line};
///
/// let options = Options { color: false, ..Options::default() };
/// assert_eq!(evaluate_line("true and ( false or true )", &options).unwrap(), "Result: TRUE");
/// ```
pub fn evaluate_line(line: &str, options: &Options) -> EvalResult<String> {
    let value = evaluate_formula(line, options.variant)?;
    debug!(line, value, "evaluated line");
    Ok(render(line, value, options))
}

/// Reads one line, replacing invalid UTF-8 with `U+FFFD`.
///
/// The trailing `\n` or `\r\n` is removed. Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R, buffer: &mut Vec<u8>) -> io::Result<Option<String>> {
    buffer.clear();
    if input.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buffer).into_owned()))
}

/// Evaluates a single formula, as given on the command line.
///
/// The rendering goes to `output` and a failure to `errors` as
/// `Error: <message>`. Returns whether the formula evaluated.
///
/// # Errors
/// Returns an error only when writing fails.
///
/// # Example
/// ```
/// use truthline::{config::Options, session::run_once};
///
/// let options = Options { color: false, ..Options::default() };
/// let (mut output, mut errors) = (Vec::new(), Vec::new());
/// assert!(run_once("not false", &mut output, &mut errors, &options).unwrap());
/// assert_eq!(output, b"Result: TRUE\n");
/// ```
pub fn run_once<W, E>(formula: &str,
                      output: &mut W,
                      errors: &mut E,
                      options: &Options)
                      -> io::Result<bool>
    where W: Write,
          E: Write
{
    match evaluate_line(formula, options) {
        Ok(rendered) => {
            writeln!(output, "{rendered}")?;
            Ok(true)
        },
        Err(e) => {
            writeln!(errors, "Error: {e}")?;
            Ok(false)
        },
    }
}

/// Runs the read-evaluate-print loop.
///
/// Each line of `input` is evaluated on its own and its rendering written to
/// `output`. Failing lines are reported on `errors` as `Error: <message>`;
/// the loop then moves on to the next line, unless the options are strict.
/// Bytes that are not valid UTF-8 are replaced, so such a line reads as an
/// unknown word rather than ending the session.
///
/// # Errors
/// Returns an error only when reading or writing fails.
pub fn run<R, W, E>(mut input: R,
                    output: &mut W,
                    errors: &mut E,
                    options: &Options)
                    -> io::Result<SessionOutcome>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut buffer = Vec::new();

    loop {
        if options.prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        let Some(line) = read_line(&mut input, &mut buffer)? else {
            return Ok(SessionOutcome::EndOfInput);
        };

        if is_quit_command(&line) {
            writeln!(output, "{EXIT_MESSAGE}")?;
            return Ok(SessionOutcome::Quit);
        }

        match evaluate_line(&line, options) {
            Ok(rendered) => writeln!(output, "{rendered}")?,
            Err(e) => {
                writeln!(errors, "Error: {e}")?;
                if options.strict {
                    return Ok(SessionOutcome::Aborted(e));
                }
                warn!(line = %line, error = %e, "skipping formula");
            },
        }
    }
}

use crate::config::{Options, Variant};

/// Keyword to symbol rewriting of formulas.
pub mod symbols;
/// Truth-table layout for the extended variant.
///
/// The table is as wide as the symbol-rewritten formula plus eight columns and
/// shows the formula above its colored result.
pub mod table;

/// ANSI prefix painting text green.
pub const GREEN: &str = "\u{001B}[0;32m";
/// ANSI prefix painting text red.
pub const RED: &str = "\u{001B}[0;31m";
/// ANSI suffix restoring the default color.
pub const RESET: &str = "\u{001B}[0;0m";

/// The uncolored label of a truth value.
#[must_use]
pub const fn label(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

/// Returns `TRUE` in green or `FALSE` in red.
///
/// Without color the plain label is returned.
#[must_use]
pub fn paint(value: bool, color: bool) -> String {
    match (color, value) {
        (false, _) => label(value).to_owned(),
        (true, true) => format!("{GREEN}{}{RESET}", label(value)),
        (true, false) => format!("{RED}{}{RESET}", label(value)),
    }
}

/// Renders the one-line output of the minimal variant.
///
/// # Example
/// ```
/// use truthline::display::render_result_line;
///
/// assert_eq!(render_result_line(true, false), "Result: TRUE");
/// assert_eq!(render_result_line(false, true), "Result: \u{1b}[0;31mFALSE\u{1b}[0;0m");
/// ```
#[must_use]
pub fn render_result_line(value: bool, color: bool) -> String {
    format!("Result: {}", paint(value, color))
}

/// Renders the output for one evaluated formula according to the variant.
#[must_use]
pub fn render(formula: &str, value: bool, options: &Options) -> String {
    match options.variant {
        Variant::Minimal => render_result_line(value, options.color),
        Variant::Extended => table::render_table(formula, value, options.color),
    }
}

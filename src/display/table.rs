use crate::display::{label, paint, symbols::symbolize};

/// Columns added around the formula.
pub const PADDING: usize = 8;

/// Returns the inner width of the table drawn for a displayed formula.
#[must_use]
pub fn table_width(displayed: &str) -> usize {
    displayed.chars().count() + PADDING
}

/// Renders the bordered truth table of a formula and its value.
///
/// The formula is shown with its keywords rewritten into symbols. The table
/// has a border above, between and below the formula row and the result row.
///
/// # Example
/// ```
/// use truthline::display::table::render_table;
///
/// let table = render_table("true or false", true, false);
/// assert_eq!(table,
///            ["+-------------+",
///             "|    T ∨ F    |",
///             "+-------------+",
///             "|    TRUE     |",
///             "+-------------+"].join("\n"));
/// ```
#[must_use]
pub fn render_table(formula: &str, value: bool, color: bool) -> String {
    let displayed = symbolize(formula);
    let width = table_width(&displayed);
    let border = format!("+{}+", "-".repeat(width));

    [border.clone(),
     centered(&displayed, displayed.chars().count(), width),
     border.clone(),
     centered(&paint(value, color), label(value).len(), width),
     border].join("\n")
}

/// Centers `text` in a row of `width` columns.
///
/// `visible` is the number of columns the text occupies on screen, which
/// differs from its length when it carries color codes. Odd leftover space
/// goes to the right.
fn centered(text: &str, visible: usize, width: usize) -> String {
    let spare = width.saturating_sub(visible);
    let left = spare / 2;
    format!("|{}{text}{}|", " ".repeat(left), " ".repeat(spare - left))
}

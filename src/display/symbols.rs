/// Ordered rewrite rules from keyword to symbol.
///
/// Rules are tried from top to bottom and the first match wins, so longer
/// keywords come before the keywords they contain.
pub static SYMBOLS: &[(&str, &str)] = &[("implies", "→"),
                                        ("imply", "→"),
                                        ("notequals", "≠"),
                                        ("equals", "="),
                                        ("xor", "⊕"),
                                        ("and", "∧"),
                                        ("or", "∨"),
                                        ("not", "¬"),
                                        ("true", "T"),
                                        ("false", "F"),
                                        ("!=", "≠"),
                                        ("=", "=")];

/// Looks up the symbol of a single word, ignoring ASCII case.
#[must_use]
pub fn symbol_for(word: &str) -> Option<&'static str> {
    SYMBOLS.iter()
           .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
           .map(|&(_, symbol)| symbol)
}

/// Rewrites the keywords of a formula into logic symbols.
///
/// Only whole words are rewritten: a keyword must be bounded by a space or by
/// the ends of the text. Everything else, spacing included, is kept as is.
///
/// # Example
/// ```
/// use truthline::display::symbols::symbolize;
///
/// assert_eq!(symbolize("true and ( not false )"), "T ∧ ( ¬ F )");
/// assert_eq!(symbolize("true  implies nothing"), "T  → nothing");
/// ```
#[must_use]
pub fn symbolize(formula: &str) -> String {
    formula.split(' ')
           .map(|word| symbol_for(word).unwrap_or(word))
           .collect::<Vec<_>>()
           .join(" ")
}

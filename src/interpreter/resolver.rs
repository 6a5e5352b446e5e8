use std::cmp::Ordering;

use tracing::debug;

use crate::{
    config::Variant,
    error::{EvalResult, ParseError},
    interpreter::evaluator::evaluate,
};

/// Checks that every parenthesis of the formula has a partner.
///
/// A surplus of `(` reports the opening error and a surplus of `)` the
/// closing error. When the totals match but a `)` appears before any `(` it
/// could close, the closing error is reported as well.
///
/// # Errors
/// Returns `ParseError::UnmatchedOpeningParen` or
/// `ParseError::UnmatchedClosingParen`.
///
/// # Example
/// ```
/// use truthline::{error::ParseError, interpreter::resolver::check_balance};
///
/// assert!(check_balance("( true )").is_ok());
/// assert_eq!(check_balance("( true"), Err(ParseError::UnmatchedOpeningParen { count: 1 }));
/// assert_eq!(check_balance("true )"), Err(ParseError::UnmatchedClosingParen { count: 1 }));
/// assert_eq!(check_balance(") true ("), Err(ParseError::UnmatchedClosingParen { count: 1 }));
/// ```
pub fn check_balance(formula: &str) -> Result<(), ParseError> {
    let mut depth: isize = 0;
    let mut lowest: isize = 0;

    for character in formula.chars() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                lowest = lowest.min(depth);
            },
            _ => {},
        }
    }

    match depth.cmp(&0) {
        Ordering::Greater => Err(ParseError::UnmatchedOpeningParen { count: depth.unsigned_abs() }),
        Ordering::Less => Err(ParseError::UnmatchedClosingParen { count: depth.unsigned_abs() }),
        Ordering::Equal if lowest < 0 => {
            Err(ParseError::UnmatchedClosingParen { count: lowest.unsigned_abs() })
        },
        Ordering::Equal => Ok(()),
    }
}

/// Collapses every parenthesized group of a formula.
///
/// The last `(` and the first `)` after it always enclose an innermost group.
/// That group is evaluated on its own and the whole span, parentheses
/// included, is replaced by `true` or `false`. This repeats until no `(` is
/// left, so the returned text contains no parentheses.
///
/// A formula without parentheses is returned unchanged.
///
/// # Errors
/// Returns an error if the parentheses are unbalanced or if a group fails to
/// evaluate.
///
/// # Example
/// ```
/// use truthline::{config::Variant, interpreter::resolver::resolve_parentheses};
///
/// let flat = resolve_parentheses("not ( true and ( false or true ) )", Variant::Minimal);
/// assert_eq!(flat.unwrap(), "not true");
///
/// let untouched = resolve_parentheses("true  or false", Variant::Minimal);
/// assert_eq!(untouched.unwrap(), "true  or false");
/// ```
pub fn resolve_parentheses(formula: &str, variant: Variant) -> EvalResult<String> {
    check_balance(formula)?;

    let mut resolved = formula.to_owned();
    while let Some(open) = resolved.rfind('(') {
        let close = resolved[open..].find(')')
                                    .map(|offset| open + offset)
                                    .ok_or(ParseError::UnmatchedClosingParen { count: 1 })?;

        let value = evaluate(&resolved[open + 1..close], variant)?;
        debug!(group = &resolved[open..=close], value, "collapsed group");
        resolved.replace_range(open..=close, if value { "true" } else { "false" });
    }

    Ok(resolved)
}

use thiserror::Error;

/// Represents all errors that can occur while resolving parentheses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// At least one opening parenthesis `(` has no matching `)`.
    #[error("Mismatched parentheses: Found an opening parenthesis without a matching closing parenthesis ({count} unmatched).")]
    UnmatchedOpeningParen {
        /// How many openers are left without a partner.
        count: usize,
    },
    /// At least one closing parenthesis `)` has no matching `(` before it.
    #[error("Mismatched parentheses: Found a closing parenthesis without a matching opening parenthesis ({count} unmatched).")]
    UnmatchedClosingParen {
        /// How many closers are left without a partner.
        count: usize,
    },
}

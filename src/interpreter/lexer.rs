use logos::Logos;
use tracing::trace;

use crate::{config::Variant, interpreter::operator::OperatorKind};

/// The keywords a single word of a formula can spell.
///
/// Matching is case-insensitive. The lexer runs on one word at a time and a
/// word only counts as a keyword when the whole word is consumed by exactly
/// one token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    /// `true`
    #[token("true", ignore(case))]
    True,
    /// `false`
    #[token("false", ignore(case))]
    False,
    /// `not`
    #[token("not", ignore(case))]
    Not,
    /// `and`
    #[token("and", ignore(case))]
    And,
    /// `or`
    #[token("or", ignore(case))]
    Or,
    /// `xor`
    #[token("xor", ignore(case))]
    Xor,
    /// `implies`
    #[token("implies", ignore(case))]
    Implies,
    /// `equals`
    #[token("equals", ignore(case))]
    Equals,
    /// `notequals`
    #[token("notequals", ignore(case))]
    NotEquals,
}

impl Keyword {
    /// Returns the operator spelled by the keyword, if it is one.
    #[must_use]
    pub const fn operator(self) -> Option<OperatorKind> {
        match self {
            Self::True | Self::False => None,
            Self::Not => Some(OperatorKind::Not),
            Self::And => Some(OperatorKind::And),
            Self::Or => Some(OperatorKind::Or),
            Self::Xor => Some(OperatorKind::Xor),
            Self::Implies => Some(OperatorKind::Implies),
            Self::Equals => Some(OperatorKind::Equals),
            Self::NotEquals => Some(OperatorKind::NotEquals),
        }
    }
}

/// A classified word of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A boolean literal. Unknown words end up here as well.
    Literal(bool),
    /// An operator keyword of the active variant.
    Operator(OperatorKind),
}

/// Splits a formula on spaces and classifies every word.
///
/// Runs of spaces produce no tokens. Words that are not keywords of the active
/// variant become literals; they are `true` only when their lowercase form is
/// `"true"`.
///
/// # Example
/// ```
/// use truthline::{
///     config::Variant,
///     interpreter::{
///         lexer::{Token, tokenize},
///         operator::OperatorKind,
///     },
/// };
///
/// let tokens = tokenize("TRUE  And banana", Variant::Minimal);
/// assert_eq!(tokens,
///            vec![Token::Literal(true),
///                 Token::Operator(OperatorKind::And),
///                 Token::Literal(false)]);
///
/// // `xor` is not a keyword of the minimal variant.
/// assert_eq!(tokenize("xor", Variant::Minimal), vec![Token::Literal(false)]);
/// ```
#[must_use]
pub fn tokenize(formula: &str, variant: Variant) -> Vec<Token> {
    formula.split(' ')
           .filter(|word| !word.is_empty())
           .map(|word| classify(word, variant))
           .collect()
}

/// Classifies a single word.
fn classify(word: &str, variant: Variant) -> Token {
    let token = match whole_keyword(word) {
        Some(Keyword::True) => Token::Literal(true),
        Some(Keyword::False) => Token::Literal(false),
        Some(keyword) => match keyword.operator() {
            Some(operator) if variant.admits(operator) => Token::Operator(operator),
            _ => Token::Literal(false),
        },
        None => Token::Literal(word.to_lowercase() == "true"),
    };
    trace!(word, ?token, "classified word");
    token
}

/// Returns the keyword when it spans the whole word.
fn whole_keyword(word: &str) -> Option<Keyword> {
    let mut lexer = Keyword::lexer(word);
    match (lexer.next(), lexer.next()) {
        (Some(Ok(keyword)), None) => Some(keyword),
        _ => None,
    }
}

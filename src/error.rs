/// Parenthesis errors.
///
/// Defines the errors raised while checking and collapsing the parenthesized
/// groups of a formula, before any flat evaluation happens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while applying operators to the operand queue.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts the evaluation of a formula.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The parentheses of the formula could not be resolved.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An operator could not be applied.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type used by the interpreter.
///
/// All evaluation functions return either a value of type `T` or an `Error`
/// describing the failure.
pub type EvalResult<T> = Result<T, Error>;

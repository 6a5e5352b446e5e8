//! # truthline
//!
//! truthline is an interactive evaluator for boolean logic formulas written in
//! Rust. It reads formulas built from `true`/`false` literals, operator
//! keywords and parentheses, folds them to a single truth value and renders
//! the result either as a colored `Result:` line or as a small truth table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Variant,
    error::EvalResult,
    interpreter::{evaluator::evaluate, resolver::resolve_parentheses},
};

/// Runtime configuration shared by the library and the command line.
///
/// Holds the evaluator variant (which keyword set is active and which output
/// format is used) together with the presentation and error policy switches
/// of an interactive session.
pub mod config;
/// Presentation of evaluation results.
///
/// This module turns a boolean result and the original formula text into the
/// text shown to the user: the colored `Result:` line of the minimal variant
/// and the bordered truth table of the extended variant.
///
/// # Responsibilities
/// - Paints `TRUE`/`FALSE` with ANSI color codes.
/// - Rewrites operator keywords and literals into logic symbols.
/// - Computes the table layout.
pub mod display;
/// Provides unified error types for resolving and evaluating formulas.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parentheses, evaluation).
/// - Carries enough detail to tell the user which rule was violated.
pub mod error;
/// Orchestrates the evaluation of a single formula.
///
/// This module ties together tokenizing, parenthesis resolution and operator
/// application.
///
/// # Responsibilities
/// - Classifies the words of a formula into literals and operators.
/// - Collapses parenthesized groups innermost first.
/// - Folds the flat operand and operator queues into one boolean.
pub mod interpreter;
/// The interactive read loop.
///
/// Reads one formula per line, evaluates and renders it, and stops on end of
/// input or on the `quit`/`q` commands.
pub mod session;

/// Evaluates a complete formula, parentheses included.
///
/// Every parenthesized group is collapsed first, innermost to outermost, and
/// the remaining flat formula is folded to its truth value.
///
/// # Errors
/// Returns an error if the parentheses are unbalanced or if an operator runs
/// out of operands.
///
/// # Examples
/// ```
/// use truthline::{config::Variant, evaluate_formula};
///
/// let value = evaluate_formula("( true or false ) and true", Variant::Minimal);
/// assert_eq!(value.unwrap(), true);
///
/// // An opening parenthesis without a partner is rejected.
/// assert!(evaluate_formula("( true", Variant::Minimal).is_err());
/// ```
pub fn evaluate_formula(formula: &str, variant: Variant) -> EvalResult<bool> {
    let flat = resolve_parentheses(formula, variant)?;
    evaluate(&flat, variant)
}

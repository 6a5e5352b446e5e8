/// The evaluator module folds a flat formula into a single boolean.
///
/// Operators are consumed in the order they were written while binary
/// operators take their operands from the back of the operand queue. There is
/// no precedence between operators.
///
/// # Responsibilities
/// - Builds the operand and operator queues from a token stream.
/// - Applies every operator and reports operand starvation.
pub mod evaluator;
/// The lexer module classifies the words of a formula.
///
/// Each space-delimited word becomes either a boolean literal or an operator
/// keyword. Words that are not keywords of the active variant are read as
/// literals, `true` only when they spell it.
pub mod lexer;
/// Operator kinds and their truth functions.
pub mod operator;
/// The resolver module removes parentheses from a formula.
///
/// The innermost group is evaluated and replaced by its `true`/`false` text
/// until no group is left.
///
/// # Responsibilities
/// - Rejects formulas with unbalanced parentheses.
/// - Collapses groups from the innermost outwards.
pub mod resolver;

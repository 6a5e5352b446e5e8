use std::collections::VecDeque;

use tracing::debug;

use crate::{
    config::Variant,
    error::{EvalResult, RuntimeError},
    interpreter::{
        lexer::{Token, tokenize},
        operator::OperatorKind,
    },
};

/// The operand and operator queues of a flat formula.
///
/// Both queues keep encounter order and are independent of each other: the
/// position of an operator relative to the literals is not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queues {
    /// Literal values in the order they were written.
    pub operands:  VecDeque<bool>,
    /// Operators in the order they were written.
    pub operators: VecDeque<OperatorKind>,
}

impl Queues {
    /// Sorts a token stream into its operand and operator queues.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut queues = Self::default();
        for token in tokens {
            match token {
                Token::Literal(value) => queues.operands.push_back(value),
                Token::Operator(operator) => queues.operators.push_back(operator),
            }
        }
        queues
    }

    /// Applies every operator and returns the resulting truth value.
    ///
    /// Operators are taken from the front of their queue. The value is the
    /// last operand left afterwards, or `false` when none is left.
    ///
    /// # Example
    /// ```
    /// use truthline::{
    ///     config::Variant,
    ///     interpreter::{evaluator::Queues, lexer::tokenize},
    /// };
    ///
    /// let queues = Queues::from_tokens(tokenize("true and false or true", Variant::Minimal));
    /// assert_eq!(queues.reduce().unwrap(), true);
    /// ```
    pub fn reduce(mut self) -> EvalResult<bool> {
        while let Some(operator) = self.operators.pop_front() {
            apply_operator(&mut self.operands, operator)?;
        }
        Ok(self.operands.back().copied().unwrap_or(false))
    }
}

/// Applies one operator to the operand queue in place.
///
/// Binary operators pop `right` and then `left` from the back of the queue
/// and push their result onto the back. `Not` negates the operand at the
/// front of the queue, wherever the keyword was written.
///
/// # Errors
/// Returns `RuntimeError::OperandStarvation` if the queue holds fewer operands
/// than the operator consumes. The queue is left untouched in that case.
///
/// # Example
/// ```
/// use std::collections::VecDeque;
///
/// use truthline::interpreter::{evaluator::apply_operator, operator::OperatorKind};
///
/// let mut operands = VecDeque::from([true, false]);
/// apply_operator(&mut operands, OperatorKind::Not).unwrap();
/// assert_eq!(operands, VecDeque::from([false, false]));
///
/// apply_operator(&mut operands, OperatorKind::Equals).unwrap();
/// assert_eq!(operands, VecDeque::from([true]));
///
/// assert!(apply_operator(&mut operands, OperatorKind::And).is_err());
/// ```
pub fn apply_operator(operands: &mut VecDeque<bool>,
                      operator: OperatorKind)
                      -> Result<(), RuntimeError> {
    let found = operands.len();
    let starved = RuntimeError::OperandStarvation { operator,
                                                    needed: operator.arity(),
                                                    found };

    match operator {
        OperatorKind::Not => {
            let front = operands.front_mut().ok_or(starved)?;
            *front = operator.combine(*front, false);
            debug!(%operator, value = *front, "negated front operand");
        },
        _ => {
            if found < 2 {
                return Err(starved);
            }
            let (Some(right), Some(left)) = (operands.pop_back(), operands.pop_back()) else {
                return Err(starved);
            };
            let value = operator.combine(left, right);
            debug!(%operator, left, right, value, "applied binary operator");
            operands.push_back(value);
        },
    }

    Ok(())
}

/// Evaluates a formula without parentheses.
///
/// Parentheses are not interpreted here; call
/// [`resolve_parentheses`](crate::interpreter::resolver::resolve_parentheses)
/// first when the formula may contain groups.
///
/// # Errors
/// Returns an error if an operator runs out of operands.
///
/// # Example
/// ```
/// use truthline::{config::Variant, interpreter::evaluator::evaluate};
///
/// // `not` negates the front literal, not the one next to it.
/// assert_eq!(evaluate("true false not", Variant::Minimal).unwrap(), false);
/// assert_eq!(evaluate("true and banana", Variant::Minimal).unwrap(), false);
/// assert!(evaluate("true and", Variant::Minimal).is_err());
/// ```
pub fn evaluate(formula: &str, variant: Variant) -> EvalResult<bool> {
    let queues = Queues::from_tokens(tokenize(formula, variant));
    debug!(formula,
           operands = queues.operands.len(),
           operators = queues.operators.len(),
           "evaluating flat formula");
    queues.reduce()
}

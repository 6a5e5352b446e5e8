use thiserror::Error;

use crate::interpreter::operator::OperatorKind;

/// Represents all errors that can occur while applying operators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An operator was dequeued while too few operands were left.
    #[error("Operand starvation: '{operator}' needs {needed} operand(s) but only {found} remain.")]
    OperandStarvation {
        /// The operator that could not be applied.
        operator: OperatorKind,
        /// How many operands the operator consumes.
        needed:   usize,
        /// How many operands were available.
        found:    usize,
    },
}

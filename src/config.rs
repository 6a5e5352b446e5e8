use clap::ValueEnum;

use crate::interpreter::operator::OperatorKind;

/// Selects the operator keyword set and the output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Variant {
    /// `and`, `or` and `not`; results are printed as a `Result:` line.
    #[default]
    Minimal,
    /// Adds `xor`, `implies`, `equals` and `notequals`; results are printed as
    /// a truth table.
    Extended,
}

impl Variant {
    /// Returns whether the operator keyword is recognized under this variant.
    ///
    /// Keywords that are not admitted are read as boolean literals instead.
    ///
    /// # Example
    /// ```
    /// use truthline::{config::Variant, interpreter::operator::OperatorKind};
    ///
    /// assert!(Variant::Minimal.admits(OperatorKind::And));
    /// assert!(!Variant::Minimal.admits(OperatorKind::Xor));
    /// assert!(Variant::Extended.admits(OperatorKind::Xor));
    /// ```
    #[must_use]
    pub const fn admits(self, operator: OperatorKind) -> bool {
        match self {
            Self::Minimal => !operator.is_extended(),
            Self::Extended => true,
        }
    }
}

/// Settings of one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Active keyword set and output format.
    pub variant: Variant,
    /// Emit ANSI color codes around `TRUE`/`FALSE`.
    pub color:   bool,
    /// Stop the session on the first failing formula.
    pub strict:  bool,
    /// Print a prompt before every read.
    pub prompt:  bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { variant: Variant::Minimal,
               color:   true,
               strict:  false,
               prompt:  false, }
    }
}

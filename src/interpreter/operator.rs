use std::fmt::Display;

/// Represents the operators a formula can contain.
///
/// `Not` is unary; every other kind is binary and maps to a pure two-argument
/// truth function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `implies`
    Implies,
    /// `equals`
    Equals,
    /// `notequals`
    NotEquals,
}

impl OperatorKind {
    /// Returns the number of operands consumed by the operator.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Not => 1,
            _ => 2,
        }
    }

    /// Returns whether the operator only exists in the extended variant.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(self, Self::Xor | Self::Implies | Self::Equals | Self::NotEquals)
    }

    /// The keyword spelling of the operator.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Implies => "implies",
            Self::Equals => "equals",
            Self::NotEquals => "notequals",
        }
    }

    /// Applies the truth function of the operator.
    ///
    /// `Not` takes a single operand: it negates `left` and ignores `right`.
    ///
    /// # Example
    /// ```
    /// use truthline::interpreter::operator::OperatorKind;
    ///
    /// assert!(!OperatorKind::Implies.combine(true, false));
    /// assert!(OperatorKind::Implies.combine(false, false));
    /// assert!(!OperatorKind::Not.combine(true, true));
    /// ```
    #[must_use]
    pub const fn combine(self, left: bool, right: bool) -> bool {
        match self {
            Self::Not => !left,
            Self::And => left && right,
            Self::Or => left || right,
            Self::Xor => left ^ right,
            Self::Implies => !left || right,
            Self::Equals => left == right,
            Self::NotEquals => left != right,
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

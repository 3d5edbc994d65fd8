//! Formula error types

use crate::operator::Operator;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while evaluating a formula
///
/// Every error aborts the whole evaluation; there are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Character outside the formula alphabet
    #[error("Invalid character in formula: '{0}'")]
    InvalidCharacter(char),

    /// Call to a function that is not in the function table
    #[error("Unsupported function in formula: '{0}'")]
    UnsupportedFunction(String),

    /// Unbalanced parentheses
    #[error("Mismatched parentheses in expression")]
    MismatchedParentheses,

    /// Operator or function evaluated with too few operands on the stack
    #[error("'{token}' requires {needed} operand(s) but the stack has {available}")]
    InsufficientOperands {
        token: String,
        needed: usize,
        available: usize,
    },

    /// Evaluation did not end with exactly one value on the stack
    #[error("Malformed expression: evaluation left {remaining} value(s) on the stack")]
    MalformedExpression { remaining: usize },

    /// Right operand of `/`, `//` or `%` is zero
    #[error("Division by zero in '{0}'")]
    DivisionByZero(Operator),

    /// Token that fits no category at its position
    #[error("Unexpected token in expression: '{0}'")]
    UnexpectedToken(String),
}

/// Fieldless view of [`FormulaError`] for matching on the error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    UnsupportedFunction,
    MismatchedParentheses,
    InsufficientOperands,
    MalformedExpression,
    DivisionByZero,
    UnexpectedToken,
}

impl FormulaError {
    /// The taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormulaError::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            FormulaError::UnsupportedFunction(_) => ErrorKind::UnsupportedFunction,
            FormulaError::MismatchedParentheses => ErrorKind::MismatchedParentheses,
            FormulaError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            FormulaError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            FormulaError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            FormulaError::UnexpectedToken(_) => ErrorKind::UnexpectedToken,
        }
    }
}

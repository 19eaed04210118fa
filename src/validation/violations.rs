//! Syntax violations reported by the validator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What went wrong at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("operator '{0}' where an operand was expected")]
    UnexpectedOperator(char),

    #[error("')' without a matching '('")]
    UnmatchedClose,

    #[error("empty group '()'")]
    EmptyGroup,

    #[error("')' directly after an operator")]
    MissingOperand,

    #[error("missing operator before '(' or after ')'")]
    MissingOperator,

    #[error("'(' is never closed")]
    UnclosedGroup,

    #[error("expression ends after an operator")]
    UnexpectedEnd,
}

/// A violation and the character index it was found at.
///
/// End-of-input violations carry the length of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("at {position}: {kind}")]
pub struct SyntaxError {
    pub position: usize,
    pub kind: SyntaxErrorKind,
}

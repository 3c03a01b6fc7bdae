//! Error types for statement validation and evaluation.

use thiserror::Error;

/// Everything that can stop a statement from being evaluated.
///
/// These map directly onto the textual errors a caller would recognise from the
/// original implementation this crate's behaviour is pinned to: the `Display`
/// impl (via `#[error(...)]`) reproduces the same `validation error: ...`
/// prefixes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("validation error: token length zero for provided statement")]
    EmptyStatement,

    #[error("validation error: illegal token {0}")]
    IllegalToken(String),

    #[error("validation error: mismatched parentheses")]
    MismatchedParentheses,

    #[error("validation error: missing operation")]
    MissingOperation,

    #[error("validation error: invalid number of arguments in eval, expected 3 or 4, got {0}")]
    InvalidEvalArity(usize),

    #[error("validation error: expected identifier, found {0}")]
    ExpectedIdentifier(String),

    #[error("validation error: expected comparison operator, found {0}")]
    ExpectedOperator(String),

    #[error("validation error: expected literal value, found {0}")]
    ExpectedLiteral(String),

    #[error("validation error: cannot use literal values '*' or 'nil' with comparison operators")]
    NonOrderableLiteralWithOrderingOperator,

    #[error(
        "validation error: cannot specify action literal of $created or $deleted when using previous value"
    )]
    ActionLiteralWithPreviousValue,
}

/// Errors raised by the structural differ while building a [`crate::Diff`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiffError {
    #[error("cannot diff values of incompatible shape at path {path}")]
    IncompatibleShape { path: String },
}

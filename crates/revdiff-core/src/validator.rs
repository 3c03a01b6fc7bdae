//! Whole-statement structural validation.
//!
//! This is the first of two independent checks a statement goes through (the
//! second, per-EVAL argument-shape check, lives in [`crate::evaluator`] because it
//! needs the same group-extraction the evaluator already does). This pass only
//! confirms that AND/OR/EVAL groups and parentheses are balanced and that no
//! `ILLEGAL` token slipped through the lexer.

use crate::error::EvalError;
use revdiff_lex::{Token, TokenKind};

/// Checks paren/operator-stack balance over the whole token stream.
///
/// Pushes `AND`, `OR`, `EVAL`, and `LPAREN`. On `RPAREN`: the stack must not be
/// empty, the popped token must be `LPAREN`, and the token popped after that must
/// be `AND`, `OR`, or `EVAL` (otherwise "missing operation"). After the final
/// token the stack must be empty.
pub fn validate(tokens: &[Token]) -> Result<(), EvalError> {
    let non_eof: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .collect();

    if non_eof.is_empty() {
        return Err(EvalError::EmptyStatement);
    }

    let mut stack: Vec<TokenKind> = Vec::new();

    for tok in &non_eof {
        if tok.kind == TokenKind::Illegal {
            return Err(EvalError::IllegalToken(tok.literal.clone()));
        }

        match tok.kind {
            TokenKind::And | TokenKind::Or | TokenKind::Eval | TokenKind::LParen => {
                stack.push(tok.kind);
            }
            TokenKind::RParen => {
                let opener = stack.pop().ok_or(EvalError::MismatchedParentheses)?;
                if opener != TokenKind::LParen {
                    return Err(EvalError::MismatchedParentheses);
                }
                let op = stack.pop().ok_or(EvalError::MissingOperation)?;
                if !matches!(op, TokenKind::And | TokenKind::Or | TokenKind::Eval) {
                    return Err(EvalError::MissingOperation);
                }
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(EvalError::MismatchedParentheses);
    }

    tracing::debug!(token_count = non_eof.len(), "statement passed structural validation");
    Ok(())
}

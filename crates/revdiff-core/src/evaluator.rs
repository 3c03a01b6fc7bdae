//! Stack-based statement evaluator.
//!
//! Implements the shift-reduce reduction over AND/OR/EVAL groups described by the
//! statement grammar, plus the per-EVAL leaf semantics: sentinel path expansion,
//! wildcard change matching, the previous-value guard, and the six comparison
//! operators.

use crate::change::{ChangeKind, Diff};
use crate::coerce::{parse_duration, parse_float, parse_int, parse_time, Coerce};
use crate::error::EvalError;
use crate::path;
use crate::validator;
use crate::value::Value;
use crate::wildcard::wildcard_path_match;
use revdiff_lex::{Token, TokenKind};
use std::cmp::Ordering;

/// Validates and evaluates `tokens` against `diff`, returning the statement's
/// boolean result.
pub fn evaluate(tokens: &[Token], diff: &Diff) -> Result<bool, EvalError> {
    validator::validate(tokens)?;

    let mut stack: Vec<Token> = Vec::new();

    for tok in tokens {
        if tok.kind == TokenKind::Eof {
            continue;
        }
        if tok.kind != TokenKind::RParen {
            stack.push(tok.clone());
            continue;
        }

        let mut inner: Vec<Token> = Vec::new();
        loop {
            let popped = stack
                .pop()
                .expect("validate() guarantees a matching LPAREN exists");
            if popped.kind == TokenKind::LParen {
                break;
            }
            if matches!(
                popped.kind,
                TokenKind::Comma
                    | TokenKind::LBracket
                    | TokenKind::RBracket
                    | TokenKind::Comment
            ) {
                continue;
            }
            inner.push(popped);
        }

        let op = stack
            .pop()
            .expect("validate() guarantees an introducing operator exists");

        let result = match op.kind {
            TokenKind::Eval => {
                validate_transform_stack(&inner)?;
                evaluate_transform_stack(&inner, diff)
            }
            TokenKind::And => fold_and(&inner),
            TokenKind::Or => fold_or(&inner),
            _ => unreachable!("validate() guarantees the opener is AND, OR, or EVAL"),
        };

        tracing::debug!(op = %op.kind, result, "reduced group");
        stack.push(bool_token(result));
    }

    let result = stack
        .pop()
        .expect("validate() guarantees exactly one token remains");
    Ok(result.kind == TokenKind::True)
}

fn bool_token(value: bool) -> Token {
    if value {
        Token::new(TokenKind::True, "true")
    } else {
        Token::new(TokenKind::False, "false")
    }
}

/// AND is true iff no inner token is FALSE; an empty group is false, not
/// vacuously true (the grammar never produces an empty AND, but nothing here
/// requires that by construction).
fn fold_and(inner: &[Token]) -> bool {
    !inner.is_empty() && !inner.iter().any(|t| t.kind == TokenKind::False)
}

/// OR is true iff any inner token is TRUE; an empty group is false.
fn fold_or(inner: &[Token]) -> bool {
    inner.iter().any(|t| t.kind == TokenKind::True)
}

/// Validates the shape of one EVAL's popped argument stack.
///
/// `inner` is in the reversed order the reduce loop naturally produces:
/// `[literal, operator, identifier]` for a 3-token EVAL, or
/// `[literal, operator, previous_literal, identifier]` for a 4-token EVAL with a
/// previous-value guard.
pub fn validate_transform_stack(inner: &[Token]) -> Result<(), EvalError> {
    match inner.len() {
        3 => {
            let (literal, operator, ident) = (&inner[0], &inner[1], &inner[2]);
            check_ident(ident)?;
            check_operator(operator)?;
            check_literal(literal)?;
            check_ordering_literal(operator, literal)?;
            Ok(())
        }
        4 => {
            let (literal, operator, previous, ident) =
                (&inner[0], &inner[1], &inner[2], &inner[3]);
            check_ident(ident)?;
            check_operator(operator)?;
            check_literal(literal)?;
            check_literal(previous)?;
            check_ordering_literal(operator, literal)?;
            check_ordering_literal(operator, previous)?;
            if matches!(literal.kind, TokenKind::Created | TokenKind::Deleted)
                || matches!(previous.kind, TokenKind::Created | TokenKind::Deleted)
            {
                return Err(EvalError::ActionLiteralWithPreviousValue);
            }
            Ok(())
        }
        n => Err(EvalError::InvalidEvalArity(n)),
    }
}

fn check_ident(tok: &Token) -> Result<(), EvalError> {
    if tok.kind == TokenKind::Ident {
        Ok(())
    } else {
        Err(EvalError::ExpectedIdentifier(tok.kind.to_string()))
    }
}

fn check_operator(tok: &Token) -> Result<(), EvalError> {
    if tok.kind.is_operator() {
        Ok(())
    } else {
        Err(EvalError::ExpectedOperator(tok.kind.to_string()))
    }
}

fn check_literal(tok: &Token) -> Result<(), EvalError> {
    if tok.kind.is_literal() {
        Ok(())
    } else {
        Err(EvalError::ExpectedLiteral(tok.kind.to_string()))
    }
}

fn check_ordering_literal(operator: &Token, literal: &Token) -> Result<(), EvalError> {
    if operator.kind.is_ordering_operator()
        && matches!(
            literal.kind,
            TokenKind::Asterisk | TokenKind::Nil | TokenKind::Created | TokenKind::Deleted
        )
    {
        return Err(EvalError::NonOrderableLiteralWithOrderingOperator);
    }
    Ok(())
}

/// Evaluates one already-shape-validated EVAL argument stack against `diff`.
///
/// See the module docs for the overall algorithm: sentinel expansion, wildcard
/// matching, the absence short-circuit, the previous-value guard, then the
/// per-match operator application.
pub fn evaluate_transform_stack(inner: &[Token], diff: &Diff) -> bool {
    let (literal, operator, previous, ident) = match inner.len() {
        3 => (&inner[0], &inner[1], None, &inner[2]),
        4 => (&inner[0], &inner[1], Some(&inner[2]), &inner[3]),
        _ => return false,
    };

    let filter = expand_path(&ident.literal, &diff.new);

    let matched: Vec<&crate::change::Change> = diff
        .changes
        .iter()
        .filter(|c| wildcard_path_match(&filter, &c.path))
        .collect();

    if matched.is_empty() {
        return operator.kind == TokenKind::NotGoesTo;
    }

    if operator.kind == TokenKind::NotGoesTo {
        match literal.kind {
            TokenKind::Asterisk => return false,
            TokenKind::Created => {
                return !matched.iter().any(|m| m.kind == ChangeKind::Create);
            }
            TokenKind::Deleted => {
                return !matched.iter().any(|m| m.kind == ChangeKind::Delete);
            }
            _ => {}
        }
    }

    for m in &matched {
        if let Some(prev) = previous {
            if !scalar_equals(prev, &m.from) {
                continue;
            }
        }

        let satisfied = match operator.kind {
            TokenKind::GoesTo => positive_match(literal, m),
            TokenKind::NotGoesTo => !positive_match(literal, m),
            TokenKind::GoesGt => ordering_match(literal, &m.to, Ordering::Greater, false),
            TokenKind::GoesGte => ordering_match(literal, &m.to, Ordering::Greater, true),
            TokenKind::GoesLt => ordering_match(literal, &m.to, Ordering::Less, false),
            TokenKind::GoesLte => ordering_match(literal, &m.to, Ordering::Less, true),
            _ => false,
        };

        if satisfied {
            return true;
        }
    }

    false
}

/// Splits `ident` on `.` and rewrites any `$first`/`$last` segment whose
/// cumulative prefix resolves to a non-empty sequence in `record`.
fn expand_path(ident: &str, record: &Value) -> Vec<String> {
    let mut segments: Vec<String> = ident.split('.').map(str::to_string).collect();

    for i in 0..segments.len() {
        if segments[i] != "$first" && segments[i] != "$last" {
            continue;
        }
        let prefix: Vec<&str> = segments[..i].iter().map(String::as_str).collect();
        if let Some(Value::Array(items)) = path::resolve_segments(&prefix, record) {
            if !items.is_empty() {
                segments[i] = if segments[i] == "$first" {
                    "0".to_string()
                } else {
                    (items.len() - 1).to_string()
                };
            }
        }
    }

    segments
}

/// `GOESTO`'s per-kind equality, including the two action-literal special cases.
fn positive_match(literal: &Token, change: &crate::change::Change) -> bool {
    match literal.kind {
        TokenKind::Created => change.kind == ChangeKind::Create,
        TokenKind::Deleted => change.kind == ChangeKind::Delete,
        _ => scalar_equals(literal, &change.to),
    }
}

/// Scalar equality used both for `GOESTO`/`NOTGOESTO` against `to` and for the
/// previous-value guard against `from`. Does not handle `$created`/`$deleted` —
/// those only make sense against a change's kind, not a bare value.
fn scalar_equals(literal: &Token, value: &Value) -> bool {
    match literal.kind {
        TokenKind::Int => parse_int(&literal.literal) == value.coerce_int(),
        TokenKind::Float => parse_float(&literal.literal) == value.coerce_float(),
        TokenKind::String => Some(literal.literal.clone()) == value.coerce_string(),
        TokenKind::Duration => parse_duration(&literal.literal) == value.coerce_duration(),
        TokenKind::Time => match (parse_time(&literal.literal), value.coerce_time()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        TokenKind::True => value.as_bool() == Some(true),
        TokenKind::False => value.as_bool() == Some(false),
        TokenKind::Nil => value.is_null(),
        TokenKind::Asterisk => true,
        _ => false,
    }
}

/// Ordering comparison for the four `=GT>`/`=GTE>`/`=LT>`/`=LTE>` operators.
/// `wanted` is the `Ordering` a strict match requires (`value.cmp(&literal)`);
/// `or_equal` additionally accepts `Ordering::Equal`.
fn ordering_match(literal: &Token, value: &Value, wanted: Ordering, or_equal: bool) -> bool {
    let ordering = match literal.kind {
        TokenKind::Int => parse_int(&literal.literal)
            .zip(value.coerce_int())
            .map(|(l, v)| v.cmp(&l)),
        TokenKind::Float => parse_float(&literal.literal)
            .zip(value.coerce_float())
            .and_then(|(l, v)| v.partial_cmp(&l)),
        TokenKind::String => value
            .coerce_string()
            .map(|v| v.as_str().cmp(literal.literal.as_str())),
        TokenKind::Duration => parse_duration(&literal.literal)
            .zip(value.coerce_duration())
            .map(|(l, v)| v.cmp(&l)),
        TokenKind::Time => parse_time(&literal.literal)
            .zip(value.coerce_time())
            .map(|(l, v)| v.cmp(&l)),
        _ => None,
    };

    match ordering {
        Some(o) => o == wanted || (or_equal && o == Ordering::Equal),
        None => false,
    }
}

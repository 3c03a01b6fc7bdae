//! revdiff-lex — lexical scanner for revdiff statements.
//!
//! A statement is a small boolean expression over `AND`, `OR`, and `EVAL` groups
//! (see `revdiff-core` for the validator and evaluator that consume this crate's
//! output). This crate only turns statement text into a flat token stream; it has
//! no notion of grouping, operator precedence, or semantic validity.
//!
//! The scanner is single-pass and zero-copy over the input where practical: token
//! literals borrow directly out of the source string during scanning and are
//! copied into an owned `String` only when a [`Token`] is produced, so a caller
//! holding a `Vec<Token>` is free of lifetimes tied to the original statement.
//!
//! There is deliberately no source-position tracking (no line/column/span on
//! `Token`) — this scanner is consumed entirely by the validator and evaluator,
//! neither of which reports diagnostics against source positions.

pub mod char_class;
pub mod cursor;
pub mod edge_cases;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Scans `source` in full and returns the resulting tokens, including the
/// trailing `EOF`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if done {
            break;
        }
    }
    tokens
}

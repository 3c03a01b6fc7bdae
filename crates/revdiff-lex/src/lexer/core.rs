//! Core lexer dispatch.

use crate::char_class::{is_decimal_point, is_digit, is_letter, is_negative_sign, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scans a statement into a single-pass stream of [`Token`]s.
///
/// The lexer never backtracks and never fails outright: an unrecognised character
/// produces an `ILLEGAL` token rather than aborting the scan, so a caller always
/// gets a complete token stream to hand to the validator.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token. Once EOF is reached, keeps returning `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.cursor.is_at_end() {
            return Token::eof();
        }

        let c = self.cursor.current_char();
        let tok = match c {
            '/' => self.lex_comment_or_illegal(),
            '*' => {
                self.cursor.advance();
                Token::new(TokenKind::Asterisk, "*")
            }
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '"' => self.lex_string(),
            '$' => self.lex_identifier(),
            '=' => self.lex_operator(),
            c if is_letter(c) => {
                if (c == 'd' || c == 't') && self.cursor.char_at(1) == '"' {
                    self.lex_quoted_literal(c)
                } else {
                    self.lex_identifier()
                }
            }
            c if is_digit(c) || is_negative_sign(c) => self.lex_number(),
            _ => {
                let start = self.cursor.position();
                self.cursor.advance();
                Token::new(TokenKind::Illegal, self.cursor.slice_from(start))
            }
        };

        tracing::trace!(kind = %tok.kind, literal = %tok.literal, "lexed token");
        tok
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && is_whitespace(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}

/// Used by [`Lexer::lex_number`] to tell whether a scanned digit run contains a
/// decimal point (FLOAT) or not (INT).
pub(crate) fn contains_decimal_point(text: &str) -> bool {
    text.chars().any(is_decimal_point)
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

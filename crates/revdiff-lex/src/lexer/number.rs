//! Number literal scanning.

use crate::char_class::{is_decimal_point, is_digit, is_negative_sign};
use crate::lexer::core::{contains_decimal_point, Lexer};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans an optionally-negative INT or FLOAT literal.
    ///
    /// A single leading `-` is accepted; the digit run may contain at most one `.`,
    /// which decides whether the result is FLOAT or INT. There is no exponent or
    /// underscore-separator syntax.
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        if is_negative_sign(self.cursor.current_char()) {
            self.cursor.advance();
        }
        while is_digit(self.cursor.current_char()) || is_decimal_point(self.cursor.current_char())
        {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let kind = if contains_decimal_point(text) {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Token::new(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_number(src: &str) -> Token {
        Lexer::new(src).lex_number()
    }

    #[test]
    fn positive_int() {
        let tok = lex_number("1343456");
        assert_eq!(tok.kind, TokenKind::Int);
        assert_eq!(tok.literal, "1343456");
    }

    #[test]
    fn negative_int() {
        let tok = lex_number("-123456");
        assert_eq!(tok.kind, TokenKind::Int);
        assert_eq!(tok.literal, "-123456");
    }

    #[test]
    fn positive_float() {
        let tok = lex_number("123.456");
        assert_eq!(tok.kind, TokenKind::Float);
        assert_eq!(tok.literal, "123.456");
    }

    #[test]
    fn negative_float() {
        let tok = lex_number("-123.456");
        assert_eq!(tok.kind, TokenKind::Float);
    }
}

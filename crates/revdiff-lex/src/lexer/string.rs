//! Quoted literal scanning: plain strings, durations, and timestamps.

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a `"..."` STRING literal. There is no escape-sequence handling: the
    /// literal is the raw text between the quotes, and an unterminated string
    /// consumes to end of input.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        if !self.cursor.is_at_end() {
            self.cursor.advance(); // closing quote
        }
        Token::new(TokenKind::String, text)
    }

    /// Scans a `d"..."` duration or `t"..."` timestamp literal.
    ///
    /// `lead` is the already-peeked `d` or `t`; the caller has confirmed the next
    /// character is a `"` but has not consumed either character yet.
    pub fn lex_quoted_literal(&mut self, lead: char) -> Token {
        self.cursor.advance(); // the 'd' or 't'
        let inner = self.lex_string();
        let kind = if lead == 'd' {
            TokenKind::Duration
        } else {
            TokenKind::Time
        };
        Token::new(kind, inner.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string() {
        let tok = Lexer::new(r#""foobar""#).lex_string();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.literal, "foobar");
    }

    #[test]
    fn empty_string() {
        let tok = Lexer::new(r#""""#).lex_string();
        assert_eq!(tok.literal, "");
    }

    #[test]
    fn duration_literal() {
        let mut lexer = Lexer::new(r#"d"2h12m30s""#);
        lexer.cursor.advance_n(0);
        let tok = lexer.lex_quoted_literal('d');
        assert_eq!(tok.kind, TokenKind::Duration);
        assert_eq!(tok.literal, "2h12m30s");
    }

    #[test]
    fn time_literal() {
        let mut lexer = Lexer::new(r#"t"2020-01-01T12:00:00-04:00""#);
        let tok = lexer.lex_quoted_literal('t');
        assert_eq!(tok.kind, TokenKind::Time);
        assert_eq!(tok.literal, "2020-01-01T12:00:00-04:00");
    }
}

//! Block comment scanning.

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a `/* ... */` block comment, or produces `ILLEGAL` for a bare `/`.
    ///
    /// There is no line-comment form and block comments do not nest: the first
    /// `*/` closes the comment.
    pub fn lex_comment_or_illegal(&mut self) -> Token {
        let slash_start = self.cursor.position();
        self.cursor.advance(); // '/'
        if self.cursor.current_char() != '*' {
            return Token::new(TokenKind::Illegal, self.cursor.slice_from(slash_start));
        }
        self.cursor.advance(); // '*'
        let body_start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() {
                return Token::new(TokenKind::Comment, self.cursor.slice_from(body_start));
            }
            if self.cursor.current_char() == '*' && self.cursor.char_at(1) == '/' {
                let body = self.cursor.slice_from(body_start);
                self.cursor.advance_n(2); // '*/'
                return Token::new(TokenKind::Comment, body);
            }
            self.cursor.advance();
        }
    }
}

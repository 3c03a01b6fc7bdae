//! Comparison operator scanning.

use crate::char_class::is_operator_continue;
use crate::lexer::core::Lexer;
use crate::token::{lookup_operator, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans an `=`-led operator spelling (`=>`, `=!>`, `=gt>`, `=GTE>`, ...).
    ///
    /// A body that doesn't match one of the six recognised spellings produces
    /// `ILLEGAL` with the raw text preserved as its literal, so the validator
    /// still has the original spelling to report back to the caller.
    pub fn lex_operator(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance(); // '='
        while is_operator_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        match lookup_operator(text) {
            Some(kind) => Token::new(kind, text),
            None => Token::new(TokenKind::Illegal, text),
        }
    }
}

//! Identifier and keyword scanning.

use crate::char_class::is_ident_continue;
use crate::lexer::core::Lexer;
use crate::token::{lookup_ident, Token};

impl<'a> Lexer<'a> {
    /// Scans a field selector or keyword.
    ///
    /// Handles both plain identifiers (`S`, `NTS.0.NSS.$first`) and the
    /// `$`-prefixed action sentinels (`$created`, `$deleted`), since both start with
    /// a character that can continue an identifier body. The scanned text is looked
    /// up against the keyword table; anything not recognised is an `IDENT`.
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(text), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn lex_ident(src: &str) -> Token {
        Lexer::new(src).lex_identifier()
    }

    #[test]
    fn simple_field_name() {
        let tok = lex_ident("S");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "S");
    }

    #[test]
    fn dotted_path_is_one_token() {
        let tok = lex_ident("NTS.0.NSS.0");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "NTS.0.NSS.0");
    }

    #[test]
    fn sentinel_segment() {
        let tok = lex_ident("SS.$first");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "SS.$first");
    }

    #[test]
    fn action_literal_created() {
        let tok = lex_ident("$created");
        assert_eq!(tok.kind, TokenKind::Created);
    }

    #[test]
    fn action_literal_deleted_uppercase() {
        let tok = lex_ident("$DELETED");
        assert_eq!(tok.kind, TokenKind::Deleted);
    }

    #[test]
    fn keyword_and_is_case_insensitive() {
        assert_eq!(lex_ident("and").kind, TokenKind::And);
        assert_eq!(lex_ident("AND").kind, TokenKind::And);
    }

    #[test]
    fn keyword_nil() {
        assert_eq!(lex_ident("nil").kind, TokenKind::Nil);
    }
}

//! ASCII character classes used by the scanner.
//!
//! The statement language is ASCII-only: identifiers, operators, and literal bodies
//! never contain characters outside the classes below. There is no Unicode
//! identifier support to mirror, since field selectors are always plain ASCII names.

/// `a`-`z`, `A`-`Z`.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `0`-`9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `_` and `.` — characters that glue identifier segments together
/// (`NTS.0.NSS.$first`, `field_name`).
pub fn is_concatenator(c: char) -> bool {
    c == '_' || c == '.'
}

/// `$`, `-`, `*` — characters that are not letters or digits but still belong
/// inside an identifier or number body (`$first`, `-123`, `SS.*`).
pub fn is_special(c: char) -> bool {
    c == '$' || c == '-' || c == '*'
}

pub fn is_negative_sign(c: char) -> bool {
    c == '-'
}

pub fn is_decimal_point(c: char) -> bool {
    c == '.'
}

/// Any character that can continue an identifier once started: letters, digits,
/// concatenators, and the special identifier characters.
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || is_concatenator(c) || is_special(c)
}

/// Characters that make up an operator body after the leading `=`:
/// letters (for `gt`, `lt`, `gte`, `lte`), `!`, `>`.
pub fn is_operator_continue(c: char) -> bool {
    is_letter(c) || c == '!' || c == '>' || c == '='
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('1'));
        assert!(is_digit('7'));
        assert!(!is_digit('x'));
    }

    #[test]
    fn concatenators_and_specials() {
        assert!(is_concatenator('_'));
        assert!(is_concatenator('.'));
        assert!(is_special('$'));
        assert!(is_special('-'));
        assert!(is_special('*'));
        assert!(!is_concatenator('$'));
    }

    #[test]
    fn ident_continue_covers_field_selectors() {
        for c in "NTS.0.NSS.$first-ish".chars() {
            assert!(is_ident_continue(c), "{c} should continue an identifier");
        }
        assert!(!is_ident_continue(' '));
        assert!(!is_ident_continue(','));
    }
}

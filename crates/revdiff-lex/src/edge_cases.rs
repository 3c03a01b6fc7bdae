//! Cross-cutting edge-case tests for the lexer.

//! # Ember lexer
//!
//! Lexical analysis for the Ember programming language. The crate turns a
//! complete source string into an ordered sequence of tokens for a
//! downstream parser, or reports the first lexical error with its exact
//! position.
//!
//! ## Architecture
//!
//! - `lexer`: the scanner, token types and the fixed operator table
//! - `error`: error types, source locations and diagnostic rendering
//!
//! ## Conventions
//!
//! - Input is UTF-8. Non-ASCII characters are accepted inside string
//!   literals and comments only.
//! - Every successful result ends with exactly one `Eof` token.
//! - `1.` lexes as an integer followed by `.`; `1.5` is a float.
//! - Integer literals that overflow `i64` are rejected at lex time.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexErrorKind, LexResult, NumberIssue, SourceLocation, Span};
pub use lexer::{tokenize, tokenize_partial, Keyword, Lexer, Literal, Token, TokenKind};

/// Version of the Ember lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_tokenize_entry_point() {
        let tokens = tokenize("let answer = 42").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].lexeme, "answer");
        assert!(tokens[4].is_eof());
    }

    #[test]
    fn test_tokenize_partial_entry_point() {
        let (tokens, err) = tokenize_partial("a b \"c");
        assert_eq!(tokens.len(), 2);
        assert_eq!(err.map(|e| e.kind), Some(LexErrorKind::UnterminatedString));
    }

    #[test]
    fn test_tokens_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Token>();
        assert_send_sync::<LexError>();
    }
}

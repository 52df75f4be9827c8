//! Lexical analysis module
//!
//! This module handles tokenization of Ember source code.

mod cursor;
pub mod scanner;
pub mod tables;
pub mod token;

pub use scanner::Lexer;
pub use token::{Keyword, Literal, Token, TokenKind};

use crate::error::{LexError, LexResult};

/// Tokenize a complete input string
///
/// The result always ends with a single `Eof` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    Lexer::new(input).tokenize()
}

/// Tokenize, returning the tokens lexed before the first error alongside it
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn tokenize_partial(input: &str) -> (Vec<Token>, Option<LexError>) {
    Lexer::new(input).tokenize_partial()
}

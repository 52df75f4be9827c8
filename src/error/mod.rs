//! Error handling and diagnostics for the Ember lexer
//!
//! This module provides the lexer's error type, the location types shared
//! with tokens, and diagnostic formatting for reporting failures.

use std::fmt;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// Position of a character in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Byte offset from the start of the input
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, counted in characters)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Location of the first character of any input
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open byte range `start..end` into the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} > end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Why a numeric literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumberIssue {
    /// A second fractional part, as in `1.2.3`
    #[error("multiple decimal points")]
    MultipleDecimalPoints,
    /// A letter or underscore glued to the digits, as in `12ab`
    #[error("invalid suffix '{0}'")]
    InvalidSuffix(char),
    /// Fraction digits that do not form a valid `f64`
    #[error("float literal could not be parsed")]
    InvalidFloat,
    /// Integer value does not fit in `i64`
    #[error("integer literal does not fit in 64 bits")]
    Overflow,
}

/// What went wrong while lexing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// Input ended before the closing `"`
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Input ended before the closing `*/`
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// Character that cannot start any token
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("malformed number literal: {0}")]
    MalformedNumber(NumberIssue),
    /// Backslash followed by something that is not a known escape
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscapeSequence(char),
}

/// A lexical error with the position of the offending character
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {}", located(.filename, .location))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
    /// Optional file name used when displaying the location
    pub filename: Option<String>,
}

fn located(filename: &Option<String>, location: &SourceLocation) -> String {
    match filename {
        Some(name) => format!("{}:{}", name, location),
        None => location.to_string(),
    }
}

impl LexError {
    /// Create a new lexer error
    pub fn new(kind: LexErrorKind, location: SourceLocation) -> Self {
        Self {
            kind,
            location,
            filename: None,
        }
    }

    /// Attach the name of the file the input came from
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Byte offset of the offending character
    pub fn offset(&self) -> usize {
        self.location.offset
    }

    /// Short label for the error category
    pub fn label(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedString => "Unterminated String",
            LexErrorKind::UnterminatedComment => "Unterminated Comment",
            LexErrorKind::InvalidCharacter(_) => "Invalid Character",
            LexErrorKind::MalformedNumber(_) => "Malformed Number",
            LexErrorKind::InvalidEscapeSequence(_) => "Invalid Escape Sequence",
        }
    }
}

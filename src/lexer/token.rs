//! Token definitions for the Ember language
//!
//! This module defines all token kinds used in lexical analysis.

use crate::error::{SourceLocation, Span};
use std::fmt;

/// A token in the Ember language
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text covered by the token
    pub lexeme: String,
    /// Decoded value for literal tokens
    pub literal: Option<Literal>,
    pub span: Span,
    /// Position of the token's first character
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(
        kind: TokenKind,
        lexeme: String,
        literal: Option<Literal>,
        span: Span,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            span,
            location,
        }
    }

    /// Create the end-of-input marker at the given location
    pub fn eof(location: SourceLocation) -> Self {
        Self::new(
            TokenKind::Eof,
            String::new(),
            None,
            Span::new(location.offset, location.offset),
            location,
        )
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Token kinds in the Ember language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Integer,
    Float,
    String,
    Boolean,

    // Identifiers and keywords
    Identifier,
    Keyword(Keyword),

    // Arithmetic
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Percent,    // %

    // Comparison
    EqEq,           // ==
    NotEq,          // !=
    Less,           // <
    LessEq,         // <=
    Greater,        // >
    GreaterEq,      // >=

    // Logical
    AndAnd,     // &&
    OrOr,       // ||
    Bang,       // !

    // Bitwise
    Ampersand,  // &
    Pipe,       // |
    Caret,      // ^
    Tilde,      // ~
    Shl,        // <<
    Shr,        // >>

    // Assignment
    Assign,         // =
    ColonAssign,    // :=
    PlusAssign,     // +=
    MinusAssign,    // -=
    StarAssign,     // *=
    SlashAssign,    // /=
    PercentAssign,  // %=
    ShlAssign,      // <<=
    ShrAssign,      // >>=

    // Delimiters
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]
    Comma,          // ,
    Dot,            // .
    DotDot,         // ..
    DotDotDot,      // ...
    DotDotEq,       // ..=
    Colon,          // :
    ColonColon,     // ::
    Semicolon,      // ;
    Question,       // ?
    Hash,           // #
    Arrow,          // ->
    FatArrow,       // =>

    // Special
    Eof,
}

impl TokenKind {
    /// Whether this kind carries a decoded literal value
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::String | Self::Boolean
        )
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }
}

/// Keywords in the Ember language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Bindings
    Let,
    Mut,
    Const,

    // Functions
    Fn,
    Return,

    // Control flow
    If,
    Else,
    While,
    For,
    In,
    Loop,
    Break,
    Continue,
    Match,

    // Types
    Struct,
    Enum,
    Nil,

    // Logical operators (also keywords)
    And,
    Or,
    Not,

    // Modules
    Import,
}

impl Keyword {
    /// Every reserved word, in declaration order
    pub const ALL: [Keyword; 21] = [
        Self::Let,
        Self::Mut,
        Self::Const,
        Self::Fn,
        Self::Return,
        Self::If,
        Self::Else,
        Self::While,
        Self::For,
        Self::In,
        Self::Loop,
        Self::Break,
        Self::Continue,
        Self::Match,
        Self::Struct,
        Self::Enum,
        Self::Nil,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Import,
    ];

    /// Look up a reserved word by its exact spelling
    pub fn lookup(s: &str) -> Option<Self> {
        match s {
            "let" => Some(Self::Let),
            "mut" => Some(Self::Mut),
            "const" => Some(Self::Const),
            "fn" => Some(Self::Fn),
            "return" => Some(Self::Return),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            "for" => Some(Self::For),
            "in" => Some(Self::In),
            "loop" => Some(Self::Loop),
            "break" => Some(Self::Break),
            "continue" => Some(Self::Continue),
            "match" => Some(Self::Match),
            "struct" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            "nil" => Some(Self::Nil),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "not" => Some(Self::Not),
            "import" => Some(Self::Import),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Mut => "mut",
            Self::Const => "const",
            Self::Fn => "fn",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::In => "in",
            Self::Loop => "loop",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Match => "match",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Nil => "nil",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Import => "import",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Boolean => write!(f, "boolean"),
            Self::Identifier => write!(f, "identifier"),
            Self::Keyword(kw) => write!(f, "keyword '{}'", kw),
            Self::Eof => write!(f, "EOF"),
            // Every remaining kind is a fixed symbol from the operator table.
            other => match crate::lexer::tables::symbol_of(*other) {
                Some(symbol) => write!(f, "'{}'", symbol),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::lookup("let"), Some(Keyword::Let));
        assert_eq!(Keyword::lookup("fn"), Some(Keyword::Fn));
        assert_eq!(Keyword::lookup("import"), Some(Keyword::Import));
        assert_eq!(Keyword::lookup("invalid"), None);
        // Lookup is exact: case and prefixes matter
        assert_eq!(Keyword::lookup("Let"), None);
        assert_eq!(Keyword::lookup("lets"), None);
        // Boolean literals are not reserved words
        assert_eq!(Keyword::lookup("true"), None);
        assert_eq!(Keyword::lookup("false"), None);
    }

    #[test]
    fn test_keyword_round_trip() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::lookup(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Keyword(Keyword::While).to_string(), "keyword 'while'");
        assert_eq!(TokenKind::EqEq.to_string(), "'=='");
        assert_eq!(TokenKind::ShlAssign.to_string(), "'<<='");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_literal_kinds() {
        assert!(TokenKind::Integer.is_literal());
        assert!(TokenKind::Boolean.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(TokenKind::Keyword(Keyword::Nil).is_keyword());
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof(SourceLocation::new(7, 2, 3));
        assert!(token.is_eof());
        assert_eq!(token.lexeme, "");
        assert_eq!(token.span, Span::new(7, 7));
    }
}

//! Lexer/Scanner implementation for the Ember language
//!
//! This module implements lexical analysis, converting source code into
//! tokens in a single left-to-right pass.
//!
//! The scanner is a deterministic state machine. Each state is one routine:
//! `next_token` is the start state, `scan_identifier`, `scan_number` (with
//! its fraction), `scan_string` and `scan_escape`, and the two comment
//! skippers in `skip_trivia`. Every routine returns to the start state after
//! emitting a token, or ends the scan with a `LexError`.

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::tables;
use super::token::{Keyword, Literal, Token, TokenKind};
use crate::error::{LexError, LexErrorKind, LexResult, NumberIssue, SourceLocation, Span};

/// Lexer for Ember source code
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// Byte offset where the current token starts
    start: usize,
    start_location: SourceLocation,
    filename: Option<String>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
            start_location: SourceLocation::start(),
            filename: None,
            finished: false,
        }
    }

    /// Tag errors from this lexer with the name of the input file
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Tokenize the whole input, ending with an `Eof` token
    pub fn tokenize(self) -> LexResult<Vec<Token>> {
        match self.tokenize_partial() {
            (tokens, None) => Ok(tokens),
            (_, Some(err)) => Err(err),
        }
    }

    /// Tokenize the input, keeping the tokens lexed before a failure
    ///
    /// On success the error is `None` and the tokens end with `Eof`.
    pub fn tokenize_partial(mut self) -> (Vec<Token>, Option<LexError>) {
        let mut tokens = Vec::new();
        for result in self.by_ref() {
            match result {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    debug!(error = %err, lexed = tokens.len(), "lexing failed");
                    return (tokens, Some(err));
                }
            }
        }
        debug!(count = tokens.len(), "lexing finished");
        (tokens, None)
    }

    /// Scan the next token
    ///
    /// Returns `Eof` for every call once the input is exhausted. After an
    /// error the lexer should be discarded.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_trivia()?;

        self.start = self.cursor.offset();
        self.start_location = self.cursor.location();

        let Some(c) = self.cursor.peek() else {
            return Ok(Token::eof(self.start_location));
        };

        let token = match c {
            '"' => self.scan_string()?,
            c if c.is_ascii_digit() => self.scan_number()?,
            c if is_ident_start(c) => self.scan_identifier(),
            c if tables::is_operator_start(c) => self.scan_operator(c)?,
            _ => return Err(self.error(LexErrorKind::InvalidCharacter(c), self.start_location)),
        };

        trace!(kind = ?token.kind, lexeme = %token.lexeme, at = %token.location, "token");
        Ok(token)
    }

    /// Skip whitespace, line comments and (nested) block comments
    fn skip_trivia(&mut self) -> LexResult<()> {
        loop {
            match (self.cursor.peek(), self.cursor.peek_next()) {
                (Some(' ' | '\t' | '\r' | '\n'), _) => {
                    self.cursor.advance();
                }
                (Some('/'), Some('/')) => self.cursor.eat_while(|c| c != '\n'),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self) -> LexResult<()> {
        let opening = self.cursor.location();
        self.cursor.bump_ascii(2);
        let mut depth = 1usize;

        while depth > 0 {
            match (self.cursor.peek(), self.cursor.peek_next()) {
                (None, _) => return Err(self.error(LexErrorKind::UnterminatedComment, opening)),
                (Some('/'), Some('*')) => {
                    self.cursor.bump_ascii(2);
                    depth += 1;
                }
                (Some('*'), Some('/')) => {
                    self.cursor.bump_ascii(2);
                    depth -= 1;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }

        Ok(())
    }

    /// Scan an identifier, keyword or boolean literal
    fn scan_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let lexeme = self.cursor.slice_from(self.start);

        if let Some(keyword) = Keyword::lookup(lexeme) {
            return self.make_token(TokenKind::Keyword(keyword), None);
        }

        match lexeme {
            "true" => self.make_token(TokenKind::Boolean, Some(Literal::Boolean(true))),
            "false" => self.make_token(TokenKind::Boolean, Some(Literal::Boolean(false))),
            _ => self.make_token(TokenKind::Identifier, None),
        }
    }

    /// Scan an integer or float literal
    ///
    /// A `.` is only part of the number when a digit follows it, so `1.`
    /// lexes as `1` then `.`.
    fn scan_number(&mut self) -> LexResult<Token> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let is_float = self.at_fraction();
        if is_float {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|c| c.is_ascii_digit());

            if self.at_fraction() {
                let kind = LexErrorKind::MalformedNumber(NumberIssue::MultipleDecimalPoints);
                return Err(self.error(kind, self.cursor.location()));
            }
        }

        if let Some(c) = self.cursor.peek().filter(|&c| is_ident_start(c)) {
            let kind = LexErrorKind::MalformedNumber(NumberIssue::InvalidSuffix(c));
            return Err(self.error(kind, self.cursor.location()));
        }

        let lexeme = self.cursor.slice_from(self.start);
        if is_float {
            let value = lexeme.parse::<f64>().map_err(|_| {
                self.error(
                    LexErrorKind::MalformedNumber(NumberIssue::InvalidFloat),
                    self.start_location,
                )
            })?;
            Ok(self.make_token(TokenKind::Float, Some(Literal::Float(value))))
        } else {
            let value = lexeme.parse::<i64>().map_err(|_| {
                self.error(
                    LexErrorKind::MalformedNumber(NumberIssue::Overflow),
                    self.start_location,
                )
            })?;
            Ok(self.make_token(TokenKind::Integer, Some(Literal::Integer(value))))
        }
    }

    /// Whether the cursor sits on a `.` that starts a fractional part
    fn at_fraction(&self) -> bool {
        self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
    }

    /// Scan a string literal
    fn scan_string(&mut self) -> LexResult<Token> {
        let opening = self.cursor.location();
        self.cursor.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.cursor.peek() {
                None => return Err(self.error(LexErrorKind::UnterminatedString, opening)),
                Some('"') => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => value.push(self.scan_escape(opening)?),
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }

        Ok(self.make_token(TokenKind::String, Some(Literal::String(value))))
    }

    /// Decode one escape sequence, starting at the backslash
    fn scan_escape(&mut self, opening: SourceLocation) -> LexResult<char> {
        let backslash = self.cursor.location();
        self.cursor.advance();

        let Some(c) = self.cursor.advance() else {
            return Err(self.error(LexErrorKind::UnterminatedString, opening));
        };

        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '0' => Ok('\0'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            'u' => self.scan_unicode_escape(backslash, opening),
            other => Err(self.error(LexErrorKind::InvalidEscapeSequence(other), backslash)),
        }
    }

    /// Decode the `{XXXX}` part of a `\u{XXXX}` escape
    fn scan_unicode_escape(
        &mut self,
        backslash: SourceLocation,
        opening: SourceLocation,
    ) -> LexResult<char> {
        let invalid = self.error(LexErrorKind::InvalidEscapeSequence('u'), backslash);

        if !self.cursor.eat('{') {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString, opening));
            }
            return Err(invalid);
        }

        let digits_start = self.cursor.offset();
        self.cursor.eat_while(|c| c.is_ascii_hexdigit());
        let digits = self.cursor.slice_from(digits_start);

        if self.cursor.is_at_end() {
            return Err(self.error(LexErrorKind::UnterminatedString, opening));
        }
        if !self.cursor.eat('}') || digits.is_empty() || digits.len() > 6 {
            return Err(invalid);
        }

        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or(invalid)
    }

    /// Scan the longest operator at the cursor
    fn scan_operator(&mut self, c: char) -> LexResult<Token> {
        match tables::match_operator(self.cursor.rest()) {
            Some((symbol, kind)) => {
                self.cursor.bump_ascii(symbol.len());
                Ok(self.make_token(kind, None))
            }
            None => Err(self.error(LexErrorKind::InvalidCharacter(c), self.start_location)),
        }
    }

    /// Build a token spanning from the token start to the cursor
    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.start).to_string(),
            literal,
            Span::new(self.start, self.cursor.offset()),
            self.start_location,
        )
    }

    fn error(&self, kind: LexErrorKind, location: SourceLocation) -> LexError {
        let err = LexError::new(kind, location);
        match self.filename {
            Some(ref name) => err.with_filename(name.clone()),
            None => err,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields every token including the final `Eof`, or stops after the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match result {
            Ok(ref token) if !token.is_eof() => {}
            _ => self.finished = true,
        }
        Some(result)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

//! Character cursor over the input
//!
//! Holds all mutable scanning state: byte offset, line and column.

use crate::error::SourceLocation;

/// Forward-only cursor with one- and two-character lookahead
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current character, or `None` at end of input
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume one character, updating line and column
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume the current character if it equals `expected`
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Consume `n` bytes of ASCII text
    pub fn bump_ascii(&mut self, n: usize) {
        debug_assert!(self.rest().as_bytes()[..n].is_ascii());
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Unconsumed remainder of the input
    pub fn rest(&self) -> &'src str {
        &self.source[self.offset..]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.offset, self.line, self.column)
    }

    /// Input text from byte offset `start` up to the cursor
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_peek_and_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_next(), Some('b'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.advance(), Some('b'));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut cursor = Cursor::new("a\nbc");
        cursor.advance();
        assert_eq!(cursor.location(), SourceLocation::new(1, 1, 2));
        cursor.advance();
        assert_eq!(cursor.location(), SourceLocation::new(2, 2, 1));
        cursor.advance();
        assert_eq!(cursor.location(), SourceLocation::new(3, 2, 2));
    }

    #[test]
    fn test_multibyte_columns() {
        // Columns count characters, offsets count bytes.
        let mut cursor = Cursor::new("é!");
        cursor.advance();
        assert_eq!(cursor.location(), SourceLocation::new(2, 1, 2));
        assert_eq!(cursor.peek(), Some('!'));
    }

    #[test]
    fn test_eat_and_slice() {
        let mut cursor = Cursor::new("123abc");
        assert!(!cursor.eat('x'));
        cursor.eat_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.slice_from(0), "123");
        assert!(cursor.eat('a'));
        assert_eq!(cursor.rest(), "bc");
    }
}

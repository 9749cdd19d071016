//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. Besides the byte position
//! it counts consumed characters, which is what lexeme lengths are measured
//! in, and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// Lookahead never reads past the end of the source: every peek returns
/// `None` there instead of a sentinel character.
///
/// # Example
///
/// ```
/// use joosc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current(), Some('i'));
/// assert_eq!(cursor.advance(), Some('i'));
/// assert_eq!(cursor.current(), Some('n'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Number of characters consumed so far.
    consumed: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            consumed: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use joosc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek(0), Some('<'));
    /// assert_eq!(cursor.peek(1), Some('='));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining().as_bytes();
        // Fast path for ASCII (most common case): the first `offset + 1`
        // bytes are all single-byte characters.
        if rest.len() > offset && rest[..=offset].is_ascii() {
            return Some(rest[offset] as char);
        }
        self.remaining().chars().nth(offset)
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing if
    /// already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        self.consumed += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use joosc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.eat('='));
    /// assert!(!cursor.eat('='));
    /// assert_eq!(cursor.current(), Some('>'));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.consumed;
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        self.consumed - start
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of characters consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the source text between byte `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use joosc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("class A");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "class");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.consumed(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_cursor_empty() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_cursor_line_tracking() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_cursor_multibyte() {
        let mut cursor = Cursor::new("é@");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.consumed(), 1);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current(), Some('@'));
    }

    #[test]
    fn test_cursor_peek_past_multibyte() {
        let cursor = Cursor::new("é=x");
        assert_eq!(cursor.peek(1), Some('='));
        assert_eq!(cursor.peek(2), Some('x'));
        assert_eq!(cursor.peek(3), None);
    }

    #[test]
    fn test_cursor_eat_while_counts_chars() {
        let mut cursor = Cursor::new("12345;");
        assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 5);
        assert_eq!(cursor.current(), Some(';'));
        assert_eq!(cursor.slice_from(0), "12345");
        assert_eq!(cursor.remaining(), ";");
    }
}

//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and its dispatch loop.

use joosc_util::Span;

use crate::chars::is_whitespace;
use crate::cursor::Cursor;
use crate::error::LexFault;
use crate::token::{Lexeme, LexemeKind};

/// Scanner for Joos source text.
///
/// The scanner turns source text into a stream of [`Lexeme`]s, one per call
/// to [`next_lexeme`](Scanner::next_lexeme). Faults do not stop it: they come
/// out as malformed lexemes and scanning continues right after them.
///
/// # Example
///
/// ```
/// use joosc_lex::{Keyword, LexemeKind, Scanner};
///
/// let mut scanner = Scanner::new("int x;");
/// let first = scanner.next_lexeme().unwrap();
/// assert_eq!(first.kind, LexemeKind::Keyword(Keyword::Int));
/// assert_eq!(scanner.count(), 2);
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current lexeme starts.
    pub(crate) token_start: usize,

    /// Characters consumed before the current lexeme.
    token_start_consumed: usize,

    /// Line number where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column number where the current lexeme starts (1-based).
    token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_consumed: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next lexeme, or `None` once only whitespace remains.
    ///
    /// Dispatch order: operators, separators, identifiers and keywords,
    /// numbers, quoted literals. Any other character is malformed.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        self.cursor.eat_while(is_whitespace);

        let c = self.cursor.current()?;
        self.token_start = self.cursor.position();
        self.token_start_consumed = self.cursor.consumed();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = if let Some(op) = self.scan_operator() {
            LexemeKind::Operator(op)
        } else if let Some(sep) = self.scan_separator() {
            LexemeKind::Separator(sep)
        } else if crate::chars::is_word_char(c) {
            self.scan_word()
        } else if crate::chars::is_digit(c) {
            self.scan_number()
        } else if crate::chars::is_quote(c) {
            self.scan_quoted(c)
        } else {
            self.cursor.advance();
            self.malformed(LexFault::UnrecognizedCharacter(c))
        };

        let lexeme = self.finish(kind);
        if let Some(fault) = lexeme.fault() {
            tracing::trace!(
                line = lexeme.span.line,
                column = lexeme.span.column,
                %fault,
                "malformed lexeme"
            );
        }
        Some(lexeme)
    }

    /// Wraps `fault` with the source text consumed for the current lexeme.
    pub(crate) fn malformed(&self, fault: LexFault) -> LexemeKind {
        LexemeKind::Malformed {
            fault,
            raw: self.cursor.slice_from(self.token_start).to_string(),
        }
    }

    fn finish(&self, kind: LexemeKind) -> Lexeme {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Lexeme::new(kind, span, self.cursor.consumed() - self.token_start_consumed)
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns true once every remaining character is whitespace.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.remaining().chars().all(is_whitespace)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

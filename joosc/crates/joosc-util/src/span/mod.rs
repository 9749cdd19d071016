//! Span module - Source location tracking.
//!
//! A [`Span`] is a byte range into one source file together with the
//! 1-based line and column of its first character. Byte offsets are what the
//! scanner advances over; line and column are what people read in an error
//! report.
//!
//! # Examples
//!
//! ```
//! use joosc_util::span::{FileId, Span};
//!
//! let span = Span::new(8, 9, 1, 9);
//! assert_eq!(span.len(), 1);
//!
//! let span = Span::with_file(8, 9, FileId(0), 1, 9);
//! assert_eq!(span.file_id, FileId(0));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A dummy FileId for spans that are not attached to a file yet
    pub const DUMMY: FileId = FileId(0);

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// `start..end` is a half-open byte range; `line` and `column` locate
/// `start` (both 1-based, column counted in characters).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use joosc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Re-attach this span to another file.
    #[inline]
    pub fn in_file(self, file_id: FileId) -> Self {
        Self { file_id, ..self }
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if `offset` lies inside the span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Line and column are taken from whichever span starts first.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
            file_id: self.file_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(3, 7, 1, 4);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::DUMMY.is_empty());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(3, 7, 1, 4);
        assert!(span.contains(3));
        assert!(span.contains(6));
        assert!(!span.contains(7));
        assert!(!span.contains(2));
    }

    #[test]
    fn test_span_merge_keeps_first_position() {
        let a = Span::new(10, 12, 2, 3);
        let b = Span::new(4, 6, 1, 5);
        let merged = a.merge(b);
        assert_eq!(merged.start, 4);
        assert_eq!(merged.end, 12);
        assert_eq!((merged.line, merged.column), (1, 5));
    }

    #[test]
    fn test_in_file() {
        let span = Span::new(0, 1, 1, 1).in_file(FileId(3));
        assert_eq!(span.file_id, FileId(3));
        assert_eq!(span.file_id.index(), 3);
    }
}

//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing source files
//! and rendering a [`Span`] back into the line it came from.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A single source file with precomputed line starts.
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a source file, indexing the start of every line.
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// File identifier inside its source map.
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Display name (usually the path the file was read from).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full file content.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting a trailing partial line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 0-based `line` starts.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset into a 1-based (line, column) pair.
    ///
    /// The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let col = self
            .content
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or_else(|| offset.saturating_sub(line_start));
        (line + 1, col + 1)
    }

    /// Text of the line containing `offset`, without its line terminator.
    pub fn line_at_offset(&self, offset: usize) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(offset);
        self.line_at(line)
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let line_content = self.content.get(start..end)?;
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Extract `start..end`, validating bounds and character boundaries.
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }

        self.content.get(start..end).ok_or_else(|| {
            SourceMapError::ExtractFailed("Range is not on character boundaries".to_string())
        })
    }

    /// Extract the text a span covers.
    pub fn snippet(&self, span: Span) -> SourceMapResult<&str> {
        self.extract_range(span.start, span.end)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// Collection of all source files of one session.
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create an empty source map.
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file and return its id.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Look up a file.
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Look up a file, failing with [`SourceMapError::FileNotFound`].
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.files
            .get(id.0)
            .cloned()
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Number of files in the map.
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span as a location header, the source line and a caret
    /// underline:
    ///
    /// ```text
    /// --> Main.java:1:10
    ///   1 | int x = 5@;
    ///     |          ^
    /// ```
    ///
    /// Spans reaching past the end of their first line are underlined up to
    /// the end of that line.
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line_no = span.line as usize;
        let line = file.line_at(line_no)?;
        let line_start = file.line_start(line_no - 1)?;
        let width = line_no.to_string().len().max(3);

        let underline_start = (span.column as usize).saturating_sub(1);
        let line_end = line_start + line.len();
        let underline_len = file
            .content()
            .get(span.start.min(line_end)..span.end.min(line_end))
            .map(|covered| covered.chars().count())
            .unwrap_or(0)
            .max(1);

        let mut result = String::new();
        result.push_str(&format!("--> {}:{}:{}\n", file.name(), span.line, span.column));
        result.push_str(&format!("{:>width$} | {}\n", line_no, line, width = width));
        result.push_str(&format!("{:>width$} | ", "", width = width));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        Some(result)
    }
}

//! joosc-util - Core Utilities and Foundation Types
//!
//! Shared foundation for the joosc crates:
//!
//! - [`span`] - source locations ([`Span`], [`FileId`]) and the [`SourceMap`]
//!   that turns byte offsets back into lines for error reports
//! - [`diagnostic`] - diagnostics, stable diagnostic codes and the
//!   [`Handler`] that collects them
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use joosc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceMap, Span};
//!
//! let mut sources = SourceMap::new();
//! let file = sources.add_file("Main.java", "int x = 5@;");
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::with_file(9, 10, file, 1, 10))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Spans are copied into every lexeme and diagnostic.
static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(SourceMap: Send, Sync);

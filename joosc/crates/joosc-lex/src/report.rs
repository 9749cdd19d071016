//! Turning lexical faults into diagnostics.

use joosc_util::{Diagnostic, DiagnosticBuilder, Handler, SourceFile, SourceSnippet};

use crate::error::{faults, LexError};
use crate::token::Lexeme;

impl LexError {
    /// Build the diagnostic for this fault, with a snippet when `file` is
    /// the source it was scanned from.
    pub fn to_diagnostic(&self, file: Option<&SourceFile>) -> Diagnostic {
        let mut builder = DiagnosticBuilder::error(self.fault.to_string())
            .code(self.fault.code())
            .span(self.span);
        if let Some(snippet) = file.and_then(|f| SourceSnippet::from_span(f, self.span)) {
            builder = builder.snippet(snippet);
        }
        if let Some(help) = self.fault.help() {
            builder = builder.help(help);
        }
        builder.build()
    }
}

/// Emit one error diagnostic per malformed lexeme and return how many were
/// emitted.
///
/// # Example
///
/// ```
/// use joosc_lex::{report, scan};
/// use joosc_util::Handler;
///
/// let handler = Handler::new();
/// let lexemes = scan("int x = 5@;");
/// assert_eq!(report::emit_diagnostics(&lexemes, &handler), 1);
/// assert_eq!(handler.diagnostics()[0].to_string(), "error[E1001]: unrecognized character '@'");
/// ```
pub fn emit_diagnostics(lexemes: &[Lexeme], handler: &Handler) -> usize {
    emit(lexemes, None, handler)
}

/// Like [`emit_diagnostics`], attaching the offending source line from `file`.
pub fn emit_diagnostics_in(file: &SourceFile, lexemes: &[Lexeme], handler: &Handler) -> usize {
    emit(lexemes, Some(file), handler)
}

fn emit(lexemes: &[Lexeme], file: Option<&SourceFile>, handler: &Handler) -> usize {
    let mut emitted = 0;
    for error in faults(lexemes) {
        handler.emit_diagnostic(error.to_diagnostic(file));
        emitted += 1;
    }
    if emitted > 0 {
        tracing::debug!(faults = emitted, "reported lexical faults");
    }
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use joosc_util::DiagnosticCode;

    #[test]
    fn test_no_diagnostics_for_clean_input() {
        let handler = Handler::new();
        assert_eq!(emit_diagnostics(&scan("int x = 5;"), &handler), 0);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_diagnostics_in_source_order() {
        let handler = Handler::new();
        let lexemes = scan("@ 'ab' \"\\q\"");
        assert_eq!(emit_diagnostics(&lexemes, &handler), 3);
        let codes: Vec<_> = handler
            .diagnostics()
            .iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(
            codes,
            vec![
                Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
                Some(DiagnosticCode::E_LEXER_OVERLONG_CHAR),
                Some(DiagnosticCode::E_LEXER_INVALID_ESCAPE),
            ]
        );
    }

    #[test]
    fn test_diagnostic_help_and_span() {
        let handler = Handler::new();
        emit_diagnostics(&scan("char c = 'ab';"), &handler);
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.span.start, 9);
        assert_eq!(diag.span.column, 10);
        assert_eq!(diag.helps, vec!["use a string literal for more than one character"]);
    }

    #[test]
    fn test_diagnostics_with_snippet() {
        let source = "int a;\nint x = 5@;";
        let file = SourceFile::new(0, "Main.java", source);
        let handler = Handler::new();
        emit_diagnostics_in(&file, &scan(source), &handler);
        let rendered = handler.diagnostics()[0].to_string();
        assert_eq!(
            rendered,
            "error[E1001]: unrecognized character '@'\n  2 | int x = 5@;\n    |          ^"
        );
    }
}

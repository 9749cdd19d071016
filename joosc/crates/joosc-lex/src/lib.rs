//! joosc-lex - Scanner for the Joos language
//!
//! This crate turns Joos source text into an ordered sequence of classified
//! [`Lexeme`]s for a downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use joosc_lex::{scan, Keyword, LexemeKind, Operator, Separator};
//!
//! let lexemes = scan("int x = 5;");
//! let kinds: Vec<_> = lexemes.into_iter().map(|l| l.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         LexemeKind::Keyword(Keyword::Int),
//!         LexemeKind::Identifier("x".to_string()),
//!         LexemeKind::Operator(Operator::Assign),
//!         LexemeKind::Number(5),
//!         LexemeKind::Separator(Separator::Semicol),
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Lexeme, operator and separator definitions
//! - [`keyword`] - Reserved words
//! - [`lexer`] - The scanner
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification and escape decoding
//! - [`error`] - Lexical faults
//! - [`report`] - Faults as diagnostics
//!
//! # Lexeme Categories
//!
//! ## Operators
//!
//! `= == != + - * / % <= < >= > ! && || & |`
//!
//! ## Separators
//!
//! `( ) { } [ ] ; . ,`
//!
//! ## Keywords and Identifiers
//!
//! Maximal runs of ASCII letters. Runs found in the reserved word list
//! (including `true`, `false` and `null`) are keywords.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`
//! - **String**: `"hello\n"`
//! - **Character**: `'a'`, `'\0'`
//!
//! Escapes are `\b \t \n \f \r` and a single octal digit `\0` to `\7`.
//!
//! ## Malformed
//!
//! Input the scanner cannot classify. Malformed lexemes are data: they
//! record a [`LexFault`] and the scan carries on behind them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod report;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{faults, has_malformed, LexError, LexErrors, LexFault};
pub use keyword::Keyword;
pub use lexer::Scanner;
pub use token::{Lexeme, LexemeKind, Operator, Separator, SemanticValue};

/// Result of a scan that fails on any fault.
pub type ScanOutput = Result<Vec<Lexeme>, LexErrors>;

/// Scans the whole source.
///
/// Never fails: faults come back as malformed lexemes in their place.
pub fn scan(source: &str) -> Vec<Lexeme> {
    let lexemes: Vec<Lexeme> = Scanner::new(source).collect();
    tracing::debug!(
        bytes = source.len(),
        lexemes = lexemes.len(),
        "scanned source"
    );
    lexemes
}

/// Scans the whole source and fails if any lexeme is malformed.
///
/// # Example
///
/// ```
/// use joosc_lex::{scan_checked, LexFault};
///
/// assert_eq!(scan_checked("x = 1;").unwrap().len(), 4);
///
/// let errors = scan_checked("x = 1@ #;").unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().fault, LexFault::UnrecognizedCharacter('@'));
/// ```
pub fn scan_checked(source: &str) -> ScanOutput {
    let lexemes = scan(source);
    match LexErrors::from_lexemes(&lexemes) {
        Some(errors) => Err(errors),
        None => Ok(lexemes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<LexemeKind> {
        scan(source).into_iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_declaration() {
        let lexemes = scan_checked("int x = 5;").unwrap();
        assert_eq!(lexemes.len(), 5);
        assert_eq!(lexemes[3].semantic_value(), Some(SemanticValue::Number(5)));
    }

    #[test]
    fn test_unrecognized_in_declaration() {
        let lexemes = scan("int x = 5@;");
        assert!(has_malformed(&lexemes));
        assert_eq!(
            lexemes[4].kind,
            LexemeKind::Malformed {
                fault: LexFault::UnrecognizedCharacter('@'),
                raw: "@".into()
            }
        );
        assert_eq!(lexemes[5].kind, LexemeKind::Separator(Separator::Semicol));
    }

    #[test]
    fn test_malformed_run() {
        let kinds = kinds("@ # int");
        assert_eq!(kinds.len(), 3);
        assert_eq!(kinds[2], LexemeKind::Keyword(Keyword::Int));
        let raws: Vec<_> = faults(&scan("@ # int")).map(|e| e.raw).collect();
        assert_eq!(raws, vec!["@", "#"]);
    }

    #[test]
    fn test_class_declaration() {
        let kinds = kinds("public class A { public A() {} }");
        assert_eq!(kinds[0], LexemeKind::Keyword(Keyword::Public));
        assert_eq!(kinds[1], LexemeKind::Keyword(Keyword::Class));
        assert_eq!(kinds[2], LexemeKind::Identifier("A".into()));
        assert_eq!(kinds[3], LexemeKind::Separator(Separator::LBrace));
        assert_eq!(kinds.len(), 11);
        assert!(kinds.iter().all(|k| !k.is_malformed()));
    }

    #[test]
    fn test_expression() {
        assert_eq!(
            kinds("a<=b&&!c"),
            vec![
                LexemeKind::Identifier("a".into()),
                LexemeKind::Operator(Operator::Leq),
                LexemeKind::Identifier("b".into()),
                LexemeKind::Operator(Operator::And),
                LexemeKind::Operator(Operator::Not),
                LexemeKind::Identifier("c".into()),
            ]
        );
    }

    #[test]
    fn test_literal_keywords() {
        assert_eq!(
            kinds("true false null"),
            vec![
                LexemeKind::Keyword(Keyword::True),
                LexemeKind::Keyword(Keyword::False),
                LexemeKind::Keyword(Keyword::Null),
            ]
        );
    }

    #[test]
    fn test_scan_checked_collects_every_fault() {
        let errors = scan_checked("'' 'ab' \"open").unwrap_err();
        let faults: Vec<_> = errors.iter().map(|e| e.fault.clone()).collect();
        assert_eq!(
            faults,
            vec![
                LexFault::EmptyCharacterLiteral,
                LexFault::OverlongCharacterLiteral { chars: 2 },
                LexFault::UnterminatedLiteral { quote: '"' },
            ]
        );
    }
}

//! Lexical faults.
//!
//! A fault never stops the scan: it is recorded inside a
//! [`LexemeKind::Malformed`](crate::LexemeKind::Malformed) lexeme and scanning
//! resumes after it. [`LexError`] and [`LexErrors`] lift those faults out of a
//! lexeme sequence for callers that want all-or-nothing results.

use std::fmt;

use joosc_util::{DiagnosticCode, Span};
use thiserror::Error;

use crate::token::Lexeme;

/// What went wrong in a malformed lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexFault {
    /// A character that starts no lexeme.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),

    /// A backslash followed by something other than `b t n f r` or `0`-`7`.
    #[error("invalid escape sequence '\\{}'", .0.escape_default())]
    InvalidEscapeSequence(char),

    /// A character literal decoding to more than one character.
    #[error("character literal holds {chars} characters")]
    OverlongCharacterLiteral {
        /// Number of decoded characters.
        chars: usize,
    },

    /// `''`
    #[error("empty character literal")]
    EmptyCharacterLiteral,

    /// Input ended before the closing quote.
    #[error("unterminated {} literal", literal_name(.quote))]
    UnterminatedLiteral {
        /// The opening quote.
        quote: char,
    },

    /// A digit run that does not fit in 64 bits.
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
}

fn literal_name(quote: &char) -> &'static str {
    if *quote == '\'' {
        "character"
    } else {
        "string"
    }
}

impl LexFault {
    /// Stable diagnostic code for this fault.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexFault::UnrecognizedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexFault::InvalidEscapeSequence(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexFault::OverlongCharacterLiteral { .. } => DiagnosticCode::E_LEXER_OVERLONG_CHAR,
            LexFault::EmptyCharacterLiteral => DiagnosticCode::E_LEXER_EMPTY_CHAR,
            LexFault::UnterminatedLiteral { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL,
            LexFault::IntegerOverflow => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// A suggestion for fixing the fault, where one is meaningful.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexFault::UnrecognizedCharacter(_) => None,
            LexFault::InvalidEscapeSequence(_) => {
                Some("valid escapes are \\b \\t \\n \\f \\r and \\0 through \\7")
            }
            LexFault::OverlongCharacterLiteral { .. } => {
                Some("use a string literal for more than one character")
            }
            LexFault::EmptyCharacterLiteral => Some("a character literal holds exactly one character"),
            LexFault::UnterminatedLiteral { quote } => {
                if *quote == '\'' {
                    Some("add a closing `'`")
                } else {
                    Some("add a closing `\"`")
                }
            }
            LexFault::IntegerOverflow => Some("the largest integer literal is 18446744073709551615"),
        }
    }
}

/// One fault together with where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{fault} at {}:{}", .span.line, .span.column)]
pub struct LexError {
    /// The fault.
    pub fault: LexFault,
    /// Span of the malformed lexeme.
    pub span: Span,
    /// Raw source text of the malformed lexeme.
    pub raw: String,
}

/// Every fault of one scan, in source order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexErrors(Vec<LexError>);

impl LexErrors {
    /// Collects the faults of `lexemes`, or `None` if there are none.
    pub fn from_lexemes(lexemes: &[Lexeme]) -> Option<Self> {
        let errors: Vec<LexError> = faults(lexemes).collect();
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// The first fault in source order.
    pub fn first(&self) -> &LexError {
        &self.0[0]
    }

    /// Number of faults.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no faults.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the faults.
    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.0.iter()
    }

    /// Take the faults out.
    pub fn into_vec(self) -> Vec<LexError> {
        self.0
    }
}

impl fmt::Display for LexErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.len() {
            1 => write!(f, "{}", self.first()),
            n => write!(f, "{} (and {} more lexical errors)", self.first(), n - 1),
        }
    }
}

impl std::error::Error for LexErrors {}

impl IntoIterator for LexErrors {
    type Item = LexError;
    type IntoIter = std::vec::IntoIter<LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LexErrors {
    type Item = &'a LexError;
    type IntoIter = std::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Returns true if any lexeme is malformed.
pub fn has_malformed(lexemes: &[Lexeme]) -> bool {
    lexemes.iter().any(Lexeme::is_malformed)
}

/// The faults of `lexemes`, in source order.
pub fn faults(lexemes: &[Lexeme]) -> impl Iterator<Item = LexError> + '_ {
    lexemes.iter().filter_map(Lexeme::to_error)
}

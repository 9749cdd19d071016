//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! Codes follow the format `{prefix}{number:04}`. Lexical errors live in the
//! `E1xxx` range.
//!
//! # Examples
//!
//! ```
//! use joosc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_ESCAPE;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1005);
//! assert_eq!(code.as_str(), "E1005");
//! ```

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Format as `E1001`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Unrecognized character in source
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// String or character literal never closed
    pub const E_LEXER_UNTERMINATED_LITERAL: Self = Self::new("E", 1002);
    /// Integer literal that does not fit the literal type
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// Backslash followed by a character that is not an escape
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1005);
    /// Character literal holding more than one character
    pub const E_LEXER_OVERLONG_CHAR: Self = Self::new("E", 1006);
    /// Character literal holding no character
    pub const E_LEXER_EMPTY_CHAR: Self = Self::new("E", 1007);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Lexeme definitions.
//!
//! A [`Lexeme`] is what one scan step produces: its [`LexemeKind`], the
//! [`Span`] it covers and the number of source characters it consumed.
//! Operators, separators and keywords are closed enums so consumers can match
//! on them exhaustively.

use std::fmt;

use joosc_util::Span;

use crate::error::{LexError, LexFault};
use crate::keyword::Keyword;

/// An operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `<=`
    Leq,
    /// `<`
    Lt,
    /// `>=`
    Geq,
    /// `>`
    Gt,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
}

impl Operator {
    /// The operator's source text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Eq => "==",
            Operator::Neq => "!=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Leq => "<=",
            Operator::Lt => "<",
            Operator::Geq => ">=",
            Operator::Gt => ">",
            Operator::Not => "!",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
        }
    }

    /// The operator's token class name, e.g. `ASSIGN`.
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Assign => "ASSIGN",
            Operator::Eq => "EQ",
            Operator::Neq => "NEQ",
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mult => "MULT",
            Operator::Div => "DIV",
            Operator::Mod => "MOD",
            Operator::Leq => "LEQ",
            Operator::Lt => "LT",
            Operator::Geq => "GEQ",
            Operator::Gt => "GT",
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::BitAnd => "BIT_AND",
            Operator::BitOr => "BIT_OR",
        }
    }
}

/// How one leading character becomes an operator.
///
/// `double` is tried by one character of lookahead before falling back to
/// `single`.
#[derive(Clone, Copy, Debug)]
pub struct OperatorRule {
    /// The character that selects this rule.
    pub lead: char,
    /// The operator when the lookahead does not complete a two-character form.
    pub single: Operator,
    /// Second character and resulting operator of the two-character form.
    pub double: Option<(char, Operator)>,
}

/// Dispatch table for operators, checked before separators.
pub const OPERATOR_RULES: &[OperatorRule] = &[
    OperatorRule { lead: '=', single: Operator::Assign, double: Some(('=', Operator::Eq)) },
    OperatorRule { lead: '!', single: Operator::Not, double: Some(('=', Operator::Neq)) },
    OperatorRule { lead: '<', single: Operator::Lt, double: Some(('=', Operator::Leq)) },
    OperatorRule { lead: '>', single: Operator::Gt, double: Some(('=', Operator::Geq)) },
    OperatorRule { lead: '&', single: Operator::BitAnd, double: Some(('&', Operator::And)) },
    OperatorRule { lead: '|', single: Operator::BitOr, double: Some(('|', Operator::Or)) },
    OperatorRule { lead: '+', single: Operator::Add, double: None },
    OperatorRule { lead: '-', single: Operator::Sub, double: None },
    OperatorRule { lead: '*', single: Operator::Mult, double: None },
    OperatorRule { lead: '/', single: Operator::Div, double: None },
    OperatorRule { lead: '%', single: Operator::Mod, double: None },
];

impl OperatorRule {
    /// Finds the rule whose lead character is `c`.
    pub fn lookup(c: char) -> Option<&'static OperatorRule> {
        OPERATOR_RULES.iter().find(|rule| rule.lead == c)
    }
}

/// A separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `;`
    Semicol,
    /// `.`
    Dot,
    /// `,`
    Comma,
}

impl Separator {
    /// Maps a single character to its separator.
    pub const fn from_char(c: char) -> Option<Separator> {
        match c {
            '(' => Some(Separator::LParen),
            ')' => Some(Separator::RParen),
            '{' => Some(Separator::LBrace),
            '}' => Some(Separator::RBrace),
            '[' => Some(Separator::LBrack),
            ']' => Some(Separator::RBrack),
            ';' => Some(Separator::Semicol),
            '.' => Some(Separator::Dot),
            ',' => Some(Separator::Comma),
            _ => None,
        }
    }

    /// The separator's source character.
    pub const fn as_char(self) -> char {
        match self {
            Separator::LParen => '(',
            Separator::RParen => ')',
            Separator::LBrace => '{',
            Separator::RBrace => '}',
            Separator::LBrack => '[',
            Separator::RBrack => ']',
            Separator::Semicol => ';',
            Separator::Dot => '.',
            Separator::Comma => ',',
        }
    }

    /// The separator's token class name, e.g. `SEMICOL`.
    pub const fn name(self) -> &'static str {
        match self {
            Separator::LParen => "LPAREN",
            Separator::RParen => "RPAREN",
            Separator::LBrace => "LBRACE",
            Separator::RBrace => "RBRACE",
            Separator::LBrack => "LBRACK",
            Separator::RBrack => "RBRACK",
            Separator::Semicol => "SEMICOL",
            Separator::Dot => "DOT",
            Separator::Comma => "COMMA",
        }
    }
}

/// The classification of a lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexemeKind {
    /// An operator such as `==` or `&`.
    Operator(Operator),
    /// A separator such as `;`.
    Separator(Separator),
    /// A reserved word, including `true`, `false` and `null`.
    Keyword(Keyword),
    /// A run of ASCII letters that is not a keyword.
    Identifier(String),
    /// A non-negative decimal integer.
    Number(u64),
    /// A string literal with its escapes decoded.
    StringLiteral(String),
    /// A character literal with its escape decoded.
    CharLiteral(char),
    /// Input that could not be scanned; `raw` is the source slice consumed.
    Malformed {
        /// What went wrong.
        fault: LexFault,
        /// The raw source text covered by this lexeme.
        raw: String,
    },
}

impl LexemeKind {
    /// Token class name used in listings, e.g. `ASSIGN` or `IDENTIFIER`.
    pub fn name(&self) -> &'static str {
        match self {
            LexemeKind::Operator(op) => op.name(),
            LexemeKind::Separator(sep) => sep.name(),
            LexemeKind::Keyword(_) => "KEYWORD",
            LexemeKind::Identifier(_) => "IDENTIFIER",
            LexemeKind::Number(_) => "NUMBER",
            LexemeKind::StringLiteral(_) => "STRING",
            LexemeKind::CharLiteral(_) => "CHAR",
            LexemeKind::Malformed { .. } => "MALFORMED",
        }
    }

    /// Returns true for [`LexemeKind::Malformed`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, LexemeKind::Malformed { .. })
    }
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexemeKind::Operator(_) | LexemeKind::Separator(_) => f.write_str(self.name()),
            LexemeKind::Keyword(kw) => write!(f, "KEYWORD({})", kw),
            LexemeKind::Identifier(name) => write!(f, "IDENTIFIER({})", name),
            LexemeKind::Number(n) => write!(f, "NUMBER({})", n),
            LexemeKind::StringLiteral(s) => write!(f, "STRING({:?})", s),
            LexemeKind::CharLiteral(c) => write!(f, "CHAR({:?})", c),
            LexemeKind::Malformed { raw, .. } => write!(f, "MALFORMED({:?})", raw),
        }
    }
}

/// The payload a lexeme carries beyond its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemanticValue<'a> {
    /// Keyword, identifier, string or malformed text.
    Text(&'a str),
    /// Integer value.
    Number(u64),
    /// Decoded character.
    Char(char),
}

/// One scanned lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// What was scanned.
    pub kind: LexemeKind,
    /// Byte range and start position in the source.
    pub span: Span,
    /// Characters consumed, including quotes and escape backslashes.
    pub consumed_length: usize,
}

impl Lexeme {
    /// Create a lexeme.
    pub fn new(kind: LexemeKind, span: Span, consumed_length: usize) -> Self {
        Self {
            kind,
            span,
            consumed_length,
        }
    }

    /// Returns true if this lexeme records a lexical fault.
    pub fn is_malformed(&self) -> bool {
        self.kind.is_malformed()
    }

    /// The payload, absent for operators and separators.
    ///
    /// # Example
    ///
    /// ```
    /// use joosc_lex::{scan, SemanticValue};
    ///
    /// let lexemes = scan("x = 5;");
    /// assert_eq!(lexemes[0].semantic_value(), Some(SemanticValue::Text("x")));
    /// assert_eq!(lexemes[1].semantic_value(), None);
    /// assert_eq!(lexemes[2].semantic_value(), Some(SemanticValue::Number(5)));
    /// ```
    pub fn semantic_value(&self) -> Option<SemanticValue<'_>> {
        match &self.kind {
            LexemeKind::Operator(_) | LexemeKind::Separator(_) => None,
            LexemeKind::Keyword(kw) => Some(SemanticValue::Text(kw.as_str())),
            LexemeKind::Identifier(text) | LexemeKind::StringLiteral(text) => {
                Some(SemanticValue::Text(text))
            }
            LexemeKind::Number(n) => Some(SemanticValue::Number(*n)),
            LexemeKind::CharLiteral(c) => Some(SemanticValue::Char(*c)),
            LexemeKind::Malformed { raw, .. } => Some(SemanticValue::Text(raw)),
        }
    }

    /// The fault recorded by a malformed lexeme.
    pub fn fault(&self) -> Option<&LexFault> {
        match &self.kind {
            LexemeKind::Malformed { fault, .. } => Some(fault),
            _ => None,
        }
    }

    /// The fault of a malformed lexeme as a standalone error.
    pub fn to_error(&self) -> Option<LexError> {
        match &self.kind {
            LexemeKind::Malformed { fault, raw } => Some(LexError {
                fault: fault.clone(),
                span: self.span,
                raw: raw.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\t{}", self.span.line, self.span.column, self.kind)
    }
}

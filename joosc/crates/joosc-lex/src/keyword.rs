//! Reserved words.
//!
//! The keyword set is consulted after an identifier run has been scanned to
//! its full length, so `classify` is an identifier and never `class` followed
//! by `ify`.

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// A reserved word. Matching is case-sensitive.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in alphabetical order of the reserved words
            /// followed by the literal words.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// The exact source text of the keyword.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// Looks up a fully scanned identifier run.
            pub fn from_ident(text: &str) -> Option<Keyword> {
                match text {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    Abstract => "abstract",
    Boolean => "boolean",
    Break => "break",
    Byte => "byte",
    Case => "case",
    Catch => "catch",
    Char => "char",
    Class => "class",
    Const => "const",
    Continue => "continue",
    Default => "default",
    Do => "do",
    Double => "double",
    Else => "else",
    Extends => "extends",
    Final => "final",
    Finally => "finally",
    Float => "float",
    For => "for",
    Goto => "goto",
    If => "if",
    Implements => "implements",
    Import => "import",
    Instanceof => "instanceof",
    Int => "int",
    Interface => "interface",
    Long => "long",
    Native => "native",
    New => "new",
    Package => "package",
    Private => "private",
    Protected => "protected",
    Public => "public",
    Return => "return",
    Short => "short",
    Static => "static",
    Strictfp => "strictfp",
    Super => "super",
    Switch => "switch",
    Synchronized => "synchronized",
    This => "this",
    Throw => "throw",
    Throws => "throws",
    Transient => "transient",
    Try => "try",
    Void => "void",
    Volatile => "volatile",
    While => "while",
    True => "true",
    False => "false",
    Null => "null",
}

impl Keyword {
    /// Returns true for `true`, `false` and `null`.
    pub const fn is_literal(self) -> bool {
        matches!(self, Keyword::True | Keyword::False | Keyword::Null)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

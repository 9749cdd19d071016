//! Character classification for the scanner.
//!
//! Classification is ASCII-only: any character outside the classes below is
//! either literal content or an unrecognized character.

/// Returns true for the characters skipped between lexemes: space, tab,
/// line feed and carriage return.
///
/// # Example
///
/// ```
/// use joosc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\t'));
/// assert!(!is_whitespace('\u{c}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Returns true if `c` can start or continue an identifier or keyword.
///
/// Identifiers are runs of ASCII letters only; digits and `_` end them.
///
/// # Example
///
/// ```
/// use joosc_lex::chars::is_word_char;
///
/// assert!(is_word_char('Q'));
/// assert!(!is_word_char('_'));
/// assert!(!is_word_char('1'));
/// assert!(!is_word_char('é'));
/// ```
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `c` is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` opens a string or character literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Decodes the character following a backslash inside a literal.
///
/// `b t n f r` map to their control characters and a single octal digit maps
/// to the character with that code point. Anything else is not an escape.
///
/// # Example
///
/// ```
/// use joosc_lex::chars::decode_escape;
///
/// assert_eq!(decode_escape('n'), Some('\n'));
/// assert_eq!(decode_escape('7'), Some('\u{7}'));
/// assert_eq!(decode_escape('8'), None);
/// assert_eq!(decode_escape('\\'), None);
/// ```
pub fn decode_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'f' => Some('\u{c}'),
        'r' => Some('\r'),
        '0'..='7' => c.to_digit(8).and_then(char::from_u32),
        _ => None,
    }
}

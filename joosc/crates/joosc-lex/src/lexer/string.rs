//! String and character literal scanning.
//!
//! Both literal forms share one loop: the opening quote is consumed, content
//! is decoded up to the matching quote, and escapes are resolved with
//! [`decode_escape`]. Line breaks are ordinary content.

use crate::chars::decode_escape;
use crate::error::LexFault;
use crate::token::LexemeKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a literal opened by `quote` (`"` or `'`).
    ///
    /// The consumed length is the number of decoded characters plus one per
    /// escape plus both quotes. An invalid escape ends the lexeme right after
    /// the two escape characters; running out of input makes the lexeme cover
    /// the rest of the source.
    pub fn scan_quoted(&mut self, quote: char) -> LexemeKind {
        self.cursor.advance();
        let mut content = String::new();

        loop {
            let Some(c) = self.cursor.advance() else {
                return self.malformed(LexFault::UnterminatedLiteral { quote });
            };

            if c == quote {
                break;
            }

            if c != '\\' {
                content.push(c);
                continue;
            }

            let Some(escaped) = self.cursor.advance() else {
                return self.malformed(LexFault::UnterminatedLiteral { quote });
            };
            match decode_escape(escaped) {
                Some(decoded) => content.push(decoded),
                None => return self.malformed(LexFault::InvalidEscapeSequence(escaped)),
            }
        }

        if quote == '"' {
            return LexemeKind::StringLiteral(content);
        }

        let mut chars = content.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => LexemeKind::CharLiteral(c),
            (None, _) => self.malformed(LexFault::EmptyCharacterLiteral),
            (Some(_), Some(_)) => self.malformed(LexFault::OverlongCharacterLiteral {
                chars: content.chars().count(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexFault;
    use crate::token::{LexemeKind, Separator};
    use crate::Scanner;

    fn first(source: &str) -> (LexemeKind, usize) {
        Scanner::new(source)
            .next()
            .map(|l| (l.kind, l.consumed_length))
            .unwrap()
    }

    fn fault_of(kind: &LexemeKind) -> &LexFault {
        match kind {
            LexemeKind::Malformed { fault, .. } => fault,
            other => panic!("expected malformed lexeme, got {:?}", other),
        }
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(first("\"hello\""), (LexemeKind::StringLiteral("hello".into()), 7));
        assert_eq!(first("\"\""), (LexemeKind::StringLiteral(String::new()), 2));
    }

    #[test]
    fn test_string_escape_length() {
        // 6 source characters: " a \ n b "
        assert_eq!(first("\"a\\nb\""), (LexemeKind::StringLiteral("a\nb".into()), 6));
    }

    #[test]
    fn test_every_valid_escape() {
        let (kind, len) = first(r#""\b\t\n\f\r\0\7""#);
        assert_eq!(
            kind,
            LexemeKind::StringLiteral("\u{8}\t\n\u{c}\r\u{0}\u{7}".into())
        );
        assert_eq!(len, 7 + 7 + 2);
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(first("'a'"), (LexemeKind::CharLiteral('a'), 3));
        assert_eq!(first("'\\t'"), (LexemeKind::CharLiteral('\t'), 4));
        assert_eq!(first("'\\3'"), (LexemeKind::CharLiteral('\u{3}'), 4));
        assert_eq!(first("'\"'"), (LexemeKind::CharLiteral('"'), 3));
    }

    #[test]
    fn test_overlong_char_literal() {
        let (kind, len) = first("'ab'");
        assert_eq!(len, 4);
        assert_eq!(fault_of(&kind), &LexFault::OverlongCharacterLiteral { chars: 2 });
        assert_eq!(
            kind,
            LexemeKind::Malformed {
                fault: LexFault::OverlongCharacterLiteral { chars: 2 },
                raw: "'ab'".into()
            }
        );
    }

    #[test]
    fn test_empty_char_literal() {
        let (kind, len) = first("''");
        assert_eq!(len, 2);
        assert_eq!(fault_of(&kind), &LexFault::EmptyCharacterLiteral);
    }

    #[test]
    fn test_invalid_escape_resumes_after_escape() {
        let lexemes: Vec<_> = Scanner::new("\"ab\\qcd\";").collect();
        assert_eq!(lexemes[0].consumed_length, 5);
        assert_eq!(
            lexemes[0].kind,
            LexemeKind::Malformed {
                fault: LexFault::InvalidEscapeSequence('q'),
                raw: "\"ab\\q".into()
            }
        );
        // `cd` is scanned as an identifier, then `";` opens an unterminated string.
        assert_eq!(lexemes[1].kind, LexemeKind::Identifier("cd".into()));
        assert_eq!(
            fault_of(&lexemes[2].kind),
            &LexFault::UnterminatedLiteral { quote: '"' }
        );
        assert_eq!(lexemes.len(), 3);
    }

    #[test]
    fn test_backslash_quote_is_invalid_escape() {
        let (kind, len) = first(r#""\"""#);
        assert_eq!(fault_of(&kind), &LexFault::InvalidEscapeSequence('"'));
        assert_eq!(len, 3);
        let (kind, _) = first(r"'\\'");
        assert_eq!(fault_of(&kind), &LexFault::InvalidEscapeSequence('\\'));
    }

    #[test]
    fn test_octal_escape_is_single_digit() {
        assert_eq!(
            first("\"\\12\""),
            (LexemeKind::StringLiteral("\u{1}2".into()), 5)
        );
        let (kind, _) = first("\"\\8\"");
        assert_eq!(fault_of(&kind), &LexFault::InvalidEscapeSequence('8'));
    }

    #[test]
    fn test_unterminated_string_covers_rest() {
        let lexemes: Vec<_> = Scanner::new("x = \"abc;\n y").collect();
        assert_eq!(lexemes.len(), 3);
        assert_eq!(lexemes[2].consumed_length, 8);
        assert_eq!(lexemes[2].span.end, 12);
        assert_eq!(
            fault_of(&lexemes[2].kind),
            &LexFault::UnterminatedLiteral { quote: '"' }
        );
    }

    #[test]
    fn test_unterminated_after_backslash() {
        let (kind, len) = first("'\\");
        assert_eq!(len, 2);
        assert_eq!(fault_of(&kind), &LexFault::UnterminatedLiteral { quote: '\'' });
    }

    #[test]
    fn test_newline_is_content() {
        let lexemes: Vec<_> = Scanner::new("\"a\nb\";").collect();
        assert_eq!(lexemes[0].kind, LexemeKind::StringLiteral("a\nb".into()));
        assert_eq!(lexemes[0].consumed_length, 5);
        assert_eq!(lexemes[1].kind, LexemeKind::Separator(Separator::Semicol));
        assert_eq!((lexemes[1].span.line, lexemes[1].span.column), (2, 3));
    }

    #[test]
    fn test_non_ascii_content() {
        let (kind, len) = first("\"héllo\"");
        assert_eq!(kind, LexemeKind::StringLiteral("héllo".into()));
        assert_eq!(len, 7);
    }
}

//! Identifier and keyword scanning.

use crate::chars::is_word_char;
use crate::keyword::Keyword;
use crate::token::LexemeKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a maximal run of ASCII letters and classifies it.
    ///
    /// The run is looked up in the keyword set only after it has been
    /// scanned to its full length.
    pub fn scan_word(&mut self) -> LexemeKind {
        self.cursor.eat_while(is_word_char);
        let text = self.cursor.slice_from(self.token_start);
        match Keyword::from_ident(text) {
            Some(kw) => LexemeKind::Keyword(kw),
            None => LexemeKind::Identifier(text.to_string()),
        }
    }
}

//! Integer literal scanning.

use crate::chars::is_digit;
use crate::error::LexFault;
use crate::token::LexemeKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a maximal run of decimal digits.
    ///
    /// Leading zeros are allowed and carry no meaning. A run that does not
    /// fit in a `u64` is malformed as a whole.
    pub fn scan_number(&mut self) -> LexemeKind {
        self.cursor.eat_while(is_digit);
        let digits = self.cursor.slice_from(self.token_start);
        match digits.parse::<u64>() {
            Ok(value) => LexemeKind::Number(value),
            Err(_) => self.malformed(LexFault::IntegerOverflow),
        }
    }
}

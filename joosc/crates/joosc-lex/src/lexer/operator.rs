//! Operator and separator scanning.
//!
//! Two-character operators win over their one-character prefix: the lead
//! character is consumed and one character of lookahead decides.

use crate::token::{Operator, OperatorRule, Separator};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an operator at the cursor, consuming nothing if there is none.
    ///
    /// Handles: `= == ! != < <= > >= & && | || + - * / %`
    pub fn scan_operator(&mut self) -> Option<Operator> {
        let rule = OperatorRule::lookup(self.cursor.current()?)?;
        self.cursor.advance();
        match rule.double {
            Some((follow, double)) if self.cursor.eat(follow) => Some(double),
            _ => Some(rule.single),
        }
    }

    /// Scans a separator at the cursor, consuming nothing if there is none.
    ///
    /// Handles: `( ) { } [ ] ; . ,`
    pub fn scan_separator(&mut self) -> Option<Separator> {
        let sep = Separator::from_char(self.cursor.current()?)?;
        self.cursor.advance();
        Some(sep)
    }
}

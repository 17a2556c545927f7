//! `expect*`: the `eat*` family with a [`ScanError`] instead of `false`.

use super::Cursor;
use crate::error::{Found, ScanError};

impl Cursor<'_> {
    /// What is at the cursor, for error messages.
    pub fn found(&self) -> Found {
        if self.is_empty() {
            Found::EndOfInput
        } else {
            Found::Rune(self.rune())
        }
    }

    /// Consume `v` or report what was there instead.
    pub fn expect(&mut self, v: &str) -> Result<(), ScanError> {
        if self.eat(v) {
            Ok(())
        } else {
            Err(self.error(format!("`{v}`")))
        }
    }

    /// Consume `v` ignoring case, or report what was there instead.
    pub fn expect_fold(&mut self, v: &str) -> Result<(), ScanError> {
        if self.eat_fold(v) {
            Ok(())
        } else {
            Err(self.error(format!("`{v}` (any case)")))
        }
    }

    /// Consume one rune from `set` and return it, or report what was there
    /// instead.
    pub fn expect_char(&mut self, set: &str) -> Result<char, ScanError> {
        let r = self.rune();
        if self.eat_char(set) {
            Ok(r)
        } else {
            Err(self.error(format!("one of `{set}`")))
        }
    }

    /// Consume one rune satisfying `pred` and return it, or report `what` was
    /// expected.
    pub fn expect_fn(
        &mut self,
        pred: impl FnOnce(char) -> bool,
        what: &str,
    ) -> Result<char, ScanError> {
        let r = self.rune();
        if self.eat_fn(pred) {
            Ok(r)
        } else {
            Err(self.error(what.to_owned()))
        }
    }

    fn error(&self, expected: String) -> ScanError {
        ScanError {
            expected,
            found: self.found(),
            pos: self.pos,
        }
    }
}

//! Single-step tests against the cursor position.
//!
//! `check*` methods only look. `eat*` methods run the matching `check*` and,
//! on success, advance past exactly what matched: the literal's byte length,
//! or one rune. On failure nothing is consumed.

use super::Cursor;
use crate::utf8::fold_eq;

impl Cursor<'_> {
    // === Checks (non-consuming) ===

    /// Returns `true` if the remaining bytes start with `v`.
    #[inline]
    pub fn check(&self, v: &str) -> bool {
        self.as_bytes().starts_with(v.as_bytes())
    }

    /// Returns `true` if the next `v.len()` bytes equal `v` ignoring case.
    ///
    /// Compares under Unicode simple case folding (see [`fold_eq`]).
    pub fn check_fold(&self, v: &str) -> bool {
        fold_eq(self.peek(v.len()), v.as_bytes())
    }

    /// Returns `true` if the current rune is any of the runes in `set`.
    ///
    /// Always `false` on an empty view.
    pub fn check_char(&self, set: &str) -> bool {
        self.has_more() && set.contains(self.rune())
    }

    /// Returns `true` if the current rune satisfies `pred`.
    ///
    /// `pred` is not called on an empty view.
    #[inline]
    pub fn check_fn(&self, pred: impl FnOnce(char) -> bool) -> bool {
        self.has_more() && pred(self.rune())
    }

    // === Eats (consume on match) ===

    /// Consume `v` if the remaining bytes start with it.
    #[inline]
    pub fn eat(&mut self, v: &str) -> bool {
        self.check(v) && self.advance(v.len())
    }

    /// Consume `v.len()` bytes if they equal `v` ignoring case.
    pub fn eat_fold(&mut self, v: &str) -> bool {
        self.check_fold(v) && self.advance(v.len())
    }

    /// Consume the current rune if it is any of the runes in `set`.
    pub fn eat_char(&mut self, set: &str) -> bool {
        self.check_char(set) && self.advance_char()
    }

    /// Consume the current rune if it satisfies `pred`.
    #[inline]
    pub fn eat_fn(&mut self, pred: impl FnOnce(char) -> bool) -> bool {
        self.check_fn(pred) && self.advance_char()
    }

    /// Consume one whitespace rune.
    pub fn eat_space(&mut self) -> bool {
        self.eat_fn(char::is_whitespace)
    }

    /// Consume a run of whitespace runes. Returns `true` if any were consumed.
    pub fn eat_spaces(&mut self) -> bool {
        self.eat_while_fn(char::is_whitespace)
    }
}

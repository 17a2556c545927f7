//! While/until combinators built from the single-step matches.
//!
//! Every combinator reports whether it made progress. None of them consume
//! anything on an empty view.

use super::Cursor;

impl Cursor<'_> {
    // === While ===

    /// Consume repeated copies of `v`. Returns `true` if at least one was
    /// consumed.
    ///
    /// An empty `v` makes no progress and returns `false`.
    pub fn eat_while(&mut self, v: &str) -> bool {
        if v.is_empty() {
            return false;
        }
        let mut advanced = false;
        while self.eat(v) {
            advanced = true;
        }
        advanced
    }

    /// Consume repeated copies of `v`, ignoring case. Returns `true` if at
    /// least one was consumed.
    ///
    /// An empty `v` makes no progress and returns `false`.
    pub fn eat_while_fold(&mut self, v: &str) -> bool {
        if v.is_empty() {
            return false;
        }
        let mut advanced = false;
        while self.eat_fold(v) {
            advanced = true;
        }
        advanced
    }

    /// Consume runes while they are in `set`. Returns `true` if any were
    /// consumed.
    pub fn eat_while_char(&mut self, set: &str) -> bool {
        let mut advanced = false;
        while self.eat_char(set) {
            advanced = true;
        }
        advanced
    }

    /// Consume runes while they satisfy `pred`. Returns `true` if any were
    /// consumed.
    pub fn eat_while_fn(&mut self, mut pred: impl FnMut(char) -> bool) -> bool {
        let mut advanced = false;
        while self.eat_fn(&mut pred) {
            advanced = true;
        }
        advanced
    }

    // === Until ===

    /// Consume runes up to (not including) the next occurrence of `v`, or to
    /// the end of the view. Returns `true` if anything was consumed.
    ///
    /// Uses `memmem` instead of stepping rune by rune. Both stop at the same
    /// place: `v` starts with an ASCII or leading byte, and neither can sit
    /// inside a rune the cursor would step over.
    pub fn eat_until(&mut self, v: &str) -> bool {
        let found = memchr::memmem::find(self.as_bytes(), v.as_bytes());
        self.skip_to(found)
    }

    /// Consume runes up to the next rune in `set`, or to the end of the view.
    /// Returns `true` if anything was consumed.
    ///
    /// Sets of one to three ASCII characters are searched with `memchr`.
    pub fn eat_until_char(&mut self, set: &str) -> bool {
        if set.is_ascii() {
            let rest = self.as_bytes();
            match *set.as_bytes() {
                [a] => return self.skip_to(memchr::memchr(a, rest)),
                [a, b] => return self.skip_to(memchr::memchr2(a, b, rest)),
                [a, b, c] => return self.skip_to(memchr::memchr3(a, b, c, rest)),
                _ => {}
            }
        }
        self.eat_until_fn(|r| set.contains(r))
    }

    /// Consume runes up to the next rune satisfying `pred`, or to the end of
    /// the view. Returns `true` if anything was consumed.
    pub fn eat_until_fn(&mut self, mut pred: impl FnMut(char) -> bool) -> bool {
        let mut advanced = false;
        while self.has_more() && !self.check_fn(&mut pred) {
            advanced |= self.advance_char();
        }
        advanced
    }

    /// Advance to the byte offset `found` (relative to the view), or to the
    /// end if there is none.
    fn skip_to(&mut self, found: Option<usize>) -> bool {
        let n = found.unwrap_or(self.len());
        self.pos += n;
        n > 0
    }
}

//! Scanning cursor over a borrowed byte buffer.
//!
//! A [`Cursor`] is a view of the not-yet-consumed suffix of a buffer. Every
//! consuming operation shrinks the view from the front, and every operation
//! that can fail either advances and returns `true` or returns `false` with
//! the view unchanged. Lexers compose these primitives without saving and
//! restoring state by hand; backtracking across several steps uses
//! [`mark()`](Cursor::mark) and [`move_to()`](Cursor::move_to).
//!
//! # Runes
//!
//! The buffer is read as UTF-8 but never required to be valid. Rune-level
//! operations decode with [`decode_rune`]: invalid bytes read as U+FFFD and
//! are stepped over one byte at a time, and an empty view reads as U+FFFD
//! with nothing to step over.

mod expect;
mod matching;
mod repeat;

use std::fmt;

use tracing::trace;

use crate::utf8::decode_rune;

/// Scanning cursor over a borrowed byte buffer.
///
/// The cursor is [`Copy`]: a mark is just an earlier copy, and taking one
/// costs nothing. Two cursors compare equal when they view the same buffer
/// contents at the same offset.
///
/// # Invariant
///
/// `pos <= buf.len()`. The remaining view is `buf[pos..]`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The whole buffer, including the consumed prefix.
    buf: &'a [u8],
    /// Byte offset of the first unconsumed byte.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    // === View ===

    /// The remaining, unconsumed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Number of bytes left to scan.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if there is nothing left to scan.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Returns `true` if there is at least one byte left to scan.
    ///
    /// The opposite of [`is_empty()`](Self::is_empty); reads better as a loop
    /// condition.
    #[inline]
    pub fn has_more(&self) -> bool {
        !self.is_empty()
    }

    /// Byte offset from the start of the buffer.
    ///
    /// Lexers use this for spans and error positions. It only means something
    /// relative to other cursors over the same buffer.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    // === Bytes and runes ===

    /// Returns the next `n` bytes without advancing.
    ///
    /// If fewer than `n` bytes remain, returns all of them.
    #[inline]
    pub fn peek(&self, n: usize) -> &'a [u8] {
        let rest = self.as_bytes();
        &rest[..n.min(rest.len())]
    }

    /// Returns the byte at the current position, or `0x00` when empty.
    ///
    /// An interior NUL also returns `0x00`; use [`is_empty()`](Self::is_empty)
    /// to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.as_bytes().first().copied().unwrap_or(0)
    }

    /// Returns the rune at the current position without advancing.
    ///
    /// Returns [`char::REPLACEMENT_CHARACTER`] when the view is empty or
    /// starts with invalid UTF-8.
    #[inline]
    pub fn rune(&self) -> char {
        decode_rune(self.as_bytes()).0
    }

    /// Advance by `n` bytes.
    ///
    /// Fails, leaving the cursor unchanged, if fewer than `n` bytes remain.
    #[inline]
    pub fn advance(&mut self, n: usize) -> bool {
        if self.len() < n {
            return false;
        }
        self.pos += n;
        true
    }

    /// Advance by the UTF-8 width of `r`.
    ///
    /// The width comes from `r` itself, not from the buffer. Use this when the
    /// caller already knows which rune is next, e.g. after [`rune()`](Self::rune).
    #[inline]
    pub fn advance_rune(&mut self, r: char) -> bool {
        self.advance(r.len_utf8())
    }

    /// Advance past the current rune.
    ///
    /// Steps one byte over invalid UTF-8. Returns `false` only when the view
    /// is empty.
    #[inline]
    pub fn advance_char(&mut self) -> bool {
        let (_, width) = decode_rune(self.as_bytes());
        width > 0 && self.advance(width)
    }

    /// Returns the next `n` bytes (clamped like [`peek()`](Self::peek)) and
    /// advances past them.
    #[inline]
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let taken = self.peek(n);
        self.pos += taken.len();
        taken
    }

    // === Marks ===

    /// Snapshot the current position.
    #[inline]
    #[must_use]
    pub fn mark(&self) -> Cursor<'a> {
        *self
    }

    /// Rewind (or jump) to a previously taken mark.
    ///
    /// Everything consumed since the mark becomes visible again.
    pub fn move_to(&mut self, mark: Cursor<'a>) {
        trace!(from = self.pos, to = mark.pos, "rewind");
        *self = mark;
    }

    /// Bytes consumed between `mark` and the current position.
    ///
    /// Computed from lengths alone: the first
    /// `mark.len().saturating_sub(self.len())` bytes of the mark's view. For a
    /// mark that this cursor did not descend from, the result is safe but
    /// meaningless.
    #[inline]
    pub fn delta(&self, mark: Cursor<'a>) -> &'a [u8] {
        let n = mark.len().saturating_sub(self.len());
        &mark.as_bytes()[..n]
    }

    /// Text consumed between `mark` and the current position.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn text(&self, mark: Cursor<'a>) -> String {
        String::from_utf8_lossy(self.delta(mark)).into_owned()
    }

    /// Run `step` and capture what it consumed.
    ///
    /// If `step` returns `true`, `out` is replaced with the text consumed since
    /// the call began and `true` is returned. Otherwise `out` is left as it was
    /// and `false` is returned; whatever `step` consumed before failing stays
    /// consumed, so steps should be single `eat*` calls or rewind themselves.
    pub fn text_with(&mut self, out: &mut String, step: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.mark();
        if !step(self) {
            return false;
        }
        out.clear();
        out.push_str(&String::from_utf8_lossy(self.delta(mark)));
        trace!(start = mark.pos, end = self.pos, "capture");
        true
    }

    // === Lines ===

    /// Returns `true` at a line boundary: the next rune is `\r` or `\n`, or
    /// the view is empty.
    #[inline]
    pub fn at_line_edge(&self) -> bool {
        matches!(self.as_bytes().first(), None | Some(b'\r' | b'\n'))
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

/// Renders the remaining view, replacing invalid UTF-8 with U+FFFD.
impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("rest", &String::from_utf8_lossy(self.as_bytes()))
            .finish_non_exhaustive()
    }
}

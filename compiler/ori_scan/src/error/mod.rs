//! Errors for the `expect*` layer of the cursor.
//!
//! The scanning primitives themselves never fail; they report `false` and
//! leave the view untouched. [`ScanError`] exists for callers that want a
//! ready-made "expected X, found Y at byte N" message on top of them.

use std::fmt;

/// What the cursor was looking at when an expectation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Found {
    /// The rune at the cursor (U+FFFD for invalid UTF-8).
    Rune(char),
    /// The view was empty.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Rune(c) => write!(f, "{c:?}"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A failed `expect*` call on a [`Cursor`](crate::Cursor).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found} at byte {pos}")]
pub struct ScanError {
    /// Human-readable description of what was expected.
    pub expected: String,
    /// What was actually there.
    pub found: Found,
    /// Byte offset of the cursor from the start of its buffer.
    pub pos: usize,
}

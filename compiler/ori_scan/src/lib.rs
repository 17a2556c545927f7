//! Byte-view scanning cursor for hand-written lexers and parsers.
//!
//! This crate is standalone: it knows nothing about Ori tokens or grammar.
//! It provides the layer underneath them, a [`Cursor`] that peeks, matches
//! and advances through a borrowed buffer by byte, by rune, by literal or by
//! predicate, and that can be marked and rewound for backtracking and
//! capture.
//!
//! # Contract
//!
//! Every consuming operation either advances strictly forward and reports
//! success, or reports failure and leaves the cursor exactly as it was.
//! Nothing panics on empty input or invalid UTF-8.
//!
//! ```
//! use ori_scan::Cursor;
//!
//! let mut c = Cursor::from("let x = 42;");
//! assert!(c.eat("let"));
//! c.eat_spaces();
//!
//! let mut name = String::new();
//! assert!(c.text_with(&mut name, |c| c.eat_while_fn(char::is_alphanumeric)));
//! assert_eq!(name, "x");
//!
//! c.eat_spaces();
//! assert!(c.expect("=").is_ok());
//! c.eat_spaces();
//!
//! let start = c.mark();
//! c.eat_while_fn(|r| r.is_ascii_digit());
//! assert_eq!(c.text(start), "42");
//! assert_eq!(c.to_string(), ";");
//! ```

mod cursor;
mod error;
mod utf8;

pub use cursor::Cursor;
pub use error::{Found, ScanError};
pub use utf8::{decode_rune, fold_eq};

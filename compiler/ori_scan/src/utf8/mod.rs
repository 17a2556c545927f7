//! UTF-8 decoding for the scanning cursor.
//!
//! The cursor never trusts its input to be valid UTF-8. Decoding is total:
//! every byte sequence, including the empty one, decodes to *some* rune and
//! a width, so callers can branch on the width instead of handling errors.

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Uses the leading byte to determine character width:
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Decode the rune at the start of `bytes`.
///
/// Returns the rune and its width in bytes:
/// - a valid scalar value yields itself and its encoded width (1–4);
/// - an invalid, overlong, surrogate or truncated sequence yields
///   [`char::REPLACEMENT_CHARACTER`] with width 1, so that stepping by the
///   width always makes progress and resynchronises on the next byte;
/// - empty input yields [`char::REPLACEMENT_CHARACTER`] with width 0.
///
/// A literal U+FFFD in the input decodes as itself with width 3; only the
/// width tells it apart from an invalid byte.
#[inline]
pub fn decode_rune(bytes: &[u8]) -> (char, usize) {
    let Some(&lead) = bytes.first() else {
        return (char::REPLACEMENT_CHARACTER, 0);
    };
    if lead.is_ascii() {
        return (char::from(lead), 1);
    }

    let width = utf8_char_width(lead);
    let decoded = bytes
        .get(..width)
        .filter(|_| width > 1)
        .and_then(|seq| std::str::from_utf8(seq).ok())
        .and_then(|s| s.chars().next());

    match decoded {
        Some(c) => (c, width),
        None => (char::REPLACEMENT_CHARACTER, 1),
    }
}

/// Case-insensitive comparison of two UTF-8 byte strings.
///
/// Compares rune by rune under Unicode simple case folding, so `"Straße"`
/// equals `"STRAßE"` and the Kelvin sign equals `k`. Invalid sequences decode
/// to U+FFFD on both sides. Pure-ASCII inputs take a byte-wise fast path.
pub fn fold_eq(a: &[u8], b: &[u8]) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    let (mut a, mut b) = (a, b);
    loop {
        let (ra, wa) = decode_rune(a);
        let (rb, wb) = decode_rune(b);
        match (wa, wb) {
            (0, 0) => return true,
            (0, _) | (_, 0) => return false,
            _ => {}
        }
        if !rune_fold_eq(ra, rb) {
            return false;
        }
        a = &a[wa..];
        b = &b[wb..];
    }
}

/// Two runes are equal ignoring case if they agree after lowering or after
/// raising. Checking both directions catches one-way mappings such as the
/// Kelvin sign (lowers to `k`) and long s (raises to `S`).
///
/// Dotted capital I and dotless small i only fold under Turkic rules, which
/// simple case folding excludes, so they equal nothing but themselves.
fn rune_fold_eq(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if is_turkic_i(a) || is_turkic_i(b) {
        return false;
    }
    a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// U+0130 LATIN CAPITAL LETTER I WITH DOT ABOVE, U+0131 LATIN SMALL LETTER
/// DOTLESS I.
fn is_turkic_i(c: char) -> bool {
    matches!(c, '\u{130}' | '\u{131}')
}

#[cfg(test)]
mod tests;

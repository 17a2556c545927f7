use super::{decode_rune, fold_eq};
use pretty_assertions::assert_eq;

// === decode_rune ===

#[test]
fn decode_ascii() {
    assert_eq!(decode_rune(b"abc"), ('a', 1));
}

#[test]
fn decode_multibyte_widths() {
    assert_eq!(decode_rune("é".as_bytes()), ('é', 2));
    assert_eq!(decode_rune("世界".as_bytes()), ('世', 3));
    assert_eq!(decode_rune("\u{1F600}!".as_bytes()), ('\u{1F600}', 4));
}

#[test]
fn decode_empty_is_sentinel_with_zero_width() {
    assert_eq!(decode_rune(b""), (char::REPLACEMENT_CHARACTER, 0));
}

#[test]
fn decode_lone_continuation_byte() {
    assert_eq!(decode_rune(b"\x80abc"), (char::REPLACEMENT_CHARACTER, 1));
}

#[test]
fn decode_truncated_sequence() {
    // First two bytes of '世' (E4 B8 96).
    assert_eq!(decode_rune(b"\xE4\xB8"), (char::REPLACEMENT_CHARACTER, 1));
}

#[test]
fn decode_overlong_and_surrogate() {
    assert_eq!(decode_rune(b"\xC0\xAF"), (char::REPLACEMENT_CHARACTER, 1));
    assert_eq!(decode_rune(b"\xED\xA0\x80"), (char::REPLACEMENT_CHARACTER, 1));
}

#[test]
fn decode_out_of_range_lead() {
    assert_eq!(decode_rune(b"\xF5\x80\x80\x80"), (char::REPLACEMENT_CHARACTER, 1));
    assert_eq!(decode_rune(b"\xFF"), (char::REPLACEMENT_CHARACTER, 1));
}

#[test]
fn decode_literal_replacement_character() {
    assert_eq!(decode_rune("\u{FFFD}".as_bytes()), (char::REPLACEMENT_CHARACTER, 3));
}

// === fold_eq ===

#[test]
fn fold_eq_ascii() {
    assert!(fold_eq(b"Hello", b"hELLO"));
    assert!(!fold_eq(b"Hello", b"help"));
    assert!(!fold_eq(b"ab", b"abc"));
}

#[test]
fn fold_eq_empty() {
    assert!(fold_eq(b"", b""));
    assert!(!fold_eq(b"", b"a"));
}

#[test]
fn fold_eq_unicode() {
    assert!(fold_eq("ÀÉÎ".as_bytes(), "àéî".as_bytes()));
    assert!(fold_eq("ΣΑΣ".as_bytes(), "σασ".as_bytes()));
    assert!(!fold_eq("é".as_bytes(), "e".as_bytes()));
}

#[test]
fn fold_eq_one_way_mappings() {
    // KELVIN SIGN lowers to 'k'; LATIN SMALL LETTER LONG S raises to 'S'.
    assert!(fold_eq("\u{212A}".as_bytes(), b"k"));
    assert!(fold_eq("\u{17F}".as_bytes(), b"s"));
}

#[test]
fn fold_eq_turkic_i_only_equals_itself() {
    // Dotless i raises to 'I' and dotted I lowers to "i\u{307}", but neither
    // is a simple case fold.
    assert!(!fold_eq(b"I", "ı".as_bytes()));
    assert!(!fold_eq(b"i", "ı".as_bytes()));
    assert!(!fold_eq(b"i", "İ".as_bytes()));
    assert!(!fold_eq("iſ".as_bytes(), "ıs".as_bytes()));
    assert!(fold_eq("ıİ".as_bytes(), "ıİ".as_bytes()));
}

#[test]
fn fold_eq_invalid_bytes_compare_as_replacement() {
    assert!(fold_eq(b"a\xFF", b"A\x80"));
    assert!(!fold_eq(b"a\xFF", b"ab"));
}

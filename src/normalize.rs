//! Apostrophe canonicalization ahead of Latin-side digraph matching.
//!
//! Uzbek text in the wild writes the `o'`/`g'` modifier and the tutuq belgisi
//! with whatever glyph the keyboard produced. All variants collapse to the
//! ASCII apostrophe before lookup so `o'`, `o’`, and `oʻ` resolve to the same
//! rule. Zero-copy when the input already uses the canonical glyph.

use crate::script::Direction;
use memchr::memchr;
use std::borrow::Cow;

pub(crate) const CANONICAL_APOSTROPHE: char = '\'';

/// Apostrophe glyphs folded to [`CANONICAL_APOSTROPHE`]:
/// U+2018/U+2019 (single quotes), U+02BB (turned comma, the official
/// orthography glyph), U+02BC (modifier apostrophe), and the grave accent.
#[inline(always)]
pub(crate) fn is_apostrophe_variant(c: char) -> bool {
    matches!(c, '\u{2018}' | '\u{2019}' | '\u{02BB}' | '\u{02BC}' | '`')
}

/// Fast pre-scan: ASCII text can only contain the backtick variant, so a
/// single `memchr` pass decides; everything else falls back to a char scan.
#[inline]
fn needs_apply(text: &str) -> bool {
    if text.is_ascii() {
        return memchr(b'`', text.as_bytes()).is_some();
    }
    text.chars().any(is_apostrophe_variant)
}

/// Canonicalize input for the given conversion direction.
///
/// Cyrillic input has no apostrophe ambiguity, so the Cyrillic → Latin
/// direction is the identity. Pure and total: any input, including the empty
/// string, is valid.
pub fn normalize<'a>(text: &'a str, direction: Direction) -> Cow<'a, str> {
    if direction == Direction::CyrillicToLatin || !needs_apply(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_apostrophe_variant(c) { CANONICAL_APOSTROPHE } else { c })
            .collect(),
    )
}

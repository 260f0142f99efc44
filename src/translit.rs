//! Longest-match segmenting transliterator.
//!
//! A single deterministic left-to-right pass: at each position the two-character
//! digraph rules are tried before any single-character rule, then the cursor
//! advances by the matched length. Uzbek digraphs never overlap ambiguously with
//! single-letter sequences, so greedy matching needs no backtracking and no
//! lookahead beyond two characters. Characters outside the alphabet — digits,
//! punctuation, whitespace, borrowed Latin letters — are emitted verbatim;
//! conversion never drops content and never fails.
//!
//! Case: a matched single letter copies its case through per-case table keys.
//! For digraphs the first character decides upper vs lower output; the second
//! character's case is not independently representable on a single-character
//! target, so `SH` and `Sh` both come back from Cyrillic as `Sh`. This lossy
//! collapse is a documented property of the orthography pair, not a defect.

use crate::alphabet::{CYRILLIC_DIGRAPHS, CYRILLIC_SINGLE, LATIN_DIGRAPHS, LATIN_SINGLE};
use crate::normalize::normalize;
use crate::script::Direction;
use std::borrow::Cow;

/// Convert `text` between the two Uzbek orthographies.
///
/// Latin input is apostrophe-normalized first, so every variant glyph of
/// `o'qituvchi` yields the same Cyrillic output. Zero-copy when the input
/// contains nothing convertible.
pub fn transliterate<'a>(text: &'a str, direction: Direction) -> Cow<'a, str> {
    match direction {
        Direction::LatinToCyrillic => match normalize(text, direction) {
            Cow::Borrowed(s) => match convert_latin(s) {
                Some(out) => Cow::Owned(out),
                None => Cow::Borrowed(s),
            },
            Cow::Owned(s) => match convert_latin(&s) {
                Some(out) => Cow::Owned(out),
                None => Cow::Owned(s),
            },
        },
        Direction::CyrillicToLatin => match convert_cyrillic(text) {
            Some(out) => Cow::Owned(out),
            None => Cow::Borrowed(text),
        },
    }
}

/// Bare `c`/`C` sits outside the single-letter table but can open `ch`.
#[inline(always)]
fn is_convertible_latin(c: char) -> bool {
    LATIN_SINGLE.contains_key(&c) || matches!(c, 'c' | 'C')
}

// `None` means no rule fired anywhere; the caller keeps the input borrowed.
fn convert_latin(text: &str) -> Option<String> {
    if !text.chars().any(is_convertible_latin) {
        return None;
    }
    // ASCII source, two-byte Cyrillic target.
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    while let Some(c0) = chars.next() {
        if let Some(&c1) = chars.peek()
            && let Some(rule) = LATIN_DIGRAPHS.iter().find(|r| r.matches(c0, c1))
        {
            out.push_str(rule.cased(c0, c1));
            chars.next();
            continue;
        }
        match LATIN_SINGLE.get(&c0) {
            Some(&mapped) => out.push(mapped),
            None => out.push(c0),
        }
    }
    Some(out)
}

fn convert_cyrillic(text: &str) -> Option<String> {
    if !text.chars().any(|c| CYRILLIC_SINGLE.contains_key(&c)) {
        return None;
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c0) = chars.next() {
        if let Some(&c1) = chars.peek()
            && let Some(rule) = CYRILLIC_DIGRAPHS.iter().find(|r| r.matches(c0, c1))
        {
            out.push_str(rule.cased(c0, c1));
            chars.next();
            continue;
        }
        match CYRILLIC_SINGLE.get(&c0) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c0),
        }
    }
    Some(out)
}

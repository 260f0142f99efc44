//! Static Uzbek alphabet correspondence tables.
//!
//! Two read-only lookup structures, built at compile time and never mutated:
//! single-letter maps keyed by both case forms, and digraph rule slices scanned
//! longest-match-first by the transliterator. Restricted to the 29-letter core
//! alphabet plus the apostrophe consonant mark, the mapping is a total
//! bijection; the Cyrillic side additionally carries one-way renderings for the
//! Russian-era letters that still occur in Uzbek Cyrillic text.

pub mod data;

pub use data::{CYRILLIC_DIGRAPHS, CYRILLIC_SINGLE, LATIN_DIGRAPHS, LATIN_SINGLE};

/// A two-character grapheme rule.
///
/// `first`/`second` are the lowercase source characters; the three target forms
/// cover the case patterns a two-character match can carry. For single-character
/// targets `title` and `upper` coincide; they differ only for `ng` ⇄ `нг`, whose
/// target is itself two characters.
#[derive(Clone, Copy, Debug)]
pub struct DigraphRule {
    pub first: char,
    pub second: char,
    pub lower: &'static str,
    pub title: &'static str,
    pub upper: &'static str,
}

impl DigraphRule {
    /// Case-insensitive match against two source characters.
    #[inline(always)]
    pub fn matches(&self, c0: char, c1: char) -> bool {
        fold_char(c0) == self.first && fold_char(c1) == self.second
    }

    /// Target form for the matched pair. The first character's case decides
    /// between lower and upper output; the second only refines upper vs title.
    #[inline]
    pub fn cased(&self, c0: char, c1: char) -> &'static str {
        if c0.is_uppercase() {
            if c1.is_lowercase() { self.title } else { self.upper }
        } else {
            self.lower
        }
    }
}

/// Single-character lowercase fold for rule matching.
#[inline(always)]
pub(crate) fn fold_char(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

//! Localization façade over the transliterator.
//!
//! UI code authors every literal once, in Latin, and renders through [`t`].
//! The canonical script is a zero-cost passthrough — no normalization, no
//! table lookup, the borrow is returned as-is. [`Localizer`] adds the optional
//! memoization layer for callers that render the same literals repeatedly.

use crate::script::{Direction, Script};
use crate::translit::transliterate;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::RwLock;

/// Render a canonical (Latin) UI string in the requested script.
#[inline]
pub fn t<'a>(text: &'a str, target: Script) -> Cow<'a, str> {
    match target {
        Script::Latin => Cow::Borrowed(text),
        Script::Cyrillic => transliterate(text, Direction::LatinToCyrillic),
    }
}

/// Memoizing wrapper around [`t`].
///
/// The mapping is referentially transparent, so a cached rendering can never go
/// stale. Multiple callers may race to populate the same key; the value either
/// side computes is identical, so a lost race costs a duplicate computation and
/// nothing else. A poisoned lock degrades to recomputation for the same reason.
#[derive(Debug, Default)]
pub struct Localizer {
    cache: RwLock<HashMap<String, String>>,
}

impl Localizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same contract as [`t`]; Cyrillic renderings are computed once per
    /// distinct literal.
    pub fn t<'a>(&self, text: &'a str, target: Script) -> Cow<'a, str> {
        if target == Script::Latin {
            return Cow::Borrowed(text);
        }
        if let Ok(cache) = self.cache.read()
            && let Some(hit) = cache.get(text)
        {
            return Cow::Owned(hit.clone());
        }
        let rendered = transliterate(text, Direction::LatinToCyrillic).into_owned();
        if let Ok(mut cache) = self.cache.write() {
            tracing::debug!(literal = text, "caching cyrillic rendering");
            cache.entry(text.to_owned()).or_insert_with(|| rendered.clone());
        }
        Cow::Owned(rendered)
    }

    /// Number of distinct literals rendered so far.
    pub fn cached_count(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

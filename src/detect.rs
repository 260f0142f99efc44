//! Predominant-script classification.

use crate::script::Script;

#[inline(always)]
fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

/// Classify `text` as predominantly Latin or Cyrillic.
///
/// One linear pass tallying alphabetic characters; digits, punctuation,
/// whitespace, and letters of other scripts are ignored. Classification is by
/// Unicode range rather than table membership, so borrowed letters like `c`
/// (which occurs only inside `ch`) still count toward their script. Detection
/// is advisory: on a tie, including text with no alphabetic characters at all,
/// the caller's `current` script is returned rather than an engine default.
pub fn detect_script(text: &str, current: Script) -> Script {
    let mut latin = 0usize;
    let mut cyrillic = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            latin += 1;
        } else if is_cyrillic(c) && c.is_alphabetic() {
            cyrillic += 1;
        }
    }
    tracing::trace!(latin, cyrillic, fallback = %current, "script tally");
    match latin.cmp(&cyrillic) {
        std::cmp::Ordering::Greater => Script::Latin,
        std::cmp::Ordering::Less => Script::Cyrillic,
        std::cmp::Ordering::Equal => current,
    }
}

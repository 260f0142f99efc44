//! Script and direction selectors.
//!
//! The engine never keeps a "current script" of its own: every entry point takes
//! an explicit [`Script`] or [`Direction`] parameter, and preference persistence
//! stays in the caller. The loosely-typed stored token (`"latin"` /
//! `"cyrillic"`) is parsed once, at the boundary, by [`Script::from_stored_token`].

use thiserror::Error;

/// One of the two writing systems used to render Uzbek text.
///
/// `Latin` is the canonical authoring script: UI string literals are written in
/// it, and it is the default whenever a stored selector is absent or garbled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Script {
    #[default]
    Latin,
    Cyrillic,
}

/// Error from strict script-token parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unrecognized script token `{0}`")]
    UnknownToken(String),
}

impl Script {
    /// The token this script is persisted as.
    #[inline(always)]
    pub const fn code(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
        }
    }

    #[inline(always)]
    pub const fn opposite(self) -> Script {
        match self {
            Script::Latin => Script::Cyrillic,
            Script::Cyrillic => Script::Latin,
        }
    }

    /// Strict parse of a script token. Case-insensitive, no default.
    pub fn from_code(code: &str) -> Result<Script, ScriptError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "latin" => Ok(Script::Latin),
            "cyrillic" => Ok(Script::Cyrillic),
            _ => Err(ScriptError::UnknownToken(code.to_owned())),
        }
    }

    /// Lenient parse for tokens read back from client-side storage: absent or
    /// unrecognized tokens fall back to the canonical script.
    pub fn from_stored_token(token: Option<&str>) -> Script {
        match token {
            Some(code) => Script::from_code(code).unwrap_or_else(|err| {
                tracing::debug!(%err, "stored script token ignored, defaulting to latin");
                Script::Latin
            }),
            None => Script::Latin,
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Conversion direction for one transliteration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LatinToCyrillic,
    CyrillicToLatin,
}

impl Direction {
    /// The direction whose output is rendered in `target`.
    #[inline(always)]
    pub const fn into_script(target: Script) -> Direction {
        match target {
            Script::Cyrillic => Direction::LatinToCyrillic,
            Script::Latin => Direction::CyrillicToLatin,
        }
    }

    #[inline(always)]
    pub const fn source(self) -> Script {
        match self {
            Direction::LatinToCyrillic => Script::Latin,
            Direction::CyrillicToLatin => Script::Cyrillic,
        }
    }

    #[inline(always)]
    pub const fn target(self) -> Script {
        self.source().opposite()
    }
}

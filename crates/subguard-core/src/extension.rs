//! Filename extensions and subtitle format tokens.
//!
//! Every comparison in the crate uses one convention: no leading dot,
//! lowercase. Dotted forms (`.srt`) only appear in user-facing messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns the text after the last `.` in `name`, lowercased.
///
/// A name without any `.` yields the whole name lowercased, so `README`
/// becomes `readme` and is rejected like any other unknown extension.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => name.to_lowercase(),
    }
}

/// Extension of a filename that actually has one: the text after the last
/// `.`, lowercased. `None` when the name contains no `.` at all.
pub fn file_extension(name: &str) -> Option<String> {
    name.rfind('.').map(|idx| name[idx + 1..].to_lowercase())
}

/// Normalizes a format token from a form field or config entry.
///
/// Trims surrounding whitespace, strips one leading `.` and lowercases:
/// `.SRT`, `srt` and ` .srt ` all become `srt`.
pub fn normalize_format_token(token: &str) -> String {
    let token = token.trim();
    token.strip_prefix('.').unwrap_or(token).to_lowercase()
}

/// Renders a normalized extension for messages (`srt` -> `.srt`).
pub fn dotted(ext: &str) -> String {
    format!(".{ext}")
}

/// Subtitle formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

impl SubtitleFormat {
    /// Normalized extension without the dot.
    pub fn as_ext(self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }

    /// Extension with its leading dot, as shown to users.
    pub fn dotted(self) -> &'static str {
        match self {
            SubtitleFormat::Srt => ".srt",
            SubtitleFormat::Vtt => ".vtt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dotted())
    }
}

/// Token that does not name a known subtitle format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown subtitle format '{}'", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for SubtitleFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_format_token(s).as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" => Ok(SubtitleFormat::Vtt),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

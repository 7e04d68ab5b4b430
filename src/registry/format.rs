//! Stream container formats
//!
//! The set of formats is closed. Identifiers are matched exactly, with no
//! case folding or prefix matching, so a typo in a configuration source is
//! reported instead of silently mapped to something else.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Container format of a configured stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamFormat {
    /// Not set, or set to something unsupported
    #[default]
    Invalid,
    /// Ogg (Vorbis, Opus, Theora, ...)
    Ogg,
    /// MPEG-1 Audio Layer III
    Mp3,
    /// WebM
    Webm,
    /// Matroska
    Matroska,
}

/// Canonical identifier table, one row per valid format
static FORMATS: [(StreamFormat, &str); 4] = [
    (StreamFormat::Ogg, "ogg"),
    (StreamFormat::Mp3, "mp3"),
    (StreamFormat::Webm, "webm"),
    (StreamFormat::Matroska, "matroska"),
];

impl StreamFormat {
    /// Canonical identifier, or `None` for [`StreamFormat::Invalid`]
    pub fn as_str(self) -> Option<&'static str> {
        FORMATS
            .iter()
            .find(|(format, _)| *format == self)
            .map(|(_, name)| *name)
    }

    /// Whether this is one of the supported formats
    pub fn is_valid(self) -> bool {
        self != StreamFormat::Invalid
    }

    /// All supported formats in catalog order
    pub fn all() -> impl Iterator<Item = StreamFormat> {
        FORMATS.iter().map(|(format, _)| *format)
    }
}

/// Returned when a string is not a canonical format identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognizedFormat;

impl fmt::Display for UnrecognizedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized stream format")
    }
}

impl std::error::Error for UnrecognizedFormat {}

impl From<UnrecognizedFormat> for ConfigError {
    fn from(_: UnrecognizedFormat) -> Self {
        ConfigError::UnsupportedFormat
    }
}

impl FromStr for StreamFormat {
    type Err = UnrecognizedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMATS
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(format, _)| *format)
            .ok_or(UnrecognizedFormat)
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

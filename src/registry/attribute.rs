//! Stream attribute names
//!
//! Configuration sources address stream settings by key. This maps those
//! keys onto the entry setters so a loader does not need its own table.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// A settable attribute of a stream entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamAttribute {
    Format,
    Encoder,
    Mountpoint,
    Intake,
    Server,
    Public,
    StreamName,
    StreamUrl,
    StreamGenre,
    StreamDescription,
    StreamQuality,
    StreamBitrate,
    StreamSamplerate,
    StreamChannels,
    LanguageTag,
}

static KEYS: [(StreamAttribute, &str); 15] = [
    (StreamAttribute::Format, "format"),
    (StreamAttribute::Encoder, "encoder"),
    (StreamAttribute::Mountpoint, "mountpoint"),
    (StreamAttribute::Intake, "intake"),
    (StreamAttribute::Server, "server"),
    (StreamAttribute::Public, "public"),
    (StreamAttribute::StreamName, "stream_name"),
    (StreamAttribute::StreamUrl, "stream_url"),
    (StreamAttribute::StreamGenre, "stream_genre"),
    (StreamAttribute::StreamDescription, "stream_description"),
    (StreamAttribute::StreamQuality, "stream_quality"),
    (StreamAttribute::StreamBitrate, "stream_bitrate"),
    (StreamAttribute::StreamSamplerate, "stream_samplerate"),
    (StreamAttribute::StreamChannels, "stream_channels"),
    (StreamAttribute::LanguageTag, "language_tag"),
];

impl StreamAttribute {
    /// Configuration key of this attribute
    pub fn key(self) -> &'static str {
        KEYS.iter()
            .find(|(attribute, _)| *attribute == self)
            .map(|(_, key)| *key)
            .unwrap_or_default()
    }

    /// All attributes in key table order
    pub fn all() -> impl Iterator<Item = StreamAttribute> {
        KEYS.iter().map(|(attribute, _)| *attribute)
    }
}

impl FromStr for StreamAttribute {
    type Err = ConfigError;

    /// Keys are matched ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KEYS.iter()
            .find(|(_, key)| key.eq_ignore_ascii_case(s))
            .map(|(attribute, _)| *attribute)
            .ok_or_else(|| ConfigError::UnknownAttribute(s.to_owned()))
    }
}

impl fmt::Display for StreamAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

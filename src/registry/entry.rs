//! Stream entry
//!
//! One named stream definition: where the audio comes from (intake), where it
//! goes (server and mountpoint), how it is packaged (format and encoder) and
//! the metadata announced to listeners.
//!
//! String settings follow one rule: `None` clears the setting, an empty
//! string is rejected, anything else is copied into the entry.

use super::attribute::StreamAttribute;
use super::error::{ConfigError, Result};
use super::format::StreamFormat;

/// Configuration of a single stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry {
    name: String,
    format: StreamFormat,
    mountpoint: Option<String>,
    intake: Option<String>,
    server: Option<String>,
    public: bool,
    encoder: Option<String>,
    stream_name: Option<String>,
    stream_url: Option<String>,
    stream_genre: Option<String>,
    stream_description: Option<String>,
    stream_quality: Option<String>,
    stream_bitrate: Option<String>,
    stream_samplerate: Option<String>,
    stream_channels: Option<String>,
    language_tag: Option<String>,
}

/// Generates the getter and setter pair for an optional string setting
macro_rules! string_setting {
    ($(#[$doc:meta])* $field:ident, $setter:ident) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        $(#[$doc])*
        ///
        /// `None` clears the setting; an empty string is rejected.
        pub fn $setter(&mut self, value: Option<&str>) -> Result<()> {
            let result = store_nonempty(&mut self.$field, stringify!($field), value);
            self.report(stringify!($field), result)
        }
    };
}

impl StreamEntry {
    /// Create an entry with every setting unset
    ///
    /// Only the stream list creates entries; `name` is never empty.
    pub(super) fn new(name: &str) -> Self {
        debug_assert!(!name.is_empty());

        Self {
            name: name.to_owned(),
            format: StreamFormat::Invalid,
            mountpoint: None,
            intake: None,
            server: None,
            public: false,
            encoder: None,
            stream_name: None,
            stream_url: None,
            stream_genre: None,
            stream_description: None,
            stream_quality: None,
            stream_bitrate: None,
            stream_samplerate: None,
            stream_channels: None,
            language_tag: None,
        }
    }

    /// Name of the stream as it was first spelled
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Container format
    pub fn format(&self) -> StreamFormat {
        self.format
    }

    /// Canonical identifier of the container format, if one is set
    pub fn format_str(&self) -> Option<&'static str> {
        self.format.as_str()
    }

    /// Set the container format from its canonical identifier
    ///
    /// On failure the current format is kept.
    pub fn set_format(&mut self, value: Option<&str>) -> Result<()> {
        let result = match value {
            None | Some("") => Err(ConfigError::EmptyValue {
                field: "stream format",
            }),
            Some(s) => s
                .parse::<StreamFormat>()
                .map(|format| self.format = format)
                .map_err(ConfigError::from),
        };
        self.report("format", result)
    }

    /// Encoder used to transcode the intake, `None` for no transcoding
    pub fn encoder(&self) -> Option<&str> {
        self.encoder.as_deref()
    }

    /// Set the encoder
    ///
    /// `None` selects the default (no encoder) and is not an error.
    pub fn set_encoder(&mut self, value: Option<&str>) -> Result<()> {
        let result = store_nonempty(&mut self.encoder, "encoder", value);
        self.report("encoder", result)
    }

    string_setting!(
        /// Mountpoint on the target server
        mountpoint,
        set_mountpoint
    );
    string_setting!(
        /// Name of the intake feeding this stream
        intake,
        set_intake
    );
    string_setting!(
        /// Name of the server this stream is sent to
        server,
        set_server
    );
    string_setting!(
        /// Stream title announced to listeners
        stream_name,
        set_stream_name
    );
    string_setting!(
        /// Website URL announced to listeners
        stream_url,
        set_stream_url
    );
    string_setting!(
        /// Genre announced to listeners
        stream_genre,
        set_stream_genre
    );
    string_setting!(
        /// Description announced to listeners
        stream_description,
        set_stream_description
    );
    string_setting!(
        /// Encoding quality announced to listeners
        stream_quality,
        set_stream_quality
    );
    string_setting!(
        /// Bitrate announced to listeners
        stream_bitrate,
        set_stream_bitrate
    );
    string_setting!(
        /// Sample rate announced to listeners
        stream_samplerate,
        set_stream_samplerate
    );
    string_setting!(
        /// Channel count announced to listeners
        stream_channels,
        set_stream_channels
    );
    string_setting!(
        /// Language tag (e.g. "en-US") announced to listeners
        language_tag,
        set_language_tag
    );

    /// Whether the stream is listed in public directories
    pub fn public(&self) -> bool {
        self.public
    }

    /// Set whether the stream is listed in public directories
    pub fn set_public(&mut self, public: bool) {
        self.public = public;
        tracing::trace!(stream = %self.name, public, "Stream setting updated");
    }

    /// Set the public flag from text
    ///
    /// Accepts `true`, `yes`, `1`, `false`, `no` and `0`, ignoring case.
    pub fn set_public_str(&mut self, value: Option<&str>) -> Result<()> {
        let result = match value {
            None | Some("") => Err(ConfigError::EmptyValue { field: "public" }),
            Some(s) => parse_bool(s).map(|public| self.public = public),
        };
        self.report("public", result)
    }

    /// Apply a setting by attribute
    ///
    /// The value is handled exactly as the attribute's own setter handles it.
    pub fn set(&mut self, attribute: StreamAttribute, value: Option<&str>) -> Result<()> {
        match attribute {
            StreamAttribute::Format => self.set_format(value),
            StreamAttribute::Encoder => self.set_encoder(value),
            StreamAttribute::Mountpoint => self.set_mountpoint(value),
            StreamAttribute::Intake => self.set_intake(value),
            StreamAttribute::Server => self.set_server(value),
            StreamAttribute::Public => self.set_public_str(value),
            StreamAttribute::StreamName => self.set_stream_name(value),
            StreamAttribute::StreamUrl => self.set_stream_url(value),
            StreamAttribute::StreamGenre => self.set_stream_genre(value),
            StreamAttribute::StreamDescription => self.set_stream_description(value),
            StreamAttribute::StreamQuality => self.set_stream_quality(value),
            StreamAttribute::StreamBitrate => self.set_stream_bitrate(value),
            StreamAttribute::StreamSamplerate => self.set_stream_samplerate(value),
            StreamAttribute::StreamChannels => self.set_stream_channels(value),
            StreamAttribute::LanguageTag => self.set_language_tag(value),
        }
    }

    /// Check that the entry is complete enough to be used
    pub fn validate(&self) -> Result<()> {
        if !self.format.is_valid() {
            let err = ConfigError::ValidationFailed("format missing or unsupported");
            tracing::warn!(stream = %self.name, error = %err, "Stream validation failed");
            return Err(err);
        }

        Ok(())
    }

    fn report(&self, field: &'static str, result: Result<()>) -> Result<()> {
        match &result {
            Ok(()) => tracing::trace!(stream = %self.name, field, "Stream setting updated"),
            Err(err) => tracing::warn!(
                stream = %self.name,
                field,
                error = %err,
                "Stream setting rejected"
            ),
        }
        result
    }
}

/// Replace `slot` with a copy of `value`, rejecting empty strings
fn store_nonempty(slot: &mut Option<String>, field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        None => {
            *slot = None;
            Ok(())
        }
        Some("") => Err(ConfigError::EmptyValue { field }),
        Some(s) => {
            *slot = Some(s.to_owned());
            Ok(())
        }
    }
}

fn parse_bool(s: &str) -> Result<bool> {
    if ["true", "yes", "1"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else if ["false", "no", "0"].iter().any(|f| s.eq_ignore_ascii_case(f)) {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBoolean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Getter = fn(&StreamEntry) -> Option<&str>;
    type Setter = fn(&mut StreamEntry, Option<&str>) -> Result<()>;

    fn string_settings() -> [(&'static str, Getter, Setter); 12] {
        [
            ("mountpoint", StreamEntry::mountpoint, StreamEntry::set_mountpoint),
            ("intake", StreamEntry::intake, StreamEntry::set_intake),
            ("server", StreamEntry::server, StreamEntry::set_server),
            ("stream_name", StreamEntry::stream_name, StreamEntry::set_stream_name),
            ("stream_url", StreamEntry::stream_url, StreamEntry::set_stream_url),
            ("stream_genre", StreamEntry::stream_genre, StreamEntry::set_stream_genre),
            (
                "stream_description",
                StreamEntry::stream_description,
                StreamEntry::set_stream_description,
            ),
            (
                "stream_quality",
                StreamEntry::stream_quality,
                StreamEntry::set_stream_quality,
            ),
            (
                "stream_bitrate",
                StreamEntry::stream_bitrate,
                StreamEntry::set_stream_bitrate,
            ),
            (
                "stream_samplerate",
                StreamEntry::stream_samplerate,
                StreamEntry::set_stream_samplerate,
            ),
            (
                "stream_channels",
                StreamEntry::stream_channels,
                StreamEntry::set_stream_channels,
            ),
            ("language_tag", StreamEntry::language_tag, StreamEntry::set_language_tag),
        ]
    }

    #[test]
    fn test_new_entry_is_unset() {
        let entry = StreamEntry::new("TeSt");

        assert_eq!(entry.name(), "TeSt");
        assert_eq!(entry.format(), StreamFormat::Invalid);
        assert_eq!(entry.format_str(), None);
        assert_eq!(entry.encoder(), None);
        assert!(!entry.public());
        for (field, get, _) in string_settings() {
            assert_eq!(get(&entry), None, "{field} should start unset");
        }
    }

    #[test]
    fn test_string_settings() {
        for (field, get, set) in string_settings() {
            let mut entry = StreamEntry::new(field);

            set(&mut entry, Some("check_cfg")).unwrap();
            assert_eq!(get(&entry), Some("check_cfg"), "{field}");

            // Empty string is an error and keeps the previous value
            let err = set(&mut entry, Some("")).unwrap_err();
            assert_eq!(err, ConfigError::EmptyValue { field });
            assert_eq!(get(&entry), Some("check_cfg"), "{field}");

            set(&mut entry, Some("other")).unwrap();
            assert_eq!(get(&entry), Some("other"), "{field}");

            set(&mut entry, None).unwrap();
            assert_eq!(get(&entry), None, "{field}");
        }
    }

    #[test]
    fn test_string_settings_are_independent() {
        let mut entry = StreamEntry::new("test");

        entry.set_mountpoint(Some("/live.ogg")).unwrap();
        entry.set_server(Some("icecast")).unwrap();
        entry.set_mountpoint(None).unwrap();

        assert_eq!(entry.mountpoint(), None);
        assert_eq!(entry.server(), Some("icecast"));
    }

    #[test]
    fn test_set_copies_value() {
        let mut entry = StreamEntry::new("test");
        let mut source = String::from("Rock");

        entry.set_stream_genre(Some(&source)).unwrap();
        source.push_str(" & Roll");

        assert_eq!(entry.stream_genre(), Some("Rock"));
    }

    #[test]
    fn test_format() {
        let mut entry = StreamEntry::new("test_stream_format");

        assert_eq!(
            entry.set_format(None),
            Err(ConfigError::EmptyValue {
                field: "stream format"
            })
        );
        assert!(matches!(
            entry.set_format(Some("")),
            Err(ConfigError::EmptyValue { .. })
        ));

        let err = entry.set_format(Some("<something else>")).unwrap_err();
        assert_eq!(err.to_string(), "unsupported stream format");
        assert_eq!(entry.format(), StreamFormat::Invalid);

        entry.set_format(Some("ogg")).unwrap();
        assert_eq!(entry.format(), StreamFormat::Ogg);
        assert_eq!(entry.format_str(), StreamFormat::Ogg.as_str());
    }

    #[test]
    fn test_format_failure_keeps_previous() {
        let mut entry = StreamEntry::new("test");

        entry.set_format(Some("mp3")).unwrap();
        assert!(entry.set_format(Some("MP3")).is_err());
        assert!(entry.set_format(Some("")).is_err());
        assert_eq!(entry.format(), StreamFormat::Mp3);

        entry.set_format(Some("matroska")).unwrap();
        assert_eq!(entry.format(), StreamFormat::Matroska);
    }

    #[test]
    fn test_encoder() {
        let mut entry = StreamEntry::new("test_stream_encoder");

        assert_eq!(entry.encoder(), None);
        entry.set_encoder(Some("test")).unwrap();
        assert_eq!(entry.encoder(), Some("test"));
        entry.set_encoder(None).unwrap();
        assert_eq!(entry.encoder(), None);

        entry.set_encoder(Some("lame")).unwrap();
        assert!(matches!(
            entry.set_encoder(Some("")),
            Err(ConfigError::EmptyValue { field: "encoder" })
        ));
        assert_eq!(entry.encoder(), Some("lame"));
    }

    #[test]
    fn test_public() {
        let mut entry = StreamEntry::new("test_stream_public");

        entry.set_public(true);
        assert!(entry.public());
        entry.set_public(false);
        assert!(!entry.public());
    }

    #[test]
    fn test_public_str() {
        let mut entry = StreamEntry::new("test_stream_public");

        for value in ["tRuE", "YeS", "1"] {
            entry.set_public(false);
            entry.set_public_str(Some(value)).unwrap();
            assert!(entry.public(), "{value}");
        }
        for value in ["FaLsE", "nO", "0"] {
            entry.set_public(true);
            entry.set_public_str(Some(value)).unwrap();
            assert!(!entry.public(), "{value}");
        }

        entry.set_public(true);
        assert_eq!(
            entry.set_public_str(Some("BOGUS")),
            Err(ConfigError::InvalidBoolean)
        );
        assert!(matches!(
            entry.set_public_str(Some("")),
            Err(ConfigError::EmptyValue { field: "public" })
        ));
        assert!(entry.set_public_str(None).is_err());
        assert!(entry.public());
    }

    #[test]
    fn test_set_by_attribute() {
        let mut entry = StreamEntry::new("test");

        entry.set(StreamAttribute::Format, Some("webm")).unwrap();
        entry.set(StreamAttribute::Public, Some("yes")).unwrap();
        entry.set(StreamAttribute::LanguageTag, Some("en-US")).unwrap();
        entry.set(StreamAttribute::Encoder, None).unwrap();

        assert_eq!(entry.format(), StreamFormat::Webm);
        assert!(entry.public());
        assert_eq!(entry.language_tag(), Some("en-US"));
        assert_eq!(
            entry.set(StreamAttribute::Mountpoint, Some("")),
            Err(ConfigError::EmptyValue { field: "mountpoint" })
        );
    }

    #[test]
    fn test_validate() {
        let mut entry = StreamEntry::new("test_stream_validate");

        let err = entry.validate().unwrap_err();
        assert_eq!(err.to_string(), "format missing or unsupported");

        entry.set_format(Some("ogg")).unwrap();
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_ignores_optional_settings() {
        let mut entry = StreamEntry::new("test");

        entry.set_format(Some("mp3")).unwrap();
        entry.set_mountpoint(None).unwrap();
        entry.set_encoder(None).unwrap();

        assert!(entry.validate().is_ok());
    }
}

//! Registry error types
//!
//! Every fallible operation on a stream entry, the stream list or the
//! configuration context reports one of these. The `Display` text is the
//! message a configuration loader shows next to the offending setting.

use thiserror::Error;

/// Error type for stream configuration operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting that must not be empty was given an empty string
    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    /// The format identifier is not one of the supported containers
    #[error("unsupported stream format")]
    UnsupportedFormat,

    /// The entry is incomplete or inconsistent
    #[error("{0}")]
    ValidationFailed(&'static str),

    /// A boolean setting was not one of true/yes/1/false/no/0
    #[error("invalid boolean value")]
    InvalidBoolean,

    /// A setting exceeds its maximum length
    #[error("{field} is too long")]
    TooLong { field: &'static str },

    /// A configuration key does not name a stream attribute
    #[error("unknown stream attribute: {0}")]
    UnknownAttribute(String),

    /// A named stream failed validation
    #[error("stream {name}: {source}")]
    Stream {
        name: String,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Wrap this error with the name of the stream it belongs to
    pub fn in_stream(self, name: impl Into<String>) -> Self {
        ConfigError::Stream {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

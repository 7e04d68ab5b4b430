//! Stream definition registry for broadcast relay configuration
//!
//! Each configured stream describes one relayed or transcoded feed: the
//! intake it reads from, the server and mountpoint it is sent to, its
//! container format and encoder, and the metadata announced to listeners.
//!
//! # Example
//!
//! ```
//! use streamcfg::{ConfigContext, StreamFormat, StreamList};
//!
//! let ctx = ConfigContext::new();
//! let mut streams = StreamList::new(&ctx);
//!
//! let main = streams.get_or_create(Some("Main")).unwrap();
//! main.set_format(Some("ogg")).unwrap();
//! main.set_mountpoint(Some("/live.ogg")).unwrap();
//!
//! assert!(streams.validate().is_ok());
//! assert_eq!(streams.find("main").unwrap().format(), StreamFormat::Ogg);
//! ```

pub mod context;
pub mod registry;

pub use context::ConfigContext;
pub use registry::{
    ConfigError, SharedStreamList, StreamAttribute, StreamEntry, StreamFormat, StreamList,
};

//! Stream registry
//!
//! The registry holds every stream defined by the configuration, keyed by
//! name without regard to case. A configuration loader asks the list for a
//! stream by name (creating it on first use), applies settings to the entry
//! it gets back, and validates the whole list once loading is done.
//!
//! # Architecture
//!
//! ```text
//!          loader
//!            │  get_or_create("Main")
//!            ▼
//!     ┌──────────────────────────────┐
//!     │ StreamList                   │
//!     │   index: "main" ─► 0         │
//!     │   entries: [StreamEntry {    │
//!     │     name: "Main",            │
//!     │     format: Ogg, ...         │
//!     │   }]                         │
//!     └──────────────┬───────────────┘
//!                    │ validate()
//!                    ▼
//!            SharedStreamList ──► snapshot() ──► readers
//! ```

pub mod attribute;
pub mod entry;
pub mod error;
pub mod format;
pub mod shared;
pub mod store;

pub use attribute::StreamAttribute;
pub use entry::StreamEntry;
pub use error::{ConfigError, Result};
pub use format::{StreamFormat, UnrecognizedFormat};
pub use shared::SharedStreamList;
pub use store::StreamList;

//! # Context Logger
//!
//! An in-process keyed context store plus a leveled logging pipeline that
//! merges metadata from attached contexts into every rendered event.
//!
//! ## Features
//!
//! - **Keyed contexts**: opaque handles, per-context version counters,
//!   delete-on-null semantics
//! - **Ordered merging**: later-attached contexts win key collisions
//! - **Shared configuration**: one severity floor and output list for a
//!   whole logger family
//! - **Pluggable delivery**: format and output capabilities behind small
//!   trait contracts, with per-binding severity overrides
//!
//! ## Example
//!
//! ```
//! use context_logger::prelude::*;
//! use context_logger::{formats::JsonFormat, outputs::MemoryOutput};
//! use serde_json::json;
//!
//! let store = ContextStore::new();
//! let request = store.create_filled([("request_id", json!("abc-123"))]);
//!
//! let sink = MemoryOutput::new();
//! let mut logger = Logger::root(store);
//! logger.add_output(OutputBinding::new(
//!     Box::new(JsonFormat::new()),
//!     Box::new(sink.clone()),
//! ));
//! logger.add_context([request]);
//!
//! logger.info(vec![json!("handling request")]).unwrap();
//! assert!(sink.lines()[0].contains("abc-123"));
//! ```

pub mod core;
pub mod formats;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        ContextHandle, ContextMap, ContextStore, LogEvent, LogFormat, LogLevel, LogOutput,
        Logger, LoggerError, LoggingConfig, OutputBinding, Result, SharedConfig, TimestampFormat,
    };
    pub use crate::formats::{JsonFormat, TextFormat};
    pub use crate::outputs::{ConsoleOutput, FileOutput, MemoryOutput};
}

pub use crate::core::{
    ContextHandle, ContextMap, ContextStore, LogEvent, LogFormat, LogLevel, LogOutput, Logger,
    LoggerError, LoggingConfig, OutputBinding, Result, SharedConfig, TimestampFormat,
    RESERVED_FIELDS, ROOT_LOGGER_NAME,
};
pub use crate::formats::{JsonFormat, TextFormat};
pub use crate::outputs::{ConsoleOutput, FileOutput, MemoryOutput};

// Macro support; not part of the public API
#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}

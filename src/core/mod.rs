//! Core store and logger types

pub mod config;
pub mod context_store;
pub mod error;
pub mod event;
pub mod format;
pub mod level;
pub mod logger;
pub mod output;
pub mod timestamp;

pub use config::{LoggingConfig, OutputBinding, SharedConfig};
pub use context_store::{ContextHandle, ContextMap, ContextStore};
pub use error::{LoggerError, Result};
pub use event::{LogEvent, RESERVED_FIELDS};
pub use format::LogFormat;
pub use level::LogLevel;
pub use logger::{Logger, ROOT_LOGGER_NAME};
pub use output::LogOutput;
pub use timestamp::TimestampFormat;

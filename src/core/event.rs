//! Log event structure

use super::context_store::ContextMap;
use super::level::LogLevel;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Context keys that collide with built-in event fields.
///
/// These are stripped from the merged context when an event is built, so
/// a context can never shadow the record's own `timestamp`, `level`,
/// `name`, `message`, or `args` fields.
pub const RESERVED_FIELDS: [&str; 5] = ["timestamp", "level", "name", "message", "args"];

/// One leveled event, built per emit and handed to format capabilities.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Name of the emitting logger
    pub name: String,
    /// Taken once per dispatch, shared by every binding
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Merged context of the logger's attachments, reserved keys removed
    pub context: ContextMap,
    pub message: String,
    /// Positional arguments accompanying the message
    pub args: Vec<Value>,
}

impl LogEvent {
    /// Build an event from an already-merged context mapping.
    ///
    /// Reserved keys are stripped here so no format implementation has to
    /// guard against them.
    pub fn new(
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        level: LogLevel,
        mut context: ContextMap,
        message: String,
        args: Vec<Value>,
    ) -> Self {
        for field in RESERVED_FIELDS {
            context.remove(field);
        }
        Self {
            name: name.into(),
            timestamp,
            level,
            context,
            message,
            args,
        }
    }
}

//! Format capability contract

use super::{error::Result, event::LogEvent};

/// Renders a log event to a string.
///
/// Implementations must be deterministic for a given event and must not
/// mutate state observable by the caller; the event they receive already
/// has reserved context keys stripped.
pub trait LogFormat: Send + Sync {
    fn format(&self, event: &LogEvent) -> Result<String>;
    fn name(&self) -> &str;
}

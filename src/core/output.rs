//! Output capability contract

use super::error::Result;

/// Delivers a rendered string to a sink.
///
/// Errors are sink-specific and propagate synchronously to the emit
/// caller; the dispatch pipeline performs no retry or buffering.
pub trait LogOutput: Send + Sync {
    fn write(&mut self, rendered: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

//! In-memory output for tests and embedding

use crate::core::{LogOutput, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Capturing sink that records every rendered string.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// binding and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in delivery order
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.read().is_empty()
    }

    /// Drain and return the captured strings
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.write())
    }
}

impl LogOutput for MemoryOutput {
    fn write(&mut self, rendered: &str) -> Result<()> {
        self.lines.write().push(rendered.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

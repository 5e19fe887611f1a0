//! Shared logging configuration and output bindings

use super::format::LogFormat;
use super::level::LogLevel;
use super::output::LogOutput;
use parking_lot::RwLock;
use std::sync::Arc;

/// Configuration shared by a whole logger family.
///
/// The root logger and every logger derived from it hold the same
/// `SharedConfig`, so mutating it (floor or outputs) takes effect
/// immediately for all of them.
pub type SharedConfig = Arc<RwLock<LoggingConfig>>;

/// One delivery path for rendered events.
///
/// Pairs a format capability with an output capability, optionally with a
/// per-binding severity floor that overrides nothing but this binding.
pub struct OutputBinding {
    pub format: Box<dyn LogFormat>,
    pub output: Box<dyn LogOutput>,
    pub min_level: Option<LogLevel>,
}

impl OutputBinding {
    pub fn new(format: Box<dyn LogFormat>, output: Box<dyn LogOutput>) -> Self {
        Self {
            format,
            output,
            min_level: None,
        }
    }

    /// Set a severity floor for this binding only
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Whether an event at `level` passes this binding's own floor
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.min_level.is_none_or(|floor| level >= floor)
    }
}

/// Mutable logger-family configuration: global floor plus ordered outputs.
pub struct LoggingConfig {
    pub min_level: LogLevel,
    pub outputs: Vec<OutputBinding>,
}

impl LoggingConfig {
    /// Initial root configuration: most verbose floor, no outputs
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
            outputs: Vec::new(),
        }
    }

    pub fn shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::LogEvent;
    use crate::core::error::Result;

    struct NullFormat;
    impl LogFormat for NullFormat {
        fn format(&self, _event: &LogEvent) -> Result<String> {
            Ok(String::new())
        }
        fn name(&self) -> &str {
            "null"
        }
    }

    struct NullOutput;
    impl LogOutput for NullOutput {
        fn write(&mut self, _rendered: &str) -> Result<()> {
            Ok(())
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn test_binding_accepts_without_floor() {
        let binding = OutputBinding::new(Box::new(NullFormat), Box::new(NullOutput));
        assert!(binding.accepts(LogLevel::Trace));
        assert!(binding.accepts(LogLevel::Critical));
    }

    #[test]
    fn test_binding_floor_overrides() {
        let binding = OutputBinding::new(Box::new(NullFormat), Box::new(NullOutput))
            .with_min_level(LogLevel::Warning);
        assert!(!binding.accepts(LogLevel::Info));
        assert!(binding.accepts(LogLevel::Warning));
        assert!(binding.accepts(LogLevel::Critical));
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::new();
        assert_eq!(config.min_level, LogLevel::Trace);
        assert!(config.outputs.is_empty());
    }
}

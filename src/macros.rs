//! Logging macros for ergonomic emit calls.
//!
//! Each macro lifts its arguments into `serde_json::Value`s and forwards
//! them to the matching level method, so callers can pass a message
//! template followed by values, or bare values with no template at all.
//!
//! # Examples
//!
//! ```
//! use context_logger::prelude::*;
//! use context_logger::{formats::JsonFormat, outputs::MemoryOutput, info};
//!
//! let logger = Logger::root(ContextStore::new());
//! let sink = MemoryOutput::new();
//! logger.add_output(OutputBinding::new(
//!     Box::new(JsonFormat::new()),
//!     Box::new(sink.clone()),
//! ));
//!
//! info!(logger, "server started").unwrap();
//! info!(logger, "listening on port %i", 8080).unwrap();
//! info!(logger, 5, 6).unwrap();
//!
//! assert_eq!(sink.len(), 3);
//! ```

/// Emit at an explicit level.
///
/// # Examples
///
/// ```
/// # use context_logger::prelude::*;
/// # let logger = Logger::root(ContextStore::new());
/// use context_logger::log;
/// log!(logger, LogLevel::Info, "simple message").unwrap();
/// log!(logger, LogLevel::Critical, "error code %i", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, ::std::vec![$($crate::__private::json!($arg)),*])
    };
}

/// Emit a trace-level event.
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace $(, $arg)*)
    };
}

/// Emit a debug-level event.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}

/// Emit an info-level event.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

/// Emit an alert-level event.
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Alert $(, $arg)*)
    };
}

/// Emit a warning-level event.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning $(, $arg)*)
    };
}

/// Alias for [`warning!`].
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::warning!($logger $(, $arg)*)
    };
}

/// Emit a critical-level event.
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Critical $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ContextStore, Logger, LogLevel, OutputBinding};
    use crate::formats::JsonFormat;
    use crate::outputs::MemoryOutput;

    fn capture_logger() -> (Logger, MemoryOutput) {
        let logger = Logger::root(ContextStore::new());
        let sink = MemoryOutput::new();
        logger.add_output(OutputBinding::new(
            Box::new(JsonFormat::new()),
            Box::new(sink.clone()),
        ));
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = capture_logger();
        log!(logger, LogLevel::Info, "test message").unwrap();
        log!(logger, LogLevel::Info, "formatted %i", 42).unwrap();
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = capture_logger();
        trace!(logger, "trace message").unwrap();
        debug!(logger, "debug message").unwrap();
        info!(logger, "info message").unwrap();
        alert!(logger, "alert message").unwrap();
        warning!(logger, "warning message").unwrap();
        critical!(logger, "critical message").unwrap();
        assert_eq!(sink.len(), 6);
    }

    #[test]
    fn test_warn_alias() {
        let (logger, sink) = capture_logger();
        warn!(logger, "low disk space").unwrap();

        let line = &sink.lines()[0];
        assert!(line.contains("\"WARNING\""));
    }

    #[test]
    fn test_bare_value_macro() {
        let (logger, sink) = capture_logger();
        info!(logger, 5, 6).unwrap();

        let line = &sink.lines()[0];
        assert!(line.contains("\"%i,%i\""));
        assert!(line.contains("[5,6]"));
    }

    #[test]
    fn test_empty_macro_call() {
        let (logger, sink) = capture_logger();
        info!(logger).unwrap();
        assert_eq!(sink.len(), 1);
    }
}

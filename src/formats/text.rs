//! Human-readable text format

use crate::core::{LogEvent, LogFormat, Result, TimestampFormat};

/// Single-line text rendering: `[ts] [LEVEL] name - message`, followed by
/// positional args and `key=value` context fields when present.
pub struct TextFormat {
    timestamp_format: TimestampFormat,
}

impl TextFormat {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this renderer
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFormat for TextFormat {
    fn format(&self, event: &LogEvent) -> Result<String> {
        let mut line = format!(
            "[{}] [{:8}] {} - {}",
            self.timestamp_format.format(&event.timestamp),
            event.level.to_str(),
            event.name,
            event.message
        );

        if !event.args.is_empty() {
            let args = event
                .args
                .iter()
                .map(|arg| arg.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!(" [{}]", args));
        }

        for (key, value) in &event.context {
            line.push_str(&format!(" {}={}", key, value));
        }

        line.push('\n');
        Ok(line)
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContextMap, LogLevel};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_text_line() {
        let mut context = ContextMap::new();
        context.insert("region".into(), json!("eu-west-1"));

        let event = LogEvent::new(
            "main",
            Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap(),
            LogLevel::Info,
            context,
            "started".into(),
            vec![json!(3)],
        );

        let rendered = TextFormat::new().format(&event).unwrap();
        assert!(rendered.starts_with("[2025-01-08T10:30:45.000Z] [INFO    ] main - started"));
        assert!(rendered.contains("[3]"));
        assert!(rendered.contains("region=\"eu-west-1\""));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_text_omits_empty_args() {
        let event = LogEvent::new(
            "main",
            Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap(),
            LogLevel::Debug,
            ContextMap::new(),
            "plain".into(),
            vec![],
        );

        let rendered = TextFormat::new().format(&event).unwrap();
        assert_eq!(rendered, "[2025-01-08T10:30:45.000Z] [DEBUG   ] main - plain\n");
    }
}

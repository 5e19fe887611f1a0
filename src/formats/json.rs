//! JSON format implementation

use crate::core::{LogEvent, LogFormat, Result, TimestampFormat};
use serde_json::{Map, Value};

/// Reference format: one JSON object per event, newline-terminated.
///
/// The record carries `timestamp`, `level`, `name`, `message`, and `args`
/// first, followed by the merged context fields in their merge order.
/// Compatible with JSONL-consuming aggregation tools.
pub struct JsonFormat {
    timestamp_format: TimestampFormat,
    pretty: bool,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            pretty: false,
        }
    }

    /// Render with pretty-printed JSON instead of one line per event
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set the timestamp format for this renderer
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFormat for JsonFormat {
    fn format(&self, event: &LogEvent) -> Result<String> {
        let mut record = Map::new();
        record.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp_format.format(&event.timestamp)),
        );
        record.insert(
            "level".to_string(),
            Value::String(event.level.to_str().to_string()),
        );
        record.insert("name".to_string(), Value::String(event.name.clone()));
        record.insert("message".to_string(), Value::String(event.message.clone()));
        record.insert("args".to_string(), Value::Array(event.args.clone()));
        for (key, value) in &event.context {
            record.insert(key.clone(), value.clone());
        }

        let record = Value::Object(record);
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        rendered.push('\n');
        Ok(rendered)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContextMap, LogLevel};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn sample_event() -> LogEvent {
        let mut context = ContextMap::new();
        context.insert("user".into(), json!("alice"));
        LogEvent::new(
            "worker",
            Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap(),
            LogLevel::Warning,
            context,
            "disk low".into(),
            vec![json!(87)],
        )
    }

    #[test]
    fn test_json_record_shape() {
        let rendered = JsonFormat::new().format(&sample_event()).unwrap();
        assert!(rendered.ends_with('\n'));

        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["timestamp"], json!("2025-01-08T10:30:45.000Z"));
        assert_eq!(parsed["level"], json!("WARNING"));
        assert_eq!(parsed["name"], json!("worker"));
        assert_eq!(parsed["message"], json!("disk low"));
        assert_eq!(parsed["args"], json!([87]));
        assert_eq!(parsed["user"], json!("alice"));
    }

    #[test]
    fn test_json_single_line() {
        let rendered = JsonFormat::new().format(&sample_event()).unwrap();
        assert_eq!(rendered.trim_end().lines().count(), 1);
    }

    #[test]
    fn test_json_deterministic() {
        let event = sample_event();
        let format = JsonFormat::new();
        assert_eq!(format.format(&event).unwrap(), format.format(&event).unwrap());
    }

    #[test]
    fn test_json_custom_timestamp() {
        let format = JsonFormat::new().with_timestamp_format(TimestampFormat::Unix);
        let rendered = format.format(&sample_event()).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["timestamp"], json!("1736332245"));
    }
}

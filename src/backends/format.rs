//! Output formats for emitted events
//!
//! - Text: human-readable line format
//! - Json: machine-readable, one object per event

use crate::core::config::FieldMap;
use crate::core::fields::Fields;
use crate::core::log_level::LogLevel;
use crate::core::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use colored::Colorize;

/// One event as it leaves a backend: timestamp, level, message and the
/// accumulated fields.
pub struct EmitEvent<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: &'a str,
    pub fields: &'a Fields,
}

/// Output format for emitted events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08T10:30:45+00:00] [INFO ] Request processed key=value`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08T10:30:45+00:00","level":"INFO","msg":"Request processed"}`
    Json,
}

impl OutputFormat {
    /// Format an event according to this output format.
    pub fn format(
        &self,
        event: &EmitEvent<'_>,
        field_map: &FieldMap,
        timestamp_format: &TimestampFormat,
        use_colors: bool,
    ) -> String {
        match self {
            OutputFormat::Text => self.format_text(event, timestamp_format, use_colors),
            OutputFormat::Json => self.format_json(event, field_map, timestamp_format),
        }
    }

    fn format_text(
        &self,
        event: &EmitEvent<'_>,
        timestamp_format: &TimestampFormat,
        use_colors: bool,
    ) -> String {
        let level_str = if use_colors {
            format!("{:5}", event.level.to_str())
                .color(event.level.color_code())
                .to_string()
        } else {
            format!("{:5}", event.level.to_str())
        };

        let base = format!(
            "[{}] [{}] {}",
            timestamp_format.format(&event.timestamp),
            level_str,
            event.message
        );

        if event.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, event.fields.format_fields())
        }
    }

    fn format_json(
        &self,
        event: &EmitEvent<'_>,
        field_map: &FieldMap,
        timestamp_format: &TimestampFormat,
    ) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            field_map.time_key().to_string(),
            serde_json::Value::String(timestamp_format.format(&event.timestamp)),
        );
        json_obj.insert(
            field_map.level_key().to_string(),
            serde_json::Value::String(event.level.to_str().to_string()),
        );
        json_obj.insert(
            field_map.message_key().to_string(),
            serde_json::Value::String(event.message.to_string()),
        );

        for (key, value) in event.fields.iter() {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_event<'a>(fields: &'a Fields, message: &'a str) -> EmitEvent<'a> {
        EmitEvent {
            timestamp: Utc
                .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
                .single()
                .expect("valid datetime"),
            level: LogLevel::Info,
            message,
            fields,
        }
    }

    #[test]
    fn test_text_format() {
        let fields = Fields::new();
        let event = fixed_event(&fields, "Request processed");
        let result = OutputFormat::Text.format(
            &event,
            &FieldMap::default(),
            &TimestampFormat::Rfc3339,
            false,
        );

        assert!(result.contains("INFO"));
        assert!(result.contains("Request processed"));
        assert!(result.contains("2025-01-08T10:30:45"));
    }

    #[test]
    fn test_text_format_with_fields() {
        let fields = Fields::new().with_field("_err_0", "user alice failed");
        let event = fixed_event(&fields, "request done");
        let result = OutputFormat::Text.format(
            &event,
            &FieldMap::default(),
            &TimestampFormat::Rfc3339,
            false,
        );

        assert!(result.contains("request done"));
        assert!(result.contains("_err_0=user alice failed"));
    }

    #[test]
    fn test_json_format() {
        let fields = Fields::new().with_field("_info_0", "step one");
        let event = fixed_event(&fields, "request done");
        let result = OutputFormat::Json.format(
            &event,
            &FieldMap::default(),
            &TimestampFormat::Rfc3339,
            false,
        );

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["msg"], "request done");
        assert_eq!(parsed["_info_0"], "step one");
        assert!(parsed["time"].is_string());
    }

    #[test]
    fn test_json_format_applies_field_map() {
        let fields = Fields::new();
        let event = fixed_event(&fields, "renamed");
        let field_map = FieldMap {
            message: Some("message".to_string()),
            time: Some("@timestamp".to_string()),
            level: Some("severity".to_string()),
            caller: None,
        };
        let result =
            OutputFormat::Json.format(&event, &field_map, &TimestampFormat::Rfc3339, false);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["message"], "renamed");
        assert_eq!(parsed["severity"], "INFO");
        assert!(parsed["@timestamp"].is_string());
        assert!(parsed.get("msg").is_none());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}

//! Timestamp formatting for backend output

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp rendering for emitted events.
///
/// RFC 3339 is the default, matching the common structured-logging layout.
/// A configuration string selects a named format or, failing that, is taken
/// as a custom strftime pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339: `2025-01-08T10:30:45+00:00`
    #[default]
    Rfc3339,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Resolve the configuration string into a format. `None` and the empty
    /// string keep the default.
    pub fn from_config(pattern: Option<&str>) -> Self {
        match pattern {
            None | Some("") => TimestampFormat::Rfc3339,
            Some(p) => match p.to_lowercase().as_str() {
                "rfc3339" => TimestampFormat::Rfc3339,
                "iso8601" => TimestampFormat::Iso8601,
                "unix" => TimestampFormat::Unix,
                "unix_millis" => TimestampFormat::UnixMillis,
                _ => TimestampFormat::Custom(p.to_string()),
            },
        }
    }

    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, false),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

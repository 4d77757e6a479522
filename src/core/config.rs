//! Backend configuration surface

use serde::{Deserialize, Serialize};

/// Canonical names of the well-known output fields.
pub const FIELD_KEY_MSG: &str = "msg";
pub const FIELD_KEY_LEVEL: &str = "level";
pub const FIELD_KEY_TIME: &str = "time";
pub const FIELD_KEY_CALLER: &str = "caller";

/// Output renames for the four canonical fields.
///
/// Unset entries keep the backend's built-in default names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    pub message: Option<String>,
    pub level: Option<String>,
    pub time: Option<String>,
    pub caller: Option<String>,
}

impl FieldMap {
    pub fn message_key(&self) -> &str {
        self.message.as_deref().unwrap_or(FIELD_KEY_MSG)
    }

    pub fn level_key(&self) -> &str {
        self.level.as_deref().unwrap_or(FIELD_KEY_LEVEL)
    }

    pub fn time_key(&self) -> &str {
        self.time.as_deref().unwrap_or(FIELD_KEY_TIME)
    }

    pub fn caller_key(&self) -> &str {
        self.caller.as_deref().unwrap_or(FIELD_KEY_CALLER)
    }
}

/// Configuration for a context logger and its backend.
///
/// `log_level` is parsed twice, on purpose: permissively for the logger's
/// own buffer filtering, strictly by the backend for its internal gating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Structured JSON output instead of the line format.
    pub json_format: bool,

    /// Minimum level, as text.
    pub log_level: String,

    /// Renames for the canonical output fields.
    pub field_map: FieldMap,

    /// Timestamp rendering pattern; `None` keeps the backend default.
    pub timestamp_format: Option<String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    #[must_use]
    pub fn with_field_map(mut self, field_map: FieldMap) -> Self {
        self.field_map = field_map;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format = Some(pattern.into());
        self
    }
}

//! Console backend implementation
//!
//! The one in-scope backend: renders emitted events to stdout in text or
//! JSON form. It keeps its own strictly-parsed minimum level for internal
//! gating, separate from the context logger's permissive filtering minimum.

use super::format::{EmitEvent, OutputFormat};
use super::Backend;
use crate::core::config::{Configuration, FieldMap};
use crate::core::error::{ContextLogError, Result};
use crate::core::fields::Fields;
use crate::core::log_level::LogLevel;
use crate::core::timestamp::TimestampFormat;
use chrono::Utc;

pub struct ConsoleBackend {
    min_level: LogLevel,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
    field_map: FieldMap,
    use_colors: bool,
    fields: Fields,
}

impl ConsoleBackend {
    /// Build a console backend from the configuration.
    ///
    /// The level string is parsed strictly; an unrecognized level is a
    /// construction error, propagated to the caller.
    pub fn from_config(config: &Configuration) -> Result<Self> {
        let min_level = config
            .log_level
            .parse::<LogLevel>()
            .map_err(|message| ContextLogError::config("ConsoleBackend", message))?;

        let output_format = if config.json_format {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            min_level,
            output_format,
            timestamp_format: TimestampFormat::from_config(config.timestamp_format.as_deref()),
            field_map: config.field_map.clone(),
            // Colors only make sense on the line format
            use_colors: !config.json_format,
            fields: Fields::new(),
        })
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn render(&self, message: &str) -> String {
        let event = EmitEvent {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            message,
            fields: &self.fields,
        };
        self.output_format
            .format(&event, &self.field_map, &self.timestamp_format, self.use_colors)
    }
}

impl Backend for ConsoleBackend {
    fn emit(&self, message: &str) {
        // Flushed events carry Info level, gated by the backend's own minimum
        if !LogLevel::Info.is_emittable(self.min_level) {
            return;
        }
        println!("{}", self.render(message));
    }

    fn with_fields(mut self: Box<Self>, fields: Fields) -> Box<dyn Backend> {
        self.fields.merge(fields);
        self
    }
}

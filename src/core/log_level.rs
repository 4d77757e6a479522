//! Log level definitions and severity policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity rank. Comparisons are by rank, never by string;
/// `Trace` sits below the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i8)]
pub enum LogLevel {
    Trace = -1,
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
    /// An absent level on an event.
    NoLevel = 6,
    /// Disables emission entirely.
    Disabled = 7,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
            LogLevel::NoLevel => "NOLEVEL",
            LogLevel::Disabled => "DISABLED",
        }
    }

    /// Permissive parser used for the context logger's own filtering minimum.
    ///
    /// Only `error`, `info` and `debug` are recognized (case-insensitive);
    /// anything else, the empty string included, falls back to `Info`. This
    /// never fails on purpose: the filtering minimum is not a validation
    /// surface. Backends keep their own strict parser (`FromStr`).
    pub fn parse_permissive(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }

    /// Label used for the aggregated event's effective severity.
    ///
    /// Only the four deferred-buffer levels map to a label; callers fall
    /// back to `"DEFAULT"` for everything else.
    pub fn severity_label(&self) -> Option<&'static str> {
        match self {
            LogLevel::Debug => Some("DEBUG"),
            LogLevel::Info => Some("INFO"),
            LogLevel::Warn => Some("WARNING"),
            LogLevel::Error => Some("ERROR"),
            _ => None,
        }
    }

    /// Whether a buffer at this level qualifies for emission at the
    /// configured minimum.
    pub fn is_emittable(&self, minimum: LogLevel) -> bool {
        *self >= minimum
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal | LogLevel::Panic => BrightRed,
            LogLevel::NoLevel | LogLevel::Disabled => White,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Strict parser used at backend construction time. Unrecognized input
    /// is an error, unlike [`LogLevel::parse_permissive`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "PANIC" => Ok(LogLevel::Panic),
            "DISABLED" => Ok(LogLevel::Disabled),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

//! Deferred buffer keys
//!
//! The closed set of categories a context logger buffers under. Tags are
//! stable identifiers, never derived from user input; each tag carries a
//! fixed associated level used purely for flush-time filtering.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BufferKey {
    Error,
    Info,
    Debug,
    Warning,
    /// Free-form request data; buffered but never folded into the flush.
    CustomData,
}

impl BufferKey {
    /// Flush walk order used by `msg`. Fixed; `CustomData` and `Warning`
    /// are deliberately absent.
    pub const FLUSH_ORDER: [BufferKey; 3] = [BufferKey::Error, BufferKey::Info, BufferKey::Debug];

    /// Ascending severity scan used to compute the effective severity
    /// label. Later entries overwrite earlier ones, so the most severe
    /// qualifying buffer wins.
    pub const ASCENDING: [BufferKey; 4] = [
        BufferKey::Debug,
        BufferKey::Info,
        BufferKey::Warning,
        BufferKey::Error,
    ];

    /// Stable string tag used to name positional fields (`_err_0`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            BufferKey::Error => "_err",
            BufferKey::Info => "_info",
            BufferKey::Debug => "_debug",
            BufferKey::Warning => "_warning",
            BufferKey::CustomData => "_custom_data",
        }
    }

    /// The level this buffer is filtered at.
    pub fn level(&self) -> LogLevel {
        match self {
            BufferKey::Error => LogLevel::Error,
            BufferKey::Info => LogLevel::Info,
            BufferKey::Debug => LogLevel::Debug,
            BufferKey::Warning => LogLevel::Warn,
            BufferKey::CustomData => LogLevel::NoLevel,
        }
    }
}

impl fmt::Display for BufferKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Backend implementations
//!
//! A backend is the injected logging implementation behind the two-operation
//! capability the core consumes: fold fields in, emit one message. The core
//! never inspects backend internals; anything satisfying [`Backend`] plugs
//! in.

pub mod console;
pub mod format;

pub use console::ConsoleBackend;
pub use format::{EmitEvent, OutputFormat};

use crate::core::config::Configuration;
use crate::core::error::{ContextLogError, Result};
use crate::core::fields::Fields;
use std::str::FromStr;

/// The adapter capability.
///
/// `with_fields` consumes the handle and returns a new one carrying the
/// accumulated fields; handles are never shared across logger instances.
pub trait Backend: Send + Sync {
    /// Write one message carrying every field folded in so far.
    fn emit(&self, message: &str);

    /// Return a fresh handle with `fields` merged in (last write wins on
    /// key collision).
    fn with_fields(self: Box<Self>, fields: Fields) -> Box<dyn Backend>;
}

/// The closed set of backend kinds a context logger can be built with.
///
/// Only `Console` is wired up; the others are declared extension points
/// that fail construction with a clear error instead of falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Text/JSON console backend (implemented)
    Console,
    /// File backend (placeholder)
    File,
    /// Syslog backend (placeholder)
    Syslog,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Console => "console",
            BackendKind::File => "file",
            BackendKind::Syslog => "syslog",
        }
    }
}

impl FromStr for BackendKind {
    type Err = ContextLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(BackendKind::Console),
            "file" => Ok(BackendKind::File),
            "syslog" => Ok(BackendKind::Syslog),
            _ => Err(ContextLogError::unsupported_backend(s)),
        }
    }
}

/// Build a backend instance for `kind`.
///
/// Each call produces its own instance; there is no shared backend state
/// between loggers. Fails on unimplemented kinds and propagates the
/// backend's own configuration errors.
pub fn build_backend(config: &Configuration, kind: BackendKind) -> Result<Box<dyn Backend>> {
    match kind {
        BackendKind::Console => Ok(Box::new(ConsoleBackend::from_config(config)?)),
        BackendKind::File => Err(ContextLogError::not_implemented("file")),
        BackendKind::Syslog => Err(ContextLogError::not_implemented("syslog")),
    }
}

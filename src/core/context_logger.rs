//! Context logger: buffer, filter, flush
//!
//! One instance per logical unit of work. Leveled calls buffer formatted
//! strings into the shared scope; `msg` walks the deferred buffers, folds
//! every qualifying entry into the backend as a positional field and emits
//! the final message once. The backend handle is exclusively owned by this
//! instance; each construction builds its own backend.

use super::buffer_key::BufferKey;
use super::config::Configuration;
use super::error::Result;
use super::fields::Fields;
use super::log_level::LogLevel;
use super::scope::{RequestScope, Scope};
use crate::backends::{build_backend, Backend, BackendKind};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct ContextLogger<S: Scope = RequestScope> {
    min_level: LogLevel,
    scope: Arc<RwLock<S>>,
    // Taken and replaced on every with_fields call; only transiently None.
    backend: Option<Box<dyn Backend>>,
}

impl<S: Scope> ContextLogger<S> {
    /// Build a context logger bound to `scope` with its own backend
    /// instance.
    ///
    /// The configuration's level string is parsed permissively for the
    /// filtering minimum here; the backend applies its own strict parse and
    /// may reject construction. No logger is returned on failure.
    pub fn new(scope: Arc<RwLock<S>>, config: &Configuration, kind: BackendKind) -> Result<Self> {
        let backend = build_backend(config, kind)?;
        Ok(Self {
            min_level: LogLevel::parse_permissive(&config.log_level),
            scope,
            backend: Some(backend),
        })
    }

    /// Build a context logger around an already-constructed backend.
    pub fn with_backend(
        scope: Arc<RwLock<S>>,
        min_level: LogLevel,
        backend: Box<dyn Backend>,
    ) -> Self {
        Self {
            min_level,
            scope,
            backend: Some(backend),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Buffer a debug entry. No emission happens until `msg`.
    pub fn debug(&mut self, line: impl Into<String>) {
        self.append(BufferKey::Debug, line.into());
    }

    /// Buffer an info entry.
    pub fn info(&mut self, line: impl Into<String>) {
        self.append(BufferKey::Info, line.into());
    }

    /// Buffer an error entry.
    pub fn error(&mut self, line: impl Into<String>) {
        self.append(BufferKey::Error, line.into());
    }

    /// Buffer free-form request data. Readable through the scope but never
    /// folded into the flush.
    pub fn custom_data(&mut self, line: impl Into<String>) {
        self.append(BufferKey::CustomData, line.into());
    }

    fn append(&mut self, key: BufferKey, line: String) {
        self.scope.write().append_entry(key, line);
    }

    /// Immediately fold `fields` into the backend handle. Chainable;
    /// fields accumulate across calls, last write wins on key collision.
    pub fn with_fields(&mut self, fields: Fields) -> &mut Self {
        if let Some(backend) = self.backend.take() {
            self.backend = Some(backend.with_fields(fields));
        }
        self
    }

    /// Flush: fold every qualifying buffered entry into the backend as a
    /// `{tag}_{index}` field, then emit `final_message` once.
    ///
    /// Buffers are not cleared; a second call re-emits previously buffered
    /// entries.
    pub fn msg(&mut self, final_message: &str) {
        for key in BufferKey::FLUSH_ORDER {
            self.fold_buffer(key);
        }
        if let Some(backend) = &self.backend {
            backend.emit(final_message);
        }
    }

    fn fold_buffer(&mut self, key: BufferKey) {
        if !key.level().is_emittable(self.min_level) {
            return;
        }
        let entries: Vec<String> = self.scope.read().entries(key).to_vec();
        for (index, entry) in entries.into_iter().enumerate() {
            let field = Fields::new().with_field(format!("{}_{}", key, index), entry);
            self.with_fields(field);
        }
    }

    /// Effective severity label for the aggregated event.
    ///
    /// Walks the buffers in ascending severity order; each non-empty,
    /// emittable buffer overwrites the running level, so the most severe
    /// qualifying one wins. Starts from the configured minimum and falls
    /// back to `"DEFAULT"` when that has no label. Read-only; safe before
    /// or after `msg`.
    pub fn severity(&self) -> &'static str {
        let scope = self.scope.read();
        let mut current = self.min_level;
        for key in BufferKey::ASCENDING {
            let level = key.level();
            if !scope.entries(key).is_empty() && level.is_emittable(self.min_level) {
                current = level;
            }
        }
        current.severity_label().unwrap_or("DEFAULT")
    }
}

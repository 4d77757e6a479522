//! Typed logger registry
//!
//! The well-known slot a request framework stores its context logger in.
//! Retrieval is a found/not-found result with a typed error, not an
//! unchecked downcast.

use super::context_logger::ContextLogger;
use super::error::{ContextLogError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Well-known registry slot for the context logger.
pub const LOGGER_KEY: &str = "LOGGER_INTERFACE";

/// A context logger shared with request-handling code.
pub type SharedLogger = Arc<RwLock<ContextLogger>>;

/// String-keyed registry of context loggers.
#[derive(Default)]
pub struct LoggerRegistry {
    entries: HashMap<String, SharedLogger>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a logger under the well-known key.
    pub fn insert(&mut self, logger: SharedLogger) {
        self.insert_at(LOGGER_KEY, logger);
    }

    /// Store a logger under an explicit key.
    pub fn insert_at(&mut self, key: &str, logger: SharedLogger) {
        self.entries.insert(key.to_string(), logger);
    }

    /// Retrieve the logger stored under the well-known key.
    pub fn logger(&self) -> Result<SharedLogger> {
        self.logger_at(LOGGER_KEY)
    }

    /// Retrieve the logger stored under an explicit key.
    pub fn logger_at(&self, key: &str) -> Result<SharedLogger> {
        self.entries
            .get(key)
            .cloned()
            .ok_or(ContextLogError::NotRegistered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::BackendKind;
    use crate::core::config::Configuration;
    use crate::core::scope::shared_scope;

    fn make_logger() -> SharedLogger {
        let config = Configuration::new().with_log_level("info");
        let logger = ContextLogger::new(shared_scope(), &config, BackendKind::Console)
            .expect("console backend");
        Arc::new(RwLock::new(logger))
    }

    #[test]
    fn test_insert_and_retrieve() {
        let mut registry = LoggerRegistry::new();
        registry.insert(make_logger());

        let shared = registry.logger().expect("registered");
        shared.write().info("retrieved and usable");
        assert_eq!(shared.read().severity(), "INFO");
    }

    #[test]
    fn test_missing_logger_is_typed_error() {
        let registry = LoggerRegistry::new();
        assert!(matches!(
            registry.logger(),
            Err(ContextLogError::NotRegistered)
        ));
    }

    #[test]
    fn test_explicit_key() {
        let mut registry = LoggerRegistry::new();
        registry.insert_at("worker_logger", make_logger());

        assert!(registry.logger_at("worker_logger").is_ok());
        assert!(registry.logger().is_err());
    }
}

//! Request-scoped key/value store and deferred field buffers
//!
//! The buffers are typed: keyed by the closed [`BufferKey`] enum, each
//! statically an ordered `Vec<String>`. There is no dynamically-typed slot a
//! caller could corrupt by writing the wrong shape, so the key-collision
//! fault class is gone by construction. Unrelated request data goes through
//! the separate string-keyed accessors.

use super::buffer_key::BufferKey;
use super::fields::FieldValue;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Well-known request-data keys.
pub const X_REQUEST_ID: &str = "x_request_id";
pub const APP_NAME: &str = "app_name";
pub const SEVERITY: &str = "severity";

/// The store a context logger buffers into for one logical unit of work.
///
/// Buffer writes under the logger's reserved keys are owned by exactly one
/// logger instance; the generic request-data side may be shared with
/// surrounding request code.
pub trait Scope {
    /// Append one formatted line under `key`, creating the buffer lazily on
    /// first write. Append order is preserved.
    fn append_entry(&mut self, key: BufferKey, line: String);

    /// The current buffer contents, empty if never written. Never consumes.
    fn entries(&self, key: BufferKey) -> &[String];

    /// Generic request-data read.
    fn get(&self, key: &str) -> Option<&FieldValue>;

    /// Generic request-data write.
    fn set(&mut self, key: &str, value: FieldValue);
}

/// Default in-memory scope for one request.
#[derive(Debug, Default)]
pub struct RequestScope {
    buffers: HashMap<BufferKey, Vec<String>>,
    values: HashMap<String, FieldValue>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scope for RequestScope {
    fn append_entry(&mut self, key: BufferKey, line: String) {
        self.buffers.entry(key).or_default().push(line);
    }

    fn entries(&self, key: BufferKey) -> &[String] {
        self.buffers.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: FieldValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// A scope shared between the logger and the surrounding request code.
pub type SharedScope = Arc<RwLock<RequestScope>>;

/// Create a fresh shared scope for one unit of work.
pub fn shared_scope() -> SharedScope {
    Arc::new(RwLock::new(RequestScope::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lazy_init_and_fifo() {
        let mut scope = RequestScope::new();
        assert!(scope.entries(BufferKey::Info).is_empty());

        scope.append_entry(BufferKey::Info, "first".to_string());
        scope.append_entry(BufferKey::Info, "second".to_string());
        scope.append_entry(BufferKey::Info, "third".to_string());

        assert_eq!(scope.entries(BufferKey::Info), ["first", "second", "third"]);
    }

    #[test]
    fn test_buffers_are_independent() {
        let mut scope = RequestScope::new();
        scope.append_entry(BufferKey::Error, "boom".to_string());

        assert_eq!(scope.entries(BufferKey::Error).len(), 1);
        assert!(scope.entries(BufferKey::Debug).is_empty());
    }

    #[test]
    fn test_read_does_not_consume() {
        let mut scope = RequestScope::new();
        scope.append_entry(BufferKey::Debug, "once".to_string());

        assert_eq!(scope.entries(BufferKey::Debug).len(), 1);
        assert_eq!(scope.entries(BufferKey::Debug).len(), 1);
    }

    #[test]
    fn test_request_data_roundtrip() {
        let mut scope = RequestScope::new();
        assert!(scope.get(X_REQUEST_ID).is_none());

        scope.set(X_REQUEST_ID, FieldValue::from("req-42"));
        assert_eq!(
            scope.get(X_REQUEST_ID),
            Some(&FieldValue::String("req-42".to_string()))
        );
    }
}

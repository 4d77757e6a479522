//! Core types: severity policy, scope buffers and the context logger

pub mod buffer_key;
pub mod config;
pub mod context_logger;
pub mod error;
pub mod fields;
pub mod log_level;
pub mod registry;
pub mod scope;
pub mod timestamp;

pub use buffer_key::BufferKey;
pub use config::{Configuration, FieldMap};
pub use context_logger::ContextLogger;
pub use error::{ContextLogError, Result};
pub use fields::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use registry::{LoggerRegistry, SharedLogger, LOGGER_KEY};
pub use scope::{shared_scope, RequestScope, Scope, SharedScope};
pub use timestamp::TimestampFormat;

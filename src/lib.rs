//! # ctxlog
//!
//! A request-scoped deferred structured-logging facade with pluggable
//! backends.
//!
//! ## Features
//!
//! - **Deferred Accumulation**: Leveled calls buffer into a request scope;
//!   one structured event is emitted at the end of the request
//! - **Level Filtering**: Buffered entries below the configured minimum are
//!   dropped at flush time
//! - **Pluggable Backends**: Anything satisfying the two-operation
//!   `emit`/`with_fields` capability plugs in
//! - **Effective Severity**: The aggregated event carries the label of the
//!   most severe qualifying buffer

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{Backend, BackendKind, ConsoleBackend};
    pub use crate::core::{
        shared_scope, BufferKey, Configuration, ContextLogError, ContextLogger, FieldMap,
        FieldValue, Fields, LogLevel, LoggerRegistry, RequestScope, Result, Scope, SharedLogger,
        SharedScope, TimestampFormat, LOGGER_KEY,
    };
}

pub use backends::{Backend, BackendKind, ConsoleBackend, EmitEvent, OutputFormat};
pub use core::{
    shared_scope, BufferKey, Configuration, ContextLogError, ContextLogger, FieldMap, FieldValue,
    Fields, LogLevel, LoggerRegistry, RequestScope, Result, Scope, SharedLogger, SharedScope,
    TimestampFormat, LOGGER_KEY,
};

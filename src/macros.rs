//! Buffering macros with automatic message formatting.
//!
//! These macros format their arguments like `format!` and append the result
//! to the logger's deferred buffer for that level. Nothing is emitted until
//! the logger's `msg` call.
//!
//! # Examples
//!
//! ```
//! use ctxlog::prelude::*;
//! use ctxlog::{defer_error, defer_info};
//!
//! let config = Configuration::new().with_log_level("debug");
//! let mut logger = ContextLogger::new(shared_scope(), &config, BackendKind::Console).unwrap();
//!
//! defer_info!(logger, "handling request");
//! defer_error!(logger, "user {} failed with code {}", "alice", 42);
//! logger.msg("request finished");
//! ```

/// Buffer a debug-level entry with automatic formatting.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let config = Configuration::new().with_log_level("debug");
/// # let mut logger = ContextLogger::new(shared_scope(), &config, BackendKind::Console).unwrap();
/// use ctxlog::defer_debug;
/// defer_debug!(logger, "cache miss for key {}", "user:42");
/// ```
#[macro_export]
macro_rules! defer_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

/// Buffer an info-level entry with automatic formatting.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let config = Configuration::new().with_log_level("debug");
/// # let mut logger = ContextLogger::new(shared_scope(), &config, BackendKind::Console).unwrap();
/// use ctxlog::defer_info;
/// defer_info!(logger, "processed {} items", 100);
/// ```
#[macro_export]
macro_rules! defer_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Buffer an error-level entry with automatic formatting.
///
/// # Examples
///
/// ```
/// # use ctxlog::prelude::*;
/// # let config = Configuration::new().with_log_level("debug");
/// # let mut logger = ContextLogger::new(shared_scope(), &config, BackendKind::Console).unwrap();
/// use ctxlog::defer_error;
/// defer_error!(logger, "upstream returned {}", 502);
/// ```
#[macro_export]
macro_rules! defer_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::backends::BackendKind;
    use crate::core::{shared_scope, Configuration, ContextLogger};

    fn test_logger() -> ContextLogger {
        let config = Configuration::new().with_log_level("debug");
        ContextLogger::new(shared_scope(), &config, BackendKind::Console).unwrap()
    }

    #[test]
    fn test_defer_debug_macro() {
        let mut logger = test_logger();
        defer_debug!(logger, "plain message");
        defer_debug!(logger, "value: {}", 42);
    }

    #[test]
    fn test_defer_info_macro() {
        let mut logger = test_logger();
        defer_info!(logger, "items: {}", 100);
        assert_eq!(logger.severity(), "INFO");
    }

    #[test]
    fn test_defer_error_macro() {
        let mut logger = test_logger();
        defer_error!(logger, "code: {}, message: {}", 500, "internal");
        assert_eq!(logger.severity(), "ERROR");
    }
}

//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, ContextLogError>;

#[derive(Debug, thiserror::Error)]
pub enum ContextLogError {
    /// Backend selector not in the known set
    #[error("Unsupported backend selector: '{selector}'")]
    UnsupportedBackend { selector: String },

    /// Backend declared but not wired up
    #[error("Backend '{backend}' is not implemented")]
    NotImplemented { backend: &'static str },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// No logger stored in the registry
    #[error("No context logger registered")]
    NotRegistered,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ContextLogError {
    /// Create an unsupported backend selector error
    pub fn unsupported_backend(selector: impl Into<String>) -> Self {
        ContextLogError::UnsupportedBackend {
            selector: selector.into(),
        }
    }

    /// Create a not-implemented backend error
    pub fn not_implemented(backend: &'static str) -> Self {
        ContextLogError::NotImplemented { backend }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        ContextLogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ContextLogError::unsupported_backend("gelf");
        assert!(matches!(err, ContextLogError::UnsupportedBackend { .. }));

        let err = ContextLogError::config("ConsoleBackend", "Invalid log level: 'chatty'");
        assert!(matches!(err, ContextLogError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = ContextLogError::unsupported_backend("gelf");
        assert_eq!(err.to_string(), "Unsupported backend selector: 'gelf'");

        let err = ContextLogError::not_implemented("syslog");
        assert_eq!(err.to_string(), "Backend 'syslog' is not implemented");

        let err = ContextLogError::config("ConsoleBackend", "Invalid log level: 'chatty'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for ConsoleBackend: Invalid log level: 'chatty'"
        );
    }
}

//! Unified error handling for the Zephyr Scale library
//!
//! Every failure the client or tool layer can produce collapses into
//! [`ZephyrError`]. Nothing propagates as a panic past the tool layer;
//! the MCP dispatcher converts errors into a JSON envelope using
//! [`ZephyrError::error_code`].

use thiserror::Error;

/// The main error type for the Zephyr Scale library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZephyrError {
    /// Required configuration is missing or invalid at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input failed a declared constraint.
    /// Carries one or more field-qualified messages.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The remote API returned 404 for the referenced resource
    #[error("Not found: {resource}")]
    NotFound {
        /// Description of the missing resource, including its id or key
        resource: String,
    },

    /// The remote API rejected the request with a non-2xx status,
    /// or returned a 2xx body that failed schema validation
    #[error("Zephyr Scale API error (HTTP {status}): {message}")]
    Upstream {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// No response was received at all (DNS, connect, or timeout failure)
    #[error("Failed to connect to Zephyr Scale Cloud API: {0}")]
    Transport(String),
}

impl ZephyrError {
    /// Build a validation error from a single field-qualified message
    pub fn validation(message: impl Into<String>) -> Self {
        ZephyrError::Validation(vec![message.into()])
    }

    /// Build a not-found error naming the missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        ZephyrError::NotFound {
            resource: resource.into(),
        }
    }

    /// Numeric error code used by the MCP error envelope.
    ///
    /// Validation failures map to 400, missing resources to 404, and
    /// everything else (configuration, upstream, transport) to 500.
    pub fn error_code(&self) -> u16 {
        match self {
            ZephyrError::Validation(_) => 400,
            ZephyrError::NotFound { .. } => 404,
            ZephyrError::Configuration(_)
            | ZephyrError::Upstream { .. }
            | ZephyrError::Transport(_) => 500,
        }
    }
}

/// Result type alias for operations in this library
pub type Result<T> = std::result::Result<T, ZephyrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_fields() {
        let err = ZephyrError::Validation(vec![
            "Field 'name': must not be empty".to_string(),
            "Field 'color': must match #RGB or #RRGGBB".to_string(),
        ]);
        let message = err.to_string();
        assert!(message.contains("Field 'name'"));
        assert!(message.contains("; "));
        assert!(message.contains("Field 'color'"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ZephyrError::validation("bad input").error_code(), 400);
        assert_eq!(ZephyrError::not_found("priority 999").error_code(), 404);
        assert_eq!(
            ZephyrError::Configuration("missing token".to_string()).error_code(),
            500
        );
        assert_eq!(
            ZephyrError::Upstream {
                status: 503,
                message: "unavailable".to_string()
            }
            .error_code(),
            500
        );
        assert_eq!(
            ZephyrError::Transport("connection refused".to_string()).error_code(),
            500
        );
    }

    #[test]
    fn test_not_found_names_resource() {
        let err = ZephyrError::not_found("priority with ID 999");
        assert_eq!(err.to_string(), "Not found: priority with ID 999");
    }
}

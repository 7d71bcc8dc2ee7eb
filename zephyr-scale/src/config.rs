//! Configuration management for the Zephyr Scale client
//!
//! Configuration is loaded once at process start from environment
//! variables and injected into the client and tool layer explicitly;
//! there is no global, mutable configuration state.

use crate::error::{Result, ZephyrError};

/// Environment variable holding the required API token
pub const ENV_API_TOKEN: &str = "ZEPHYR_SCALE_API_TOKEN";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "ZEPHYR_SCALE_BASE_URL";
/// Environment variable holding an optional default project key
pub const ENV_DEFAULT_PROJECT_KEY: &str = "ZEPHYR_SCALE_DEFAULT_PROJECT_KEY";

/// Production endpoint used when no base URL override is set
pub const DEFAULT_BASE_URL: &str = "https://api.zephyrscale.smartbear.com/v2";

/// Connection settings for the Zephyr Scale Cloud REST API
#[derive(Debug, Clone)]
pub struct ZephyrConfig {
    /// Bearer token sent on every request
    pub api_token: String,
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Optional project key used when a tool call does not supply one
    pub project_key: Option<String>,
}

impl ZephyrConfig {
    /// Create a config with an explicit token and default endpoint
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            project_key: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ZephyrError::Configuration` if `ZEPHYR_SCALE_API_TOKEN`
    /// is missing or empty.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var(ENV_API_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                ZephyrError::Configuration(format!(
                    "{ENV_API_TOKEN} environment variable is required"
                ))
            })?;

        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let project_key = std::env::var(ENV_DEFAULT_PROJECT_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_API_TOKEN);
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_DEFAULT_PROJECT_KEY);
    }

    #[test]
    #[serial]
    fn test_from_env_valid() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "test_token_123");
        std::env::set_var(ENV_BASE_URL, "https://api.example.com/v2");
        std::env::set_var(ENV_DEFAULT_PROJECT_KEY, "TEST");

        let config = ZephyrConfig::from_env().unwrap();
        assert_eq!(config.api_token, "test_token_123");
        assert_eq!(config.base_url, "https://api.example.com/v2");
        assert_eq!(config.project_key.as_deref(), Some("TEST"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        clear_env();

        let err = ZephyrConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_API_TOKEN));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "test_token_123");

        let config = ZephyrConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.project_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_trims_trailing_slash() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "token");
        std::env::set_var(ENV_BASE_URL, "https://api.example.com/v2/");

        let config = ZephyrConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v2");

        clear_env();
    }

    #[test]
    fn test_direct_creation() {
        let config = ZephyrConfig::new("direct_token");
        assert_eq!(config.api_token, "direct_token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.project_key.is_none());
    }
}

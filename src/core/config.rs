//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default backend base URL when `API_UPSTREAM` is not set.
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API the `/api` proxy forwards to.
    /// Example: http://127.0.0.1:8000
    pub api_upstream: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_upstream: std::env::var("API_UPSTREAM").ok(),
        }
    }

    /// Check if an explicit backend upstream is configured
    pub fn has_api_upstream(&self) -> bool {
        self.api_upstream.is_some()
    }

    /// Backend upstream URL, trailing slash stripped, defaulting to localhost
    pub fn api_upstream(&self) -> String {
        let url = self
            .api_upstream
            .as_deref()
            .unwrap_or(DEFAULT_API_UPSTREAM);
        url.trim_end_matches('/').to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_upstream() {
        let config = Config {
            api_upstream: Some("http://backend:8000/".to_string()),
        };

        assert!(config.has_api_upstream());
        assert_eq!(config.api_upstream(), "http://backend:8000");
    }

    #[test]
    fn test_config_defaults_to_localhost() {
        let config = Config { api_upstream: None };

        assert!(!config.has_api_upstream());
        assert_eq!(config.api_upstream(), DEFAULT_API_UPSTREAM);
    }
}

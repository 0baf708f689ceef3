//! Public configuration for the upstream clients.
//!
//! Both configs are built once at startup and handed to the client
//! constructors; nothing here reads the environment.

use std::time::Duration;

/// Default base URL of the game-stats API.
pub const DEFAULT_BRAWL_BASE_URL: &str = "https://api.brawlstars.com/v1";

/// Default base URL of the GIF search API.
pub const DEFAULT_GIPHY_BASE_URL: &str = "https://api.giphy.com/v1/gifs";

const USER_AGENT: &str = concat!("brawl-upstream/", env!("CARGO_PKG_VERSION"));

/// Configuration for the game-stats client.
///
/// # Example
///
/// ```
/// use brawl_upstream::BrawlClientConfig;
/// use std::time::Duration;
///
/// let config = BrawlClientConfig::new()
///     .with_api_key("token")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct BrawlClientConfig {
    /// Base URL, including the API version prefix
    pub(crate) base_url: String,
    /// Bearer credential; sent even when empty
    pub(crate) api_key: Option<String>,
    /// Request timeout; `None` keeps the HTTP client default
    pub(crate) timeout: Option<Duration>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for BrawlClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BRAWL_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl BrawlClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the game-stats API.
    ///
    /// Defaults to `https://api.brawlstars.com/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer credential.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional bearer credential.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set an optional request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Configuration for the GIF search client.
#[derive(Debug, Clone)]
pub struct GiphyClientConfig {
    /// Base URL of the GIF endpoints
    pub(crate) base_url: String,
    /// API key, sent as the `api_key` query parameter
    pub(crate) api_key: Option<String>,
    /// Request timeout; `None` keeps the HTTP client default
    pub(crate) timeout: Option<Duration>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for GiphyClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GIPHY_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl GiphyClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the GIF endpoints.
    ///
    /// Defaults to `https://api.giphy.com/v1/gifs`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set an optional request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brawl_config() {
        let config = BrawlClientConfig::new();
        assert_eq!(config.base_url, "https://api.brawlstars.com/v1");
        assert!(config.api_key.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("brawl-upstream/"));
    }

    #[test]
    fn test_brawl_builder_pattern() {
        let config = BrawlClientConfig::new()
            .with_base_url("http://127.0.0.1:9000/v1")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_default_giphy_config() {
        let config = GiphyClientConfig::new();
        assert_eq!(config.base_url, "https://api.giphy.com/v1/gifs");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_optional_setters() {
        let config = GiphyClientConfig::new()
            .with_optional_api_key(Some("key".to_string()))
            .with_optional_timeout(None);
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert!(config.timeout.is_none());

        let config = BrawlClientConfig::new()
            .with_api_key("key")
            .with_optional_api_key(None);
        assert!(config.api_key.is_none());
    }
}

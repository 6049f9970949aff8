//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the request pipeline and default transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Server endpoint (scheme + host + port), e.g. `https://mft.example.com:8001`
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Administrative username for Basic authentication
    #[serde(default)]
    pub username: Option<String>,

    /// Administrative password for Basic authentication
    #[serde(default)]
    pub password: Option<String>,

    /// Path prefix prepended to every request path
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// User agent applied when the caller sets none
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum redirect hops followed before failing
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Request timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Connection timeout
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            username: None,
            password: None,
            path_prefix: default_path_prefix(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl HttpConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set both halves of the Basic credentials
    pub fn with_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.with_username(username).with_password(password)
    }

    /// Set the path prefix (empty string disables prefixing)
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Set the default user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the redirect hop limit
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Default value functions for serde
fn default_path_prefix() -> String {
    "/goanywhere/rest/gacmd/v1".to_string()
}

fn default_user_agent() -> String {
    format!("goanywhere-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_redirects() -> usize {
    10
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.path_prefix, "/goanywhere/rest/gacmd/v1");
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.endpoint.is_none());
        assert!(config.username.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HttpConfig::new()
            .with_endpoint("https://mft.example.com:8001")
            .with_credentials("admin", "secret")
            .with_max_redirects(3)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://mft.example.com:8001")
        );
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_user_agent_names_crate() {
        let config = HttpConfig::default();
        assert!(config.user_agent.starts_with("goanywhere-rs/"));
    }
}

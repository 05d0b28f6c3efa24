//! Client configuration
//!
//! Holds everything the client needs to talk to the API. There is no global
//! key or backend: build a [`ClientConfig`] and hand it to
//! [`Client::new`](crate::Client::new).

use crate::error::{Error, Result};
use std::time::Duration;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Environment variable holding the secret key
pub const ENV_API_KEY: &str = "STRIPE_KEY";

/// Environment variable overriding the API root
pub const ENV_BASE_URL: &str = "STRIPE_API_BASE";

/// Configuration for the API client
#[derive(Clone)]
pub struct ClientConfig {
    /// Secret API key sent with every request
    pub api_key: String,
    /// Base URL for all requests
    pub base_url: String,
    /// Pinned API version (sent as `Stripe-Version`)
    pub api_version: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: None,
            timeout: Duration::from_secs(80),
            user_agent: format!("stripe-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load from `STRIPE_KEY` and, optionally, `STRIPE_API_BASE`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| Error::missing_field(ENV_API_KEY))?;
        let mut builder = Self::builder().api_key(api_key);
        if let Ok(base) = std::env::var(ENV_BASE_URL) {
            builder = builder.base_url(base);
        }
        builder.build()
    }

    /// Check that the config can be used to make requests
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::invalid_value(
                "base_url",
                format!("expected an http(s) URL, got '{}'", self.base_url),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the secret key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Pin an API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

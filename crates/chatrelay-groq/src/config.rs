//! Public configuration for the Groq client.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, Secret};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration for the Groq client.
///
/// # Example
///
/// ```
/// use chatrelay_groq::GroqClientConfig;
/// use std::time::Duration;
///
/// let config = GroqClientConfig::new("gsk_example")
///     .with_base_url("http://127.0.0.1:8080/v1")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct GroqClientConfig {
    pub(crate) api_key: Secret<String>,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// `None` leaves the HTTP client without a request timeout.
    pub(crate) timeout: Option<Duration>,
}

impl GroqClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_secret(Secret::new(api_key.into()))
    }

    pub fn with_secret(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("chatrelay-groq/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }

    /// Set the API root. Defaults to `https://api.groq.com/openai/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the base URL only when one is given.
    #[must_use]
    pub fn with_optional_base_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl fmt::Debug for GroqClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

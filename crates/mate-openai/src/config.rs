//! Public configuration for the completion client.

use std::time::Duration;

/// Default API root of the hosted service.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the completion client.
///
/// # Example
///
/// ```
/// use mate_openai::OpenAiClientConfig;
/// use std::time::Duration;
///
/// let config = OpenAiClientConfig::new()
///     .with_api_key("sk-test")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Clone)]
pub struct OpenAiClientConfig {
    /// API root; `/chat/completions` is appended to it
    pub(crate) base_url: String,
    /// Bearer credential
    pub(crate) api_key: Option<String>,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("mate-openai/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for OpenAiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl OpenAiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    ///
    /// Defaults to `https://api.openai.com/v1`.
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

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Configured API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

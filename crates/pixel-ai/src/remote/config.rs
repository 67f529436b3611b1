//! Remote responder configuration.

use std::fmt;
use std::time::Duration;

use pixel_common::ConfigError;

use crate::prompts::SYSTEM_PROMPT;

pub const DEFAULT_ENDPOINT: &str = "/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "grok-4-fast";

/// Remote chat-completion configuration.
#[derive(Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub token: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    /// `None` omits `max_tokens` from the request.
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
    pub max_retries: u32,
    /// Unit of the linear retry backoff (`attempt * retry_backoff`).
    pub retry_backoff: Duration,
    pub system_prompt: Option<String>,
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token: token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.6,
            max_tokens: None,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_backoff: Duration::from_millis(500),
            system_prompt: Some(SYSTEM_PROMPT.to_string()),
        }
    }

    /// Build from optional credentials, naming whichever one is missing.
    pub fn from_credentials(
        base_url: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential("GROK_BASE_URL".into()))?;
        let token = token
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential("GROK_AUTH_TOKEN".into()))?;
        Ok(Self::new(base_url, token))
    }

    /// Full request URL.
    pub fn url(&self) -> String {
        let endpoint = if self.endpoint.starts_with('/') {
            self.endpoint.clone()
        } else {
            format!("/{}", self.endpoint)
        };
        format!("{}{}", self.base_url, endpoint)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens.filter(|n| *n > 0);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// `None` sends the history without a system message.
    pub fn with_system_prompt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }
}

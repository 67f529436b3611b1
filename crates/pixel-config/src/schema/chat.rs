//! Chat model configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Settings for the remote chat-completion backend.
///
/// `base_url` and `api_key` may be left empty in the file; they are then
/// filled from `GROK_BASE_URL` / `GROK_AUTH_TOKEN`. When either is still
/// missing the application falls back to the local responder.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    pub base_url: String,
    /// Bearer token. Never written back to disk.
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Path appended to `base_url`.
    pub endpoint: String,
    /// Completion token cap; 0 omits the field from requests.
    pub max_tokens: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Retries for transient failures (valid range: 0-10).
    pub max_retries: u32,
    /// Set to false to always use the local responder.
    pub remote_enabled: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: "grok-4-fast".into(),
            temperature: 0.6,
            base_url: String::new(),
            api_key: String::new(),
            endpoint: "/v1/chat/completions".into(),
            max_tokens: 0,
            timeout_secs: 30,
            max_retries: 2,
            remote_enabled: true,
        }
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("remote_enabled", &self.remote_enabled)
            .finish()
    }
}

impl ChatConfig {
    /// Base URL without trailing slashes, if configured.
    pub fn base_url(&self) -> Option<&str> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn api_key(&self) -> Option<&str> {
        let trimmed = self.api_key.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn max_tokens(&self) -> Option<u32> {
        (self.max_tokens > 0).then_some(self.max_tokens)
    }
}

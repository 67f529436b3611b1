//! ChatResponder implementation for RemoteResponder (send + retry).

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ChatResponder, Message, ResponderError, ResponderKind};

use super::client::{parse_response, RemoteResponder, ERROR_BODY_CHARS};

impl RemoteResponder {
    /// Send one request and return the raw body of a successful response.
    async fn send_once(&self, history: &[Message]) -> Result<String, ResponderError> {
        let body = self.build_request_body(history);

        let response = self
            .http
            .post(self.config.url())
            .bearer_auth(&self.config.token)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ResponderError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = text.chars().take(ERROR_BODY_CHARS).collect::<String>();
            return Err(ResponderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }

    /// Send with retries for transient failures.
    async fn send_with_retry(&self, history: &[Message]) -> Result<String, ResponderError> {
        let mut attempt = 0u32;
        loop {
            match self.send_once(history).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.retry_backoff * attempt;
                    warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        ?delay,
                        "remote chat request failed, retrying: {e}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Send a request and return the decoded JSON without interpreting it.
    pub async fn complete_raw(&self, history: &[Message]) -> Result<Value, ResponderError> {
        let body = self.send_with_retry(history).await?;
        serde_json::from_str(&body).map_err(|e| ResponderError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ChatResponder for RemoteResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Remote
    }

    async fn reply(&self, history: &[Message]) -> Result<String, ResponderError> {
        debug!(model = %self.config.model, messages = history.len(), "remote chat request");
        let body = self.send_with_retry(history).await?;
        parse_response(&body)
    }
}

//! Remote responder struct, request building, and response parsing.

use serde_json::{json, Value};

use crate::{Message, ResponderError, Role};

use super::config::RemoteConfig;

/// Longest slice of an error body kept in `ResponderError::Api`.
pub(crate) const ERROR_BODY_CHARS: usize = 200;

/// Chat-completion client bound to one endpoint.
pub struct RemoteResponder {
    pub(crate) config: RemoteConfig,
    pub(crate) http: reqwest::Client,
}

impl RemoteResponder {
    /// `http` comes from `ClientCapabilities` so the client is built once.
    pub fn new(config: RemoteConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Build the JSON request body: system prompt first, then history.
    pub(crate) fn build_request_body(&self, history: &[Message]) -> Value {
        let mut msgs = Vec::with_capacity(history.len() + 1);
        if let Some(ref system) = self.config.system_prompt {
            msgs.push(json!({ "role": "system", "content": system }));
        }
        for msg in history {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            msgs.push(json!({ "role": role, "content": msg.content }));
        }

        let mut body = json!({
            "model": self.config.model,
            "messages": msgs,
            "temperature": self.config.temperature,
        });
        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        body
    }
}

/// Extract `choices[0].message.content` from a chat-completion response.
pub fn extract_content(json: &Value) -> Option<&str> {
    json.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

/// Parse a response body that already arrived with a success status.
///
/// A success status with a body that is not JSON at all (an HTML gateway
/// page, plain text) is treated like a JSON body of the wrong shape: the
/// endpoint does not speak chat completions.
pub(crate) fn parse_response(body: &str) -> Result<String, ResponderError> {
    let json: Value = serde_json::from_str(body).map_err(|e| {
        ResponderError::IncompatibleResponse(format!("body is not JSON: {e}"))
    })?;
    extract_content(&json)
        .map(str::to_string)
        .ok_or_else(|| {
            ResponderError::IncompatibleResponse(
                "missing choices[0].message.content".into(),
            )
        })
}

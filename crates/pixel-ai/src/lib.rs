//! Conversation engine for Pixel.
//!
//! Provides the `ChatResponder` abstraction with two variants:
//! - a remote responder for hosted chat-completion APIs
//! - an offline keyword responder that never fails
//!
//! plus the `ConversationSession` that owns history and falls back from
//! remote to local when the server speaks an incompatible dialect.

pub mod factory;
pub mod local;
pub mod prompts;
pub mod remote;
pub mod session;

use async_trait::async_trait;

pub use factory::{create_responder, ClientCapabilities};
pub use local::LocalResponder;
pub use prompts::SYSTEM_PROMPT;
pub use remote::{RemoteConfig, RemoteResponder};
pub use session::ConversationSession;

/// Something that can produce the next assistant reply for a history.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    fn kind(&self) -> ResponderKind;

    /// `history` ends with the user message being answered.
    async fn reply(&self, history: &[Message]) -> Result<String, ResponderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderKind {
    Remote,
    Local,
}

impl std::fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Local => f.write_str("local"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// `System` only ever appears in outbound requests, never in session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Incompatible response: {0}")]
    IncompatibleResponse(String),
}

impl ResponderError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout | Self::RateLimited => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Parse(_) | Self::IncompatibleResponse(_) => false,
        }
    }

    /// The server answered, but not in the chat-completion shape.
    pub fn is_incompatible(&self) -> bool {
        matches!(self, Self::IncompatibleResponse(_))
    }
}

impl From<reqwest::Error> for ResponderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}

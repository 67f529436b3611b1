//! Session struct and history management.

use crate::{ChatResponder, Message, ResponderKind};

/// A conversation with append-only history and a swappable responder.
pub struct ConversationSession {
    /// User and assistant messages, oldest first.
    pub(super) messages: Vec<Message>,
    pub(super) responder: Box<dyn ChatResponder>,
}

impl ConversationSession {
    pub fn new(responder: Box<dyn ChatResponder>) -> Self {
        Self {
            messages: Vec::new(),
            responder,
        }
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Which responder currently answers.
    pub fn responder_kind(&self) -> ResponderKind {
        self.responder.kind()
    }

    /// Clear conversation history. The responder is left as-is.
    pub fn reset(&mut self) {
        self.messages.clear();
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("messages", &self.messages.len())
            .field("responder", &self.responder.kind())
            .finish()
    }
}

//! The `respond` round trip, including the remote-to-local fallback.

use tracing::{debug, warn};

use crate::{LocalResponder, Message, ResponderError, ResponderKind};

use super::manager::ConversationSession;

impl ConversationSession {
    /// Record `user_text`, ask the responder, and record its trimmed reply.
    ///
    /// On failure the user message stays in history and no assistant
    /// message is added. An incompatible remote reply swaps in the local
    /// responder for good and retries the same history once.
    pub async fn respond(&mut self, user_text: &str) -> Result<String, ResponderError> {
        self.messages.push(Message::user(user_text));

        let first = self.responder.reply(&self.messages).await;
        let reply = match first {
            Err(e) if e.is_incompatible() && self.responder.kind() == ResponderKind::Remote => {
                warn!("remote responder incompatible, switching to local: {e}");
                self.responder = Box::new(LocalResponder::new());
                self.responder.reply(&self.messages).await?
            }
            other => other?,
        };

        let reply = reply.trim().to_string();
        self.messages.push(Message::assistant(reply.clone()));
        debug!(
            responder = %self.responder.kind(),
            history = self.messages.len(),
            "reply recorded"
        );
        Ok(reply)
    }
}

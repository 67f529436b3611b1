//! Conversation session management.
//!
//! A `ConversationSession` holds the message history and the responder
//! that answers it. Callers serialize access; the app's dispatcher keeps
//! at most one `respond` in flight per session.

mod chat;
mod manager;


pub use manager::ConversationSession;

//! Remote chat-completion responder.
//!
//! Talks to any OpenAI-style `/v1/chat/completions` endpoint with bearer
//! auth. Transient failures are retried with linear backoff; a reply that
//! is valid JSON but lacks `choices[0].message.content` is reported as
//! `ResponderError::IncompatibleResponse` so callers can fall back.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::{extract_content, RemoteResponder};
pub use config::RemoteConfig;

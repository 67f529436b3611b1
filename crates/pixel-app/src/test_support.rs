//! Shared fixtures for controller tests.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use pixel_ai::{ChatResponder, ConversationSession, Message, ResponderError, ResponderKind};
use tokio::runtime::Runtime;

use crate::dispatcher::BackgroundDispatcher;

pub fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

/// Responder with a fixed answer and an optional delay.
pub struct Scripted {
    delay: Duration,
    answer: Option<String>,
}

impl Scripted {
    pub fn reply(text: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            answer: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            delay: Duration::ZERO,
            answer: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ChatResponder for Scripted {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Remote
    }

    async fn reply(&self, _history: &[Message]) -> Result<String, ResponderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.answer {
            Some(text) => Ok(text.clone()),
            None => Err(ResponderError::Api {
                status: 503,
                message: "upstream unavailable".into(),
            }),
        }
    }
}

pub fn dispatcher(rt: &Runtime, responder: Scripted) -> BackgroundDispatcher {
    BackgroundDispatcher::new(
        "test",
        ConversationSession::new(Box::new(responder)),
        rt.handle().clone(),
    )
}

/// Call `step` until it returns true; panics after five seconds.
pub fn settle(mut step: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if step() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("condition not reached in time");
}

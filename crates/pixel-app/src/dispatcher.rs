//! Single-flight background dispatch of conversation turns.
//!
//! Each UI owner (the overlay, the chat window) holds one
//! `BackgroundDispatcher` over its own session. The pending state lives on
//! the UI thread: it is set in `submit` before the worker starts and is
//! only cleared when `poll` observes `Completed`.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixel_ai::ConversationSession;
use pixel_common::RequestId;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Reported when a worker ends without sending its result.
pub const WORKER_LOST: &str = "background worker stopped unexpectedly";

/// Default bound on waiting for an in-flight worker at teardown.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// One user action waiting for a reply.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub id: RequestId,
    pub text: String,
    pub requested_at: Instant,
}

impl DispatchRequest {
    fn new(text: String) -> Self {
        Self {
            id: RequestId::new(),
            text,
            requested_at: Instant::now(),
        }
    }
}

/// Results delivered to the UI thread, in order: one of `Reply`/`Error`,
/// then `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Reply(String),
    Error(String),
    Completed,
}

struct InFlight {
    request: DispatchRequest,
    handle: JoinHandle<()>,
}

pub struct BackgroundDispatcher {
    owner: &'static str,
    session: Arc<Mutex<ConversationSession>>,
    runtime: Handle,
    event_tx: mpsc::Sender<DispatchEvent>,
    event_rx: mpsc::Receiver<DispatchEvent>,
    in_flight: Option<InFlight>,
}

impl BackgroundDispatcher {
    pub fn new(owner: &'static str, session: ConversationSession, runtime: Handle) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            owner,
            session: Arc::new(Mutex::new(session)),
            runtime,
            event_tx,
            event_rx,
            in_flight: None,
        }
    }

    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// True while a dispatch is in flight.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a conversation turn. Returns `false` (and does nothing) when
    /// one is already in flight.
    pub fn submit(&mut self, text: impl Into<String>) -> bool {
        if self.in_flight.is_some() {
            debug!(owner = self.owner, "dispatch rejected: request in flight");
            return false;
        }

        let request = DispatchRequest::new(text.into());
        let session = Arc::clone(&self.session);
        let tx = self.event_tx.clone();
        let text = request.text.clone();
        let id = request.id.clone();
        let owner = self.owner;

        let handle = self.runtime.spawn(async move {
            let result = {
                let mut session = session.lock().await;
                session.respond(&text).await
            };
            let event = match result {
                Ok(reply) => DispatchEvent::Reply(reply),
                Err(e) => {
                    warn!(owner, request_id = %id, "responder failed: {e}");
                    DispatchEvent::Error(e.to_string())
                }
            };
            let _ = tx.send(event);
            let _ = tx.send(DispatchEvent::Completed);
        });

        debug!(owner, request_id = %request.id, "dispatch started");
        self.in_flight = Some(InFlight { request, handle });
        true
    }

    /// Drain results that arrived since the last call.
    pub fn poll(&mut self) -> Vec<DispatchEvent> {
        let mut events = Vec::new();
        self.drain_into(&mut events);

        let worker_gone = self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.handle.is_finished());
        if worker_gone {
            // Anything the worker sent before finishing is in the channel now.
            self.drain_into(&mut events);
            if let Some(lost) = self.in_flight.take() {
                error!(
                    owner = self.owner,
                    request_id = %lost.request.id,
                    "worker finished without reporting"
                );
                events.push(DispatchEvent::Error(WORKER_LOST.to_string()));
                events.push(DispatchEvent::Completed);
            }
        }
        events
    }

    fn drain_into(&mut self, events: &mut Vec<DispatchEvent>) {
        while let Ok(event) = self.event_rx.try_recv() {
            if event == DispatchEvent::Completed {
                if let Some(done) = self.in_flight.take() {
                    debug!(
                        owner = self.owner,
                        request_id = %done.request.id,
                        elapsed_ms = done.request.requested_at.elapsed().as_millis() as u64,
                        "dispatch completed"
                    );
                }
            }
            events.push(event);
        }
    }

    /// Clear the session history. Refused while a dispatch is in flight.
    pub fn reset_session(&mut self) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        match self.session.try_lock() {
            Ok(mut session) => {
                session.reset();
                true
            }
            Err(_) => false,
        }
    }

    /// Number of messages in the session, when it is not in use.
    pub fn history_len(&self) -> Option<usize> {
        self.session.try_lock().ok().map(|s| s.message_count())
    }

    /// Wait up to `grace` for an in-flight worker, then abort it.
    pub fn shutdown(&mut self, grace: Duration) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        let deadline = Instant::now() + grace;
        while !in_flight.handle.is_finished() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        if in_flight.handle.is_finished() {
            info!(owner = self.owner, "in-flight dispatch finished during shutdown");
        } else {
            warn!(
                owner = self.owner,
                request_id = %in_flight.request.id,
                "aborting in-flight dispatch"
            );
            in_flight.handle.abort();
        }
    }
}

impl Drop for BackgroundDispatcher {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

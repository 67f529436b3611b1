use tracing::{debug, info};

use super::{error_line, ChatSurface, Speaker, FRESH_START, WELCOME};
use crate::dispatcher::{BackgroundDispatcher, DispatchEvent};

pub struct ChatWindow<S> {
    dispatcher: BackgroundDispatcher,
    surface: S,
}

impl<S: ChatSurface> ChatWindow<S> {
    pub fn new(dispatcher: BackgroundDispatcher, mut surface: S) -> Self {
        surface.append_line(Speaker::Pixel, WELCOME);
        Self {
            dispatcher,
            surface,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.dispatcher.is_pending()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Send a user message. Returns false for blank input or while a reply
    /// is pending.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        if self.dispatcher.is_pending() {
            debug!("chat send ignored: reply pending");
            return false;
        }
        if !self.dispatcher.submit(text) {
            return false;
        }
        self.surface.append_line(Speaker::You, text);
        self.surface.set_waiting(true);
        true
    }

    pub fn poll(&mut self) {
        for event in self.dispatcher.poll() {
            match event {
                DispatchEvent::Reply(text) => self.surface.append_line(Speaker::Pixel, &text),
                DispatchEvent::Error(detail) => {
                    self.surface.append_line(Speaker::Pixel, &error_line(&detail));
                }
                DispatchEvent::Completed => self.surface.set_waiting(false),
            }
        }
    }

    /// Clear history and transcript. Refused while a reply is pending.
    pub fn reset(&mut self) -> bool {
        if !self.dispatcher.reset_session() {
            debug!("chat reset refused: reply pending");
            return false;
        }
        info!("chat session reset");
        self.surface.clear();
        self.surface.append_line(Speaker::Pixel, FRESH_START);
        true
    }

    pub fn history_len(&self) -> Option<usize> {
        self.dispatcher.history_len()
    }

    pub fn shutdown(&mut self, grace: std::time::Duration) {
        self.dispatcher.shutdown(grace);
    }
}

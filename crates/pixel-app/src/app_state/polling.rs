//! Periodic polling of webviews and dispatchers, and the sprite tick.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::PixelApp;
use super::types::POLL_INTERVAL;

impl PixelApp {
    /// Run whatever is due and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_dispatchers(now);
        }

        if self.overlay.is_some() && now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick = now;
            if let Some(overlay) = &mut self.overlay {
                overlay.tick(now);
            }
        }

        self.flush_surfaces();

        if self.should_exit {
            // Let about_to_wait run again promptly to tear down.
            event_loop.set_control_flow(ControlFlow::Poll);
            return;
        }

        let mut next = self.last_poll + POLL_INTERVAL;
        if self.overlay.is_some() {
            next = next.min(self.last_tick + self.tick_interval);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(next.max(Instant::now())));
    }

    fn poll_dispatchers(&mut self, now: Instant) {
        if let Some(overlay) = &mut self.overlay {
            overlay.poll(now);
        }
        if let Some(chat) = &mut self.chat {
            chat.poll();
        }
    }
}

//! WebView lifecycle: create, sync bounds, poll events, flush outboxes.

use winit::dpi::LogicalPosition;
use winit::window::{Window, WindowId};

use pixel_webview::{PageLoadState, WebViewConfig, WebViewEvent};

use crate::app_state::core::PixelApp;
use crate::app_state::surfaces::{chat_ipc, overlay_ipc, OverlayOp, Outgoing};
use crate::app_state::types::{CHAT_VIEW, OVERLAY_VIEW};

use super::bounds::window_bounds;

impl PixelApp {
    /// Create a webview filling `window`. Returns false on failure.
    pub(in crate::app_state) fn create_view(
        &mut self,
        view_id: u32,
        window: &Window,
        url: &str,
        transparent: bool,
    ) -> bool {
        let Some(registry) = &mut self.webviews else {
            tracing::warn!(view_id, "Cannot create webview: registry not initialized");
            return false;
        };

        let config = WebViewConfig::with_url(url).transparent(transparent);
        match registry.create(view_id, window, window_bounds(window), config) {
            Ok(()) => {
                tracing::info!(view_id, url, "WebView created");
                true
            }
            Err(e) => {
                tracing::error!(view_id, error = %e, "Failed to create webview");
                false
            }
        }
    }

    /// Resize the webview hosted by `window_id` to its window.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self, window_id: WindowId) {
        let (view_id, window) = if self.is_overlay_window(window_id) {
            (OVERLAY_VIEW, self.overlay_window.as_ref())
        } else if self.is_chat_window(window_id) {
            (CHAT_VIEW, self.chat_window.as_ref())
        } else {
            return;
        };
        let (Some(window), Some(registry)) = (window, &self.webviews) else {
            return;
        };
        if let Some(handle) = registry.get(view_id) {
            if let Err(e) = handle.set_bounds(window_bounds(window)) {
                tracing::warn!(view_id, error = %e, "Failed to update webview bounds");
            }
        }
    }

    /// Process pending webview events (IPC messages, page loads, etc.).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view_id, body } => {
                    self.handle_ipc_message(view_id, &body);
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } => {
                    tracing::debug!(view_id, ?state, url = %url, "WebView page load event");
                    self.handle_page_load(view_id, state);
                }
                WebViewEvent::NavigationBlocked { view_id, url } => {
                    tracing::warn!(view_id, url = %url, "WebView navigation blocked");
                }
                WebViewEvent::Closed { view_id } => {
                    tracing::debug!(view_id, "WebView closed event");
                }
            }
        }
    }

    fn handle_page_load(&mut self, view_id: u32, state: PageLoadState) {
        let page = match view_id {
            OVERLAY_VIEW => &mut self.overlay_page,
            CHAT_VIEW => &mut self.chat_page,
            _ => return,
        };
        match state {
            PageLoadState::Started => page.page_started(),
            PageLoadState::Finished => {
                let reloaded = page.page_finished();
                if reloaded && view_id == OVERLAY_VIEW {
                    if let Some(overlay) = &mut self.overlay {
                        overlay.resync();
                    }
                } else if reloaded {
                    tracing::debug!(view_id, "Chat page reloaded; transcript starts empty");
                }
            }
        }
    }

    /// Drain controller output: move the overlay window and send page IPC.
    pub(in crate::app_state) fn flush_surfaces(&mut self) {
        if let Some(overlay) = &mut self.overlay {
            for op in overlay.surface_mut().drain() {
                if let OverlayOp::Position(p) = op {
                    if let Some(window) = &self.overlay_window {
                        window.set_outer_position(LogicalPosition::new(p.x as f64, p.y as f64));
                    }
                    continue;
                }
                if let Some(assets) = &self.assets {
                    if let Some(msg) = overlay_ipc(&op, assets) {
                        self.overlay_page.push(msg);
                    }
                }
            }
        }

        if let Some(chat) = &mut self.chat {
            for op in chat.surface_mut().drain() {
                self.chat_page.push(chat_ipc(&op));
            }
        }

        let overlay_out = self.overlay_page.take_sendable();
        self.send_to_view(OVERLAY_VIEW, overlay_out);
        let chat_out = self.chat_page.take_sendable();
        self.send_to_view(CHAT_VIEW, chat_out);
    }

    fn send_to_view(&self, view_id: u32, messages: Vec<Outgoing>) {
        if messages.is_empty() {
            return;
        }
        let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(view_id)) else {
            return;
        };
        for msg in messages {
            if let Err(e) = handle.send_ipc(msg.kind, &msg.payload) {
                tracing::warn!(view_id, kind = msg.kind, error = %e, "Failed to send IPC");
            }
        }
    }
}

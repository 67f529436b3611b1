//! IPC message validation and dispatch from the pages to the controllers.

use pixel_webview::IpcMessage;

use crate::app_state::core::PixelApp;
use crate::app_state::types::{CHAT_VIEW, OVERLAY_VIEW};
use crate::chat_window::ChatInput;
use crate::overlay::{OverlayInput, OverlayOutcome};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

const OVERLAY_IPC_KINDS: &[&str] = &[
    "pointer_down",
    "pointer_move",
    "pointer_up",
    "menu_open",
    "menu_action",
    "menu_closed",
];

const CHAT_IPC_KINDS: &[&str] = &["send", "reset"];

/// Check whether a view may send an IPC message kind.
pub fn is_ipc_kind_allowed(view_id: u32, kind: &str) -> bool {
    match view_id {
        OVERLAY_VIEW => OVERLAY_IPC_KINDS.contains(&kind),
        CHAT_VIEW => CHAT_IPC_KINDS.contains(&kind),
        _ => false,
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl PixelApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view_id: u32, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(
                view_id,
                body_len = body.len(),
                "IPC message rejected: failed to parse"
            );
            return;
        };

        if !is_ipc_kind_allowed(view_id, &msg.kind) {
            tracing::warn!(view_id, kind = %msg.kind, "IPC message rejected: kind not allowed");
            return;
        }

        // Pointer moves arrive at pointer rate; keep them out of debug logs.
        if msg.kind != "pointer_move" {
            tracing::debug!(view_id, kind = %msg.kind, "IPC message dispatched");
        }

        match view_id {
            OVERLAY_VIEW => self.handle_overlay_ipc(&msg),
            CHAT_VIEW => self.handle_chat_ipc(&msg),
            _ => {}
        }
    }

    fn handle_overlay_ipc(&mut self, msg: &IpcMessage) {
        let Some(input) = OverlayInput::from_ipc(msg) else {
            tracing::warn!(kind = %msg.kind, "Overlay IPC rejected: bad payload");
            return;
        };
        let Some(overlay) = &mut self.overlay else {
            return;
        };
        if overlay.handle(input) == OverlayOutcome::Exit {
            self.should_exit = true;
        }
    }

    fn handle_chat_ipc(&mut self, msg: &IpcMessage) {
        let Some(input) = ChatInput::from_ipc(msg) else {
            tracing::warn!(kind = %msg.kind, "Chat IPC rejected: bad payload");
            return;
        };
        let Some(chat) = &mut self.chat else {
            return;
        };
        match input {
            ChatInput::Send(text) => {
                chat.send(&text);
            }
            ChatInput::Reset => {
                chat.reset();
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_kinds_allowed_on_overlay_only() {
        for kind in OVERLAY_IPC_KINDS {
            assert!(is_ipc_kind_allowed(OVERLAY_VIEW, kind));
            assert!(!is_ipc_kind_allowed(CHAT_VIEW, kind));
        }
    }

    #[test]
    fn chat_kinds_allowed_on_chat_only() {
        for kind in CHAT_IPC_KINDS {
            assert!(is_ipc_kind_allowed(CHAT_VIEW, kind));
            assert!(!is_ipc_kind_allowed(OVERLAY_VIEW, kind));
        }
    }

    #[test]
    fn unknown_kinds_and_views_rejected() {
        assert!(!is_ipc_kind_allowed(OVERLAY_VIEW, "eval"));
        assert!(!is_ipc_kind_allowed(CHAT_VIEW, ""));
        assert!(!is_ipc_kind_allowed(99, "send"));
    }

    #[test]
    fn chat_ipc_drives_chat_window() {
        use crate::app_state::core::LaunchOptions;
        use crate::app_state::surfaces::{ChatOp, ChatOutbox};
        use crate::chat_window::{ChatWindow, Speaker};
        use crate::test_support::{dispatcher, runtime, settle, Scripted};

        let rt = runtime();
        let chat = ChatWindow::new(dispatcher(&rt, Scripted::reply("Purr!")), ChatOutbox::default());
        let mut app = PixelApp::new(
            pixel_config::PixelConfig::default(),
            LaunchOptions {
                overlay: false,
                chat_window: true,
            },
            None,
            runtime(),
            None,
            None,
        );
        app.chat = Some(chat);

        app.handle_ipc_message(CHAT_VIEW, r#"{"kind":"send","payload":"hi"}"#);
        // Ignored: wrong view for the kind.
        app.handle_ipc_message(OVERLAY_VIEW, r#"{"kind":"send","payload":"again"}"#);

        settle(|| {
            let chat = app.chat.as_mut().unwrap();
            chat.poll();
            !chat.is_waiting()
        });
        let ops = app.chat.as_mut().unwrap().surface_mut().drain();
        assert!(ops.contains(&ChatOp::Line(Speaker::You, "hi".into())));
        assert!(ops.contains(&ChatOp::Line(Speaker::Pixel, "Purr!".into())));
        assert!(!ops.contains(&ChatOp::Line(Speaker::You, "again".into())));

        app.shutdown();
        drop(rt);
    }
}

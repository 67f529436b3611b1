//! Internal constants for the app state module.

use std::time::Duration;

/// How often webview events and dispatchers are polled.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(15);

/// Bound on tokio runtime teardown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

pub(super) const OVERLAY_VIEW: u32 = 1;
pub(super) const CHAT_VIEW: u32 = 2;

pub(super) const OVERLAY_URL: &str = "pixel://localhost/overlay.html";
pub(super) const CHAT_URL: &str = "pixel://localhost/chat.html";

/// Used when no monitor can be queried.
pub(super) const FALLBACK_SCREEN: (i32, i32, i32, i32) = (0, 0, 1280, 800);

//! Graceful shutdown: settle dispatchers, destroy webviews, stop the runtime.

use crate::dispatcher::SHUTDOWN_GRACE;

use super::core::PixelApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl PixelApp {
    /// Perform graceful shutdown of all subsystems. Safe to call repeatedly.
    ///
    /// Order matters:
    /// 1. Dispatchers (bounded wait for in-flight workers, then abort)
    /// 2. WebViews
    /// 3. Windows
    /// 4. Tokio runtime
    pub(super) fn shutdown(&mut self) {
        if self.tokio_runtime.is_none() {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        // 1. Dispatchers, whether or not their window was created
        if let Some(overlay) = &mut self.overlay {
            overlay.shutdown(SHUTDOWN_GRACE);
        }
        if let Some(chat) = &mut self.chat {
            chat.shutdown(SHUTDOWN_GRACE);
        }
        for dispatcher in [&mut self.overlay_dispatcher, &mut self.chat_dispatcher] {
            if let Some(mut d) = dispatcher.take() {
                d.shutdown(SHUTDOWN_GRACE);
            }
        }

        // 2. WebViews
        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.overlay_page.clear();
        self.chat_page.clear();

        // 3. Windows
        self.overlay_window = None;
        self.chat_window = None;

        // 4. Runtime
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

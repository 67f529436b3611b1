//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances, one per view (the
//! overlay and the chat window), and collects their events.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Custom protocol scheme for bundled content.
pub const SCHEME: &str = "pixel";

/// Creates WebViews and owns the shared event sink.
pub struct WebViewManager {
    /// Pushed from wry callbacks, drained by the event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps view ids to WebView handles on top of a `WebViewManager`.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<u32, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for a view id and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view_id, window, bounds, config)?;
        self.handles.insert(view_id, handle);
        Ok(())
    }

    pub fn get(&self, view_id: u32) -> Option<&WebViewHandle> {
        self.handles.get(&view_id)
    }

    /// Destroy a WebView by view id.
    pub fn destroy(&mut self, view_id: u32) -> bool {
        if self.handles.remove(&view_id).is_some() {
            debug!(view_id, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { view_id });
            true
        } else {
            false
        }
    }

    pub fn active_views(&self) -> Vec<u32> {
        self.handles.keys().copied().collect()
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for view_id in self.active_views() {
            self.destroy(view_id);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}

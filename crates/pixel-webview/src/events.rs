//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, drained by the event loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Raw JSON posted from JavaScript.
    IpcMessage { view_id: u32, body: String },
    NavigationBlocked { view_id: u32, url: String },
    Closed { view_id: u32 },
}

impl WebViewEvent {
    pub fn view_id(&self) -> u32 {
        match self {
            Self::PageLoad { view_id, .. }
            | Self::IpcMessage { view_id, .. }
            | Self::NavigationBlocked { view_id, .. }
            | Self::Closed { view_id } => *view_id,
        }
    }
}

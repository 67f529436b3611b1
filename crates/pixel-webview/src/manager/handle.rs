use wry::WebView;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) view_id: u32,
    /// Best-effort tracking of the loaded URL.
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn view_id(&self) -> u32 {
        self.view_id
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}

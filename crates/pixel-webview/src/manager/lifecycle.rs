use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::{WebViewManager, SCHEME};

impl WebViewManager {
    /// Create a WebView filling `bounds` of the given window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), view_id);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events), view_id);
        builder = self.attach_custom_protocol(builder);

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            view_id,
            current_url: initial_url,
        })
    }

    /// Set the content provider for serving bundled assets via `pixel://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = request_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => protocol_response(200, &mime, data.into_owned()),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    protocol_response(404, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

/// Strip the scheme and host from a `pixel://` request URI.
pub(crate) fn request_path(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("pixel://")
        .or_else(|| uri.strip_prefix("http://pixel.localhost"))
        .unwrap_or(uri);
    match rest.find('/') {
        Some(i) => &rest[i + 1..],
        None => "",
    }
}

fn protocol_response(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "pixel://localhost")
        .body(Cow::Owned(body.clone()))
        .unwrap_or_else(|_| Response::new(Cow::Owned(body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_strips_scheme_and_host() {
        assert_eq!(request_path("pixel://localhost/overlay.html"), "overlay.html");
        assert_eq!(request_path("pixel://localhost/"), "");
        assert_eq!(request_path("pixel://localhost"), "");
        assert_eq!(request_path("pixel:///duck-left.gif"), "duck-left.gif");
    }

    #[test]
    fn request_path_handles_webview2_rewrite() {
        assert_eq!(
            request_path("http://pixel.localhost/chat.html"),
            "chat.html"
        );
    }

    #[test]
    fn protocol_response_sets_status_and_type() {
        let resp = protocol_response(404, "text/plain", b"Not Found".to_vec());
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(resp.body().as_ref(), b"Not Found");
    }
}

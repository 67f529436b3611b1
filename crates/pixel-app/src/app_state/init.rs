//! Window creation and webview setup.

use std::sync::Arc;

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowAttributes, WindowLevel};

use pixel_common::Rect;
use pixel_webview::{ContentProvider, WebViewManager, WebViewRegistry};

use crate::chat_window::ChatWindow;
use crate::overlay::{overlay_window_size, DuckOverlay, OverlaySettings};

use super::core::PixelApp;
use super::surfaces::{ChatOutbox, OverlayOutbox};
use super::types::{CHAT_URL, CHAT_VIEW, FALLBACK_SCREEN, OVERLAY_URL, OVERLAY_VIEW};

// =============================================================================
// BUNDLED PAGES
// =============================================================================

const OVERLAY_HTML: &str = include_str!("../../ui/overlay.html");
const CHAT_HTML: &str = include_str!("../../ui/chat.html");

// =============================================================================
// INITIALIZATION
// =============================================================================

impl PixelApp {
    /// Create the requested windows. Returns `false` when none could be
    /// created and the event loop should exit.
    pub(super) fn initialize_windows(&mut self, event_loop: &ActiveEventLoop) -> bool {
        self.initialize_webviews();

        if self.options.overlay {
            self.create_overlay(event_loop);
        }
        if self.options.chat_window {
            self.create_chat_window(event_loop);
        }

        let any = self.overlay_window.is_some() || self.chat_window.is_some();
        if !any {
            tracing::error!("No window could be created");
        }
        any
    }

    /// Set up the WebView registry with the content provider for `pixel://`.
    fn initialize_webviews(&mut self) {
        let root = match &self.assets {
            Some(assets) => assets.dir().to_path_buf(),
            None => std::env::current_dir().unwrap_or_default(),
        };

        let mut content = ContentProvider::new(&root);
        content.add_override("overlay.html", "text/html", OVERLAY_HTML);
        content.add_override("chat.html", "text/html", CHAT_HTML);

        let mut manager = WebViewManager::new();
        manager.set_content_provider(content);

        self.webviews = Some(WebViewRegistry::new(manager));
        tracing::info!(root = %root.display(), "WebView registry initialized");
    }

    fn create_overlay(&mut self, event_loop: &ActiveEventLoop) {
        let Some(sprite) = self.assets.as_ref().map(|a| a.size()) else {
            tracing::warn!("Overlay requested without sprite assets");
            return;
        };
        let Some(dispatcher) = self.overlay_dispatcher.take() else {
            tracing::warn!("Overlay requested without a dispatcher");
            return;
        };

        let settings = OverlaySettings::from_config(&self.config.overlay);
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let screen = screen_rect(monitor);
        let overlay = DuckOverlay::new(
            &settings,
            sprite,
            screen,
            dispatcher,
            OverlayOutbox::default(),
        );

        let size = overlay_window_size(sprite, &settings);
        let position = overlay.window_position();
        let attrs = WindowAttributes::default()
            .with_title("Pixel")
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64))
            .with_position(LogicalPosition::new(position.x as f64, position.y as f64));

        #[cfg(target_os = "macos")]
        let attrs = {
            use winit::platform::macos::WindowAttributesExtMacOS;
            attrs.with_has_shadow(false)
        };

        #[cfg(target_os = "windows")]
        let attrs = {
            use winit::platform::windows::WindowAttributesExtWindows;
            attrs.with_skip_taskbar(true)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create overlay window: {e}");
                return;
            }
        };

        if !self.create_view(OVERLAY_VIEW, &window, OVERLAY_URL, true) {
            return;
        }

        tracing::info!(
            ?screen,
            width = size.width,
            height = size.height,
            "Overlay window created"
        );
        self.overlay = Some(overlay);
        self.overlay_window = Some(window);
    }

    fn create_chat_window(&mut self, event_loop: &ActiveEventLoop) {
        let Some(dispatcher) = self.chat_dispatcher.take() else {
            tracing::warn!("Chat window requested without a dispatcher");
            return;
        };

        let cfg = &self.config.window;
        let level = if cfg.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        let attrs = WindowAttributes::default()
            .with_title(cfg.title.clone())
            .with_window_level(level)
            .with_inner_size(LogicalSize::new(cfg.width as f64, cfg.height as f64))
            .with_min_inner_size(LogicalSize::new(240.0, 200.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create chat window: {e}");
                return;
            }
        };

        if !self.create_view(CHAT_VIEW, &window, CHAT_URL, false) {
            return;
        }

        tracing::info!(title = %self.config.window.title, "Chat window created");
        self.chat = Some(ChatWindow::new(dispatcher, ChatOutbox::default()));
        self.chat_window = Some(window);
    }

    /// Re-read the overlay's monitor, e.g. after a DPI change.
    pub(super) fn refresh_overlay_screen(&mut self) {
        let Some(window) = &self.overlay_window else {
            return;
        };
        let screen = screen_rect(window.current_monitor());
        if let Some(overlay) = &mut self.overlay {
            overlay.set_screen(screen);
        }
    }
}

// =============================================================================
// SCREEN GEOMETRY
// =============================================================================

fn screen_rect(monitor: Option<MonitorHandle>) -> Rect {
    match monitor {
        Some(m) => monitor_logical_rect(m.position(), m.size(), m.scale_factor()),
        None => {
            tracing::warn!("No monitor found; assuming a default screen");
            let (x, y, w, h) = FALLBACK_SCREEN;
            Rect::new(x, y, w, h)
        }
    }
}

/// Monitor bounds in logical pixels.
fn monitor_logical_rect(
    position: PhysicalPosition<i32>,
    size: PhysicalSize<u32>,
    scale_factor: f64,
) -> Rect {
    let position: LogicalPosition<i32> = position.to_logical(scale_factor);
    let size: LogicalSize<i32> = size.to_logical(scale_factor);
    Rect::new(position.x, position.y, size.width, size.height)
}

// =============================================================================
// TESTS
// =============================================================================

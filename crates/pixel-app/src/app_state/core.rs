//! PixelApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::{Window, WindowId};

use pixel_config::PixelConfig;
use pixel_webview::WebViewRegistry;

use crate::assets::SpriteAssets;
use crate::chat_window::ChatWindow;
use crate::dispatcher::BackgroundDispatcher;
use crate::overlay::DuckOverlay;

use super::surfaces::{ChatOutbox, OverlayOutbox, PageQueue};

/// What the app was asked to start, after config and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOptions {
    pub overlay: bool,
    pub chat_window: bool,
}

/// Top-level application state.
pub struct PixelApp {
    pub(super) config: PixelConfig,
    pub(super) options: LaunchOptions,
    pub(super) assets: Option<SpriteAssets>,

    // Dispatchers wait here until their window exists.
    pub(super) overlay_dispatcher: Option<BackgroundDispatcher>,
    pub(super) chat_dispatcher: Option<BackgroundDispatcher>,

    // Windowing
    pub(super) overlay_window: Option<Arc<Window>>,
    pub(super) chat_window: Option<Arc<Window>>,

    // Controllers
    pub(super) overlay: Option<DuckOverlay<OverlayOutbox>>,
    pub(super) chat: Option<ChatWindow<ChatOutbox>>,

    // WebViews and the pages' outgoing queues
    pub(super) webviews: Option<WebViewRegistry>,
    pub(super) overlay_page: PageQueue,
    pub(super) chat_page: PageQueue,

    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) initialized: bool,
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
    pub(super) last_tick: Instant,
    pub(super) tick_interval: Duration,
}

impl PixelApp {
    pub fn new(
        config: PixelConfig,
        options: LaunchOptions,
        assets: Option<SpriteAssets>,
        runtime: tokio::runtime::Runtime,
        overlay_dispatcher: Option<BackgroundDispatcher>,
        chat_dispatcher: Option<BackgroundDispatcher>,
    ) -> Self {
        let tick_interval = Duration::from_millis(config.overlay.tick_ms as u64);
        let now = Instant::now();
        Self {
            config,
            options,
            assets,
            overlay_dispatcher,
            chat_dispatcher,
            overlay_window: None,
            chat_window: None,
            overlay: None,
            chat: None,
            webviews: None,
            overlay_page: PageQueue::default(),
            chat_page: PageQueue::default(),
            tokio_runtime: Some(runtime),
            initialized: false,
            should_exit: false,
            last_poll: now,
            last_tick: now,
            tick_interval,
        }
    }

    pub(super) fn is_overlay_window(&self, id: WindowId) -> bool {
        self.overlay_window.as_ref().is_some_and(|w| w.id() == id)
    }

    pub(super) fn is_chat_window(&self, id: WindowId) -> bool {
        self.chat_window.as_ref().is_some_and(|w| w.id() == id)
    }
}

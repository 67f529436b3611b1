//! WebView bridge for the Pixel overlay and chat window.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances keyed by view id
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A `pixel://` custom protocol for bundled pages and sprite images
//! - A navigation allowlist

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};

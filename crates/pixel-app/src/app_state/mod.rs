//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the overlay and chat windows, their webviews, the
//! controllers behind them and the tokio runtime their workers run on.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod surfaces;
mod types;
mod webview_bridge;

pub use core::{LaunchOptions, PixelApp};

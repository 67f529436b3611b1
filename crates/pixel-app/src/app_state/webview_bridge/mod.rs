//! Bridge between the windows and their webview pages.
//!
//! Handles webview creation and bounds, IPC dispatch into the
//! controllers, and flushing controller output back to the pages.

mod bounds;
mod ipc_dispatch;
mod lifecycle;

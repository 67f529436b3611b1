//! Configuration schema types for Pixel.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults documented in the
//! generated config template.

mod chat;
mod overlay;
mod system;
mod window;

pub use chat::*;
pub use overlay::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Pixel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PixelConfig {
    pub chat: ChatConfig,
    pub overlay: OverlayConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

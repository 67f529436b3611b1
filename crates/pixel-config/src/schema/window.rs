//! Chat window configuration types.

use serde::{Deserialize, Serialize};

/// Chat window appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub enabled: bool,
    pub title: String,
    /// Logical width (valid range: 240-2000).
    pub width: u32,
    /// Logical height (valid range: 200-2000).
    pub height: u32,
    pub always_on_top: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Pixel the Desktop Pet".into(),
            width: 360,
            height: 480,
            always_on_top: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Desktop overlay (walking sprite) configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory used when `asset_dir` is left empty.
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Settings for the walking sprite overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enabled: bool,
    /// Directory holding `duck-left.gif`, `duck-right.gif`, `duck-paused.png`.
    pub asset_dir: String,
    /// Pixels moved per animation tick (valid range: 1-50).
    pub speed_px: u32,
    /// Animation tick period in milliseconds (valid range: 10-1000).
    pub tick_ms: u32,
    /// Delay before a shown reply bubble hides (valid range: 500-60000).
    pub bubble_hide_ms: u32,
    /// Gap between the sprite and the bottom of the screen.
    pub bottom_margin: u32,
    /// Space reserved above the sprite for the speech bubble.
    pub bubble_height: u32,
    /// Minimum overlay width so the bubble has room for text.
    pub min_width: u32,
    /// Pointer travel before a press becomes a drag.
    pub drag_threshold_px: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            asset_dir: String::new(),
            speed_px: 3,
            tick_ms: 30,
            bubble_hide_ms: 3000,
            bottom_margin: 80,
            bubble_height: 120,
            min_width: 240,
            drag_threshold_px: 4,
        }
    }
}

impl OverlayConfig {
    pub fn asset_dir(&self) -> PathBuf {
        if self.asset_dir.trim().is_empty() {
            PathBuf::from(DEFAULT_ASSET_DIR)
        } else {
            PathBuf::from(self.asset_dir.trim())
        }
    }
}

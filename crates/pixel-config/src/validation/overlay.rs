//! Overlay and window section validation.

use crate::schema::PixelConfig;

use super::helpers::validate_range;

pub(super) fn validate_overlay(errors: &mut Vec<String>, config: &PixelConfig) {
    let o = &config.overlay;
    validate_range(errors, "overlay.speed_px", o.speed_px, 1, 50);
    validate_range(errors, "overlay.tick_ms", o.tick_ms, 10, 1000);
    validate_range(errors, "overlay.bubble_hide_ms", o.bubble_hide_ms, 500, 60_000);
    validate_range(errors, "overlay.bottom_margin", o.bottom_margin, 0, 1000);
    validate_range(errors, "overlay.bubble_height", o.bubble_height, 0, 600);
    validate_range(errors, "overlay.min_width", o.min_width, 0, 2000);
    validate_range(errors, "overlay.drag_threshold_px", o.drag_threshold_px, 0, 50);
}

pub(super) fn validate_window(errors: &mut Vec<String>, config: &PixelConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 240, 2000);
    validate_range(errors, "window.height", w.height, 200, 2000);
}

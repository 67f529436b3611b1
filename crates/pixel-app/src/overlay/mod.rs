//! The desktop duck: walking sprite, speech bubble and context menu.
//!
//! `SpriteMachine` and `BubbleState` are pure state; `DuckOverlay` wires
//! them to a dispatcher and pushes visible changes to an `OverlaySurface`.

mod bubble;
mod controller;
mod input;
mod menu;
mod sprite;


pub use bubble::BubbleState;
pub use controller::{overlay_window_size, DuckOverlay, OverlayOutcome, OverlaySettings};
pub use input::OverlayInput;
pub use menu::{MenuAction, Prompt, APOLOGY, CLICK_PROMPT};
pub use sprite::{initial_position, Direction, Release, SpriteMachine, SpriteState};

use pixel_common::Point;

/// Which image the overlay should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    WalkLeft,
    WalkRight,
    Paused,
}

impl Frame {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WalkLeft => "walk_left",
            Self::WalkRight => "walk_right",
            Self::Paused => "paused",
        }
    }
}

/// Rendering side of the overlay. Positions are the overlay window's
/// top-left corner in screen coordinates.
pub trait OverlaySurface {
    fn set_position(&mut self, position: Point);
    fn set_frame(&mut self, frame: Frame);
    fn show_bubble(&mut self, text: &str);
    fn hide_bubble(&mut self);
}

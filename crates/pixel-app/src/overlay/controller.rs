use std::time::{Duration, Instant};

use pixel_common::{Point, Rect, Size};
use pixel_config::schema::OverlayConfig;
use tracing::{debug, info};

use super::bubble::BubbleState;
use super::input::OverlayInput;
use super::menu::{Prompt, APOLOGY, CLICK_PROMPT};
use super::sprite::{initial_position, Release, SpriteMachine};
use super::{Frame, OverlaySurface};
use crate::dispatcher::{BackgroundDispatcher, DispatchEvent};

/// Overlay tunables taken from `[overlay]`.
#[derive(Debug, Clone)]
pub struct OverlaySettings {
    pub speed_px: u32,
    pub drag_threshold_px: u32,
    pub bubble_hide: Duration,
    pub bottom_margin: u32,
    pub bubble_height: u32,
    pub min_width: u32,
}

impl OverlaySettings {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            speed_px: config.speed_px,
            drag_threshold_px: config.drag_threshold_px,
            bubble_hide: Duration::from_millis(config.bubble_hide_ms as u64),
            bottom_margin: config.bottom_margin,
            bubble_height: config.bubble_height,
            min_width: config.min_width,
        }
    }
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self::from_config(&OverlayConfig::default())
    }
}

/// Overlay window size for a sprite: wide enough for the bubble, tall
/// enough for the bubble plus the sprite.
pub fn overlay_window_size(sprite: Size, settings: &OverlaySettings) -> Size {
    Size::new(
        sprite.width.max(settings.min_width),
        sprite.height + settings.bubble_height,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    Continue,
    Exit,
}

/// The walking duck: sprite state, bubble and its own dispatcher.
pub struct DuckOverlay<S> {
    machine: SpriteMachine,
    bubble: BubbleState,
    dispatcher: BackgroundDispatcher,
    surface: S,
    screen: Rect,
    bubble_hide: Duration,
    /// Sprite top-left relative to the window top-left.
    window_offset: Point,
    last_frame: Option<Frame>,
    last_position: Option<Point>,
}

impl<S: OverlaySurface> DuckOverlay<S> {
    pub fn new(
        settings: &OverlaySettings,
        sprite_size: Size,
        screen: Rect,
        dispatcher: BackgroundDispatcher,
        surface: S,
    ) -> Self {
        let window = overlay_window_size(sprite_size, settings);
        let window_offset = Point::new(
            (window.width as i32 - sprite_size.width as i32) / 2,
            settings.bubble_height as i32,
        );
        let start = initial_position(screen, sprite_size, settings.bottom_margin);
        let mut overlay = Self {
            machine: SpriteMachine::new(
                start,
                sprite_size,
                settings.speed_px,
                settings.drag_threshold_px,
            ),
            bubble: BubbleState::default(),
            dispatcher,
            surface,
            screen,
            bubble_hide: settings.bubble_hide,
            window_offset,
            last_frame: None,
            last_position: None,
        };
        overlay.sync();
        overlay
    }

    pub fn machine(&self) -> &SpriteMachine {
        &self.machine
    }

    pub fn bubble(&self) -> &BubbleState {
        &self.bubble
    }

    pub fn is_pending(&self) -> bool {
        self.dispatcher.is_pending()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Overlay window top-left for the current sprite position.
    pub fn window_position(&self) -> Point {
        let sprite = self.machine.position();
        Point::new(sprite.x - self.window_offset.x, sprite.y - self.window_offset.y)
    }

    /// Update the walkable area, e.g. after the overlay moved to another
    /// monitor.
    pub fn set_screen(&mut self, screen: Rect) {
        if screen != self.screen {
            debug!(?screen, "overlay screen changed");
            self.screen = screen;
        }
    }

    pub fn handle(&mut self, input: OverlayInput) -> OverlayOutcome {
        let mut outcome = OverlayOutcome::Continue;
        match input {
            OverlayInput::PointerDown(p) => self.machine.press(p),
            OverlayInput::PointerMove(p) => {
                self.machine.move_to(p);
            }
            OverlayInput::PointerUp(p) => {
                if let Release::Clicked { paused } = self.machine.release(p) {
                    debug!(paused, "sprite clicked");
                    self.dispatch(CLICK_PROMPT);
                }
            }
            OverlayInput::MenuOpen => self.machine.open_menu(),
            OverlayInput::MenuClosed => self.machine.close_menu(),
            OverlayInput::MenuAction(action) => {
                self.machine.close_menu();
                match action.prompt() {
                    Some(prompt) => self.dispatch(prompt),
                    None => {
                        info!("exit requested from overlay menu");
                        outcome = OverlayOutcome::Exit;
                    }
                }
            }
        }
        self.sync();
        outcome
    }

    /// Drain dispatcher results into the bubble.
    pub fn poll(&mut self, now: Instant) {
        for event in self.dispatcher.poll() {
            match event {
                DispatchEvent::Reply(text) => self.show_reply(&text, now),
                DispatchEvent::Error(detail) => {
                    debug!(%detail, "overlay dispatch failed");
                    self.show_reply(APOLOGY, now);
                }
                DispatchEvent::Completed => {}
            }
        }
    }

    /// One animation step: move the sprite and expire the bubble.
    pub fn tick(&mut self, now: Instant) {
        self.machine.tick(self.screen);
        if self.bubble.expire(now) {
            self.surface.hide_bubble();
        }
        self.sync();
    }

    /// Re-send the whole visible state, e.g. after the page reloaded.
    pub fn resync(&mut self) {
        self.last_frame = None;
        self.last_position = None;
        if let Some(text) = self.bubble.visible_text().map(str::to_string) {
            self.surface.show_bubble(&text);
        }
        self.sync();
    }

    /// Wait briefly for an in-flight dispatch, then abort it.
    pub fn shutdown(&mut self, grace: Duration) {
        self.dispatcher.shutdown(grace);
    }

    fn dispatch(&mut self, prompt: Prompt) {
        if !self.dispatcher.submit(prompt.text) {
            debug!(prompt = prompt.text, "overlay dispatch dropped: reply pending");
            return;
        }
        self.bubble.show_pending(&prompt);
        self.surface.show_bubble(prompt.preview);
    }

    fn show_reply(&mut self, text: &str, now: Instant) {
        self.bubble.show(text, now + self.bubble_hide);
        self.surface.show_bubble(text);
    }

    /// Push frame and position changes to the surface.
    fn sync(&mut self) {
        let frame = self.machine.frame();
        if self.last_frame != Some(frame) {
            self.surface.set_frame(frame);
            self.last_frame = Some(frame);
        }
        let position = self.window_position();
        if self.last_position != Some(position) {
            self.surface.set_position(position);
            self.last_position = Some(position);
        }
    }
}

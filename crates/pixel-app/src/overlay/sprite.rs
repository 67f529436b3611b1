//! Walk / pause / drag state machine for the sprite.

use pixel_common::{Point, Rect, Size};

use super::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteState {
    Walking(Direction),
    Paused,
    Dragging,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No movement past the threshold; walking/paused was toggled.
    Clicked { paused: bool },
    /// A drag ended; the state before the drag is restored.
    Dropped,
    /// There was no press to release.
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct Grab {
    start: Point,
    /// Pointer position minus sprite position at press time.
    offset: Point,
    prior: SpriteState,
}

/// Where the sprite first appears: horizontally centred, `bottom_margin`
/// above the bottom of the screen.
pub fn initial_position(screen: Rect, size: Size, bottom_margin: u32) -> Point {
    Point::new(
        screen.x + screen.width / 2,
        screen.bottom() - size.height as i32 - bottom_margin as i32,
    )
}

#[derive(Debug, Clone)]
pub struct SpriteMachine {
    state: SpriteState,
    /// Last walking direction; used when resuming from pause.
    direction: Direction,
    /// Sprite top-left in screen coordinates.
    position: Point,
    size: Size,
    speed: i32,
    drag_threshold: i32,
    grab: Option<Grab>,
    menu_prior: Option<SpriteState>,
}

impl SpriteMachine {
    pub fn new(position: Point, size: Size, speed_px: u32, drag_threshold_px: u32) -> Self {
        Self {
            state: SpriteState::Walking(Direction::Right),
            direction: Direction::Right,
            position,
            size,
            speed: speed_px as i32,
            drag_threshold: drag_threshold_px as i32,
            grab: None,
            menu_prior: None,
        }
    }

    pub fn state(&self) -> SpriteState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_prior.is_some()
    }

    /// Image for the current state. A drag keeps the image it started with.
    pub fn frame(&self) -> Frame {
        let shown = match (self.state, self.grab) {
            (SpriteState::Dragging, Some(grab)) => grab.prior,
            (state, _) => state,
        };
        match shown {
            SpriteState::Walking(Direction::Left) => Frame::WalkLeft,
            SpriteState::Walking(Direction::Right) => Frame::WalkRight,
            SpriteState::Paused | SpriteState::Dragging => Frame::Paused,
        }
    }

    pub fn press(&mut self, pointer: Point) {
        if self.grab.is_some() || self.is_menu_open() {
            return;
        }
        self.grab = Some(Grab {
            start: pointer,
            offset: Point::new(pointer.x - self.position.x, pointer.y - self.position.y),
            prior: self.state,
        });
    }

    /// Returns true when the sprite moved.
    pub fn move_to(&mut self, pointer: Point) -> bool {
        let Some(grab) = self.grab else {
            return false;
        };
        if self.state != SpriteState::Dragging {
            let dx = (pointer.x - grab.start.x).abs();
            let dy = (pointer.y - grab.start.y).abs();
            if dx <= self.drag_threshold && dy <= self.drag_threshold {
                return false;
            }
            self.state = SpriteState::Dragging;
        }
        let target = Point::new(pointer.x - grab.offset.x, pointer.y - grab.offset.y);
        let moved = target != self.position;
        self.position = target;
        moved
    }

    pub fn release(&mut self, pointer: Point) -> Release {
        let Some(grab) = self.grab.take() else {
            return Release::Ignored;
        };
        if self.state == SpriteState::Dragging {
            self.position = Point::new(pointer.x - grab.offset.x, pointer.y - grab.offset.y);
            self.state = grab.prior;
            return Release::Dropped;
        }
        self.state = match grab.prior {
            SpriteState::Walking(_) => SpriteState::Paused,
            SpriteState::Paused | SpriteState::Dragging => SpriteState::Walking(self.direction),
        };
        Release::Clicked {
            paused: self.state == SpriteState::Paused,
        }
    }

    /// Advance one animation step. Returns true when the sprite moved.
    pub fn tick(&mut self, screen: Rect) -> bool {
        let SpriteState::Walking(dir) = self.state else {
            return false;
        };
        if self.grab.is_some() {
            return false;
        }

        let min_x = screen.x;
        let max_x = screen.right() - self.size.width as i32;
        if max_x <= min_x {
            // Screen narrower than the sprite: pin to the left edge.
            let moved = self.position.x != min_x;
            self.position.x = min_x;
            return moved;
        }

        let mut new_x = self.position.x + dir.sign() * self.speed;
        let mut new_dir = dir;
        if new_x <= min_x {
            new_x = min_x;
            new_dir = Direction::Right;
        } else if new_x >= max_x {
            new_x = max_x;
            new_dir = Direction::Left;
        }

        self.direction = new_dir;
        self.state = SpriteState::Walking(new_dir);
        let moved = new_x != self.position.x;
        self.position.x = new_x;
        moved
    }

    /// Force `Paused` while the context menu is open.
    pub fn open_menu(&mut self) {
        if self.is_menu_open() {
            return;
        }
        if let Some(grab) = self.grab.take() {
            self.state = grab.prior;
        }
        self.menu_prior = Some(self.state);
        self.state = SpriteState::Paused;
    }

    /// Restore the state recorded when the menu opened.
    pub fn close_menu(&mut self) {
        if let Some(prior) = self.menu_prior.take() {
            self.state = prior;
        }
    }
}

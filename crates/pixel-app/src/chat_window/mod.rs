//! The chat window: a transcript, an input box and a reset button.

mod controller;
mod input;


pub use controller::ChatWindow;
pub use input::ChatInput;

pub const WELCOME: &str = "Pixel is awake and bouncing on your desktop!";
pub const FRESH_START: &str = "Fresh start! Pixel shakes off the sleepies.";

/// Status face shown next to the input box.
pub const FACE_IDLE: &str = "=^.^=";
pub const FACE_WAITING: &str = "=^o^=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Pixel,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Pixel => "Pixel",
        }
    }
}

/// Transcript line for a failed dispatch.
pub fn error_line(detail: &str) -> String {
    format!("Something went wrong:\n{detail}")
}

/// Rendering side of the chat window.
pub trait ChatSurface {
    fn append_line(&mut self, speaker: Speaker, text: &str);
    fn clear(&mut self);
    /// Disable the controls while a reply is pending.
    fn set_waiting(&mut self, waiting: bool);
}

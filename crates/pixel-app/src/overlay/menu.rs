//! Context menu actions and the prompts they send.

/// Text sent to the responder plus the bubble preview shown while waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub text: &'static str,
    pub preview: &'static str,
}

pub const CLICK_PROMPT: Prompt = Prompt {
    text: "The user just clicked on you. React playfully.",
    preview: "*quack?*",
};

const CHAT_PROMPT: Prompt = Prompt {
    text: "The user wants to chat. Greet them and ask how their day is going.",
    preview: "Nova waddles closer to chat...",
};

const JOKE_PROMPT: Prompt = Prompt {
    text: "Tell me a short, funny joke.",
    preview: "Nova is thinking of a joke...",
};

const TOUCH_PROMPT: Prompt = Prompt {
    text: "The user gently pets you. Respond affectionately.",
    preview: "*happy quack*",
};

/// Bubble text when a dispatch fails.
pub const APOLOGY: &str = "Oops! My cosmic quack got lost. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Chat,
    Joke,
    Touch,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [Self::Chat, Self::Joke, Self::Touch, Self::Exit];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Some(Self::Chat),
            "joke" => Some(Self::Joke),
            "touch" | "pet" => Some(Self::Touch),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Joke => "joke",
            Self::Touch => "touch",
            Self::Exit => "exit",
        }
    }

    /// `None` for `Exit`, which sends nothing.
    pub fn prompt(self) -> Option<Prompt> {
        match self {
            Self::Chat => Some(CHAT_PROMPT),
            Self::Joke => Some(JOKE_PROMPT),
            Self::Touch => Some(TOUCH_PROMPT),
            Self::Exit => None,
        }
    }
}

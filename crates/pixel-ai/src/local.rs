//! Offline keyword responder.
//!
//! Used whenever the remote backend is unconfigured or incompatible.
//! Pure and total: every input yields a non-empty reply without I/O.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::{ChatResponder, Message, ResponderError, ResponderKind, Role};

pub const GREETING_DEFAULT: &str = "Pixel is here and ready to play! Meow!";
pub const JOKE_REPLY: &str =
    "Pixel wiggles whiskers: Why did the cat sit on the computer? To keep an eye on the mouse! :3";
pub const REST_REPLY: &str =
    "Nap buddies? Pixel suggests a big stretch and a sip of water before continuing. *purr*";
pub const HELLO_REPLY: &str = "Hii! Pixel does a flip in the air and waves paws excitedly!";

const CUE_CHARS: usize = 40;

const TEMPLATES: [&str; 3] = [
    "Pixel paws at the screen: {cue} *chirp*",
    "Pixel tilts head: {cue} nya~",
    "Pixel fluffs tail: {cue} purrr!",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalResponder;

impl LocalResponder {
    pub fn new() -> Self {
        Self
    }

    /// Reply to a single user utterance.
    pub fn reply_to(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return GREETING_DEFAULT.to_string();
        }

        let lower = text.to_lowercase();
        if lower.contains("joke") {
            return JOKE_REPLY.to_string();
        }
        if lower.contains("tired") || lower.contains("break") {
            return REST_REPLY.to_string();
        }
        if lower.contains("hello") || lower.contains("hi") {
            return HELLO_REPLY.to_string();
        }

        let cue = cue_for(text);
        let template = TEMPLATES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(TEMPLATES[0]);
        template.replace("{cue}", &cue)
    }
}

fn cue_for(text: &str) -> String {
    let head: String = text.chars().take(CUE_CHARS).collect();
    format!("I heard you mention '{head}'. Let's keep going together!")
}

#[async_trait]
impl ChatResponder for LocalResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Local
    }

    async fn reply(&self, history: &[Message]) -> Result<String, ResponderError> {
        let last_user = history
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("");
        Ok(self.reply_to(last_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_greeting() {
        assert_eq!(LocalResponder::new().reply_to(""), GREETING_DEFAULT);
        assert_eq!(LocalResponder::new().reply_to("   \n"), GREETING_DEFAULT);
    }

    #[test]
    fn joke_is_case_insensitive() {
        let reply = LocalResponder::new().reply_to("Tell me a JOKE");
        assert!(reply.contains("mouse"));
    }

    #[test]
    fn joke_wins_over_greeting() {
        assert_eq!(LocalResponder::new().reply_to("hi, joke please"), JOKE_REPLY);
    }

    #[test]
    fn tired_and_break_suggest_rest() {
        let r = LocalResponder::new();
        assert_eq!(r.reply_to("so tired"), REST_REPLY);
        assert_eq!(r.reply_to("need a BREAK"), REST_REPLY);
    }

    #[test]
    fn hello_and_hi_are_greetings() {
        let r = LocalResponder::new();
        assert_eq!(r.reply_to("Hello there"), HELLO_REPLY);
        assert_eq!(r.reply_to("hi"), HELLO_REPLY);
    }

    #[test]
    fn other_input_uses_a_template_with_cue() {
        let reply = LocalResponder::new().reply_to("  quantum pancakes  ");
        assert!(reply.starts_with("Pixel "));
        assert!(reply.contains("I heard you mention 'quantum pancakes'. Let's keep going together!"));
        assert!(!reply.contains("{cue}"));
    }

    #[test]
    fn cue_is_truncated_to_forty_chars() {
        let long = "a".repeat(100);
        let reply = LocalResponder::new().reply_to(&long);
        let expected = format!("'{}'", "a".repeat(40));
        assert!(reply.contains(&expected));
        assert!(!reply.contains(&"a".repeat(41)));
    }

    #[test]
    fn cue_truncation_respects_char_boundaries() {
        let text = "\u{e9}".repeat(50);
        let reply = LocalResponder::new().reply_to(&text);
        assert!(reply.contains(&"\u{e9}".repeat(40)));
    }

    #[tokio::test]
    async fn reply_uses_latest_user_message() {
        let history = vec![
            Message::user("tell me a joke"),
            Message::assistant("..."),
            Message::user("I'm tired"),
        ];
        let reply = LocalResponder::new().reply(&history).await.unwrap();
        assert_eq!(reply, REST_REPLY);
    }

    #[tokio::test]
    async fn reply_with_no_user_message_is_greeting() {
        let reply = LocalResponder::new().reply(&[]).await.unwrap();
        assert_eq!(reply, GREETING_DEFAULT);
    }
}

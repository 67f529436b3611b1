use std::time::Instant;

use super::menu::Prompt;

/// Speech bubble contents and its auto-hide deadline.
#[derive(Debug, Clone, Default)]
pub struct BubbleState {
    visible_text: Option<String>,
    auto_hide_deadline: Option<Instant>,
}

impl BubbleState {
    pub fn visible_text(&self) -> Option<&str> {
        self.visible_text.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible_text.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.auto_hide_deadline
    }

    /// Show the waiting preview for a prompt. It stays up until the reply
    /// arrives, so any earlier deadline is cancelled.
    pub fn show_pending(&mut self, prompt: &Prompt) {
        self.visible_text = Some(prompt.preview.to_string());
        self.auto_hide_deadline = None;
    }

    /// Show a reply and schedule it to hide at `deadline`.
    pub fn show(&mut self, text: impl Into<String>, deadline: Instant) {
        self.visible_text = Some(text.into());
        self.auto_hide_deadline = Some(deadline);
    }

    /// Hide the bubble if its deadline has passed. Returns true when it
    /// was hidden by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.auto_hide_deadline {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    pub fn hide(&mut self) {
        self.visible_text = None;
        self.auto_hide_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::overlay::menu::CLICK_PROMPT;

    #[test]
    fn pending_has_no_deadline() {
        let mut bubble = BubbleState::default();
        bubble.show("old", Instant::now());
        bubble.show_pending(&CLICK_PROMPT);
        assert_eq!(bubble.visible_text(), Some("*quack?*"));
        assert!(bubble.deadline().is_none());
        assert!(!bubble.expire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn expires_at_deadline_only() {
        let now = Instant::now();
        let mut bubble = BubbleState::default();
        bubble.show("Quack!", now + Duration::from_millis(100));
        assert!(!bubble.expire(now));
        assert!(bubble.is_visible());
        assert!(bubble.expire(now + Duration::from_millis(100)));
        assert!(!bubble.is_visible());
        assert!(!bubble.expire(now + Duration::from_secs(1)));
    }

    #[test]
    fn new_reply_replaces_deadline() {
        let now = Instant::now();
        let mut bubble = BubbleState::default();
        bubble.show("first", now + Duration::from_millis(10));
        bubble.show("second", now + Duration::from_millis(500));
        assert!(!bubble.expire(now + Duration::from_millis(20)));
        assert_eq!(bubble.visible_text(), Some("second"));
    }
}

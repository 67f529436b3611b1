//! Outboxes standing in for the overlay and chat pages.
//!
//! Controllers write to these synchronously; the event loop drains them
//! once per poll and turns each op into a window move or an IPC message.

use pixel_common::Point;
use serde_json::{json, Value};

use crate::assets::SpriteAssets;
use crate::chat_window::{ChatSurface, Speaker, FACE_IDLE, FACE_WAITING};
use crate::overlay::{Frame, OverlaySurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum OverlayOp {
    Position(Point),
    Frame(Frame),
    Bubble(String),
    BubbleHide,
}

#[derive(Debug, Default)]
pub(super) struct OverlayOutbox(Vec<OverlayOp>);

impl OverlayOutbox {
    pub(super) fn drain(&mut self) -> Vec<OverlayOp> {
        std::mem::take(&mut self.0)
    }
}

impl OverlaySurface for OverlayOutbox {
    fn set_position(&mut self, position: Point) {
        // Only the latest position matters.
        self.0.retain(|op| !matches!(op, OverlayOp::Position(_)));
        self.0.push(OverlayOp::Position(position));
    }

    fn set_frame(&mut self, frame: Frame) {
        self.0.push(OverlayOp::Frame(frame));
    }

    fn show_bubble(&mut self, text: &str) {
        self.0.push(OverlayOp::Bubble(text.to_string()));
    }

    fn hide_bubble(&mut self) {
        self.0.push(OverlayOp::BubbleHide);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ChatOp {
    Line(Speaker, String),
    Clear,
    Waiting(bool),
}

#[derive(Debug, Default)]
pub(super) struct ChatOutbox(Vec<ChatOp>);

impl ChatOutbox {
    pub(super) fn drain(&mut self) -> Vec<ChatOp> {
        std::mem::take(&mut self.0)
    }
}

impl ChatSurface for ChatOutbox {
    fn append_line(&mut self, speaker: Speaker, text: &str) {
        self.0.push(ChatOp::Line(speaker, text.to_string()));
    }

    fn clear(&mut self) {
        self.0.push(ChatOp::Clear);
    }

    fn set_waiting(&mut self, waiting: bool) {
        self.0.push(ChatOp::Waiting(waiting));
    }
}

/// A message for a page: `kind` plus JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Outgoing {
    pub kind: &'static str,
    pub payload: Value,
}

/// IPC for an overlay op. Position changes move the window instead and
/// return `None`.
pub(super) fn overlay_ipc(op: &OverlayOp, assets: &SpriteAssets) -> Option<Outgoing> {
    let (kind, payload) = match op {
        OverlayOp::Position(_) => return None,
        OverlayOp::Frame(frame) => (
            "frame",
            json!({ "frame": frame.as_str(), "src": assets.frame_src(*frame) }),
        ),
        OverlayOp::Bubble(text) => ("bubble", json!({ "text": text })),
        OverlayOp::BubbleHide => ("bubble_hide", Value::Null),
    };
    Some(Outgoing { kind, payload })
}

pub(super) fn chat_ipc(op: &ChatOp) -> Outgoing {
    let (kind, payload) = match op {
        ChatOp::Line(speaker, text) => (
            "append",
            json!({ "speaker": speaker.label(), "text": text }),
        ),
        ChatOp::Clear => ("clear", Value::Null),
        ChatOp::Waiting(waiting) => (
            "waiting",
            json!({
                "waiting": waiting,
                "face": if *waiting { FACE_WAITING } else { FACE_IDLE },
            }),
        ),
    };
    Outgoing { kind, payload }
}

/// Holds messages for a page until it has finished loading.
#[derive(Debug, Default)]
pub(super) struct PageQueue {
    ready: bool,
    loads: u32,
    queued: Vec<Outgoing>,
}

impl PageQueue {
    pub(super) fn push(&mut self, msg: Outgoing) {
        self.queued.push(msg);
    }

    /// Messages that can go out now; empty until the page is ready.
    pub(super) fn take_sendable(&mut self) -> Vec<Outgoing> {
        if self.ready {
            std::mem::take(&mut self.queued)
        } else {
            Vec::new()
        }
    }

    pub(super) fn page_started(&mut self) {
        self.ready = false;
    }

    /// Mark the page loaded. Returns true when this was a reload, in which
    /// case the page lost whatever state it was sent before.
    pub(super) fn page_finished(&mut self) -> bool {
        self.ready = true;
        self.loads += 1;
        self.loads > 1
    }

    pub(super) fn is_ready(&self) -> bool {
        self.ready
    }

    pub(super) fn clear(&mut self) {
        self.queued.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> (tempfile::TempDir, SpriteAssets) {
        let dir = tempfile::tempdir().unwrap();
        let file = std::fs::File::create(dir.path().join(crate::assets::PAUSED_FILE)).unwrap();
        let mut encoder = png::Encoder::new(file, 2, 2);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .write_header()
            .unwrap()
            .write_image_data(&[0u8; 16])
            .unwrap();
        let assets = SpriteAssets::load(dir.path()).unwrap();
        (dir, assets)
    }

    #[test]
    fn overlay_outbox_keeps_latest_position_only() {
        let mut outbox = OverlayOutbox::default();
        outbox.set_position(Point::new(1, 1));
        outbox.show_bubble("hi");
        outbox.set_position(Point::new(2, 2));

        assert_eq!(
            outbox.drain(),
            vec![OverlayOp::Bubble("hi".into()), OverlayOp::Position(Point::new(2, 2))]
        );
        assert!(outbox.drain().is_empty());
    }

    #[test]
    fn overlay_ops_to_ipc() {
        let (_dir, assets) = assets();

        assert!(overlay_ipc(&OverlayOp::Position(Point::new(0, 0)), &assets).is_none());

        let frame = overlay_ipc(&OverlayOp::Frame(Frame::WalkLeft), &assets).unwrap();
        assert_eq!(frame.kind, "frame");
        // No gif in the fixture dir: falls back to the static image.
        assert_eq!(
            frame.payload,
            json!({ "frame": "walk_left", "src": "duck-paused.png" })
        );

        let bubble = overlay_ipc(&OverlayOp::Bubble("Quack".into()), &assets).unwrap();
        assert_eq!(bubble.payload, json!({ "text": "Quack" }));

        let hide = overlay_ipc(&OverlayOp::BubbleHide, &assets).unwrap();
        assert_eq!(hide.kind, "bubble_hide");
    }

    #[test]
    fn chat_ops_to_ipc() {
        let line = chat_ipc(&ChatOp::Line(Speaker::You, "hey".into()));
        assert_eq!(line.kind, "append");
        assert_eq!(line.payload, json!({ "speaker": "You", "text": "hey" }));

        let waiting = chat_ipc(&ChatOp::Waiting(true));
        assert_eq!(waiting.payload["face"], FACE_WAITING);
        let idle = chat_ipc(&ChatOp::Waiting(false));
        assert_eq!(idle.payload["face"], FACE_IDLE);

        assert_eq!(chat_ipc(&ChatOp::Clear).kind, "clear");
    }

    #[test]
    fn page_queue_holds_until_loaded() {
        let mut queue = PageQueue::default();
        queue.push(Outgoing {
            kind: "clear",
            payload: Value::Null,
        });
        assert!(queue.take_sendable().is_empty());

        assert!(!queue.page_finished());
        assert_eq!(queue.take_sendable().len(), 1);
        assert!(queue.take_sendable().is_empty());

        queue.page_started();
        assert!(!queue.is_ready());
        assert!(queue.page_finished());
    }
}

//! Overlay page events decoded from IPC.

use pixel_common::Point;
use pixel_webview::IpcMessage;
use serde_json::Value;

use super::menu::MenuAction;

/// Pointer coordinates are screen positions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayInput {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    MenuOpen,
    MenuAction(MenuAction),
    MenuClosed,
}

impl OverlayInput {
    /// Decode an overlay IPC message. Unknown kinds and malformed payloads
    /// yield `None`.
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            "pointer_down" => point(msg).map(Self::PointerDown),
            "pointer_move" => point(msg).map(Self::PointerMove),
            "pointer_up" => point(msg).map(Self::PointerUp),
            "menu_open" => Some(Self::MenuOpen),
            "menu_closed" => Some(Self::MenuClosed),
            "menu_action" => menu_action(msg).map(Self::MenuAction),
            _ => None,
        }
    }
}

fn point(msg: &IpcMessage) -> Option<Point> {
    let json = msg.payload.as_json()?;
    let coord = |key: &str| -> Option<i32> {
        let v = json.get(key)?.as_f64()?;
        v.is_finite().then(|| v.round() as i32)
    };
    Some(Point::new(coord("x")?, coord("y")?))
}

fn menu_action(msg: &IpcMessage) -> Option<MenuAction> {
    if let Some(text) = msg.payload.as_text() {
        return MenuAction::parse(text);
    }
    match msg.payload.as_json()?.get("action")? {
        Value::String(s) => MenuAction::parse(s),
        _ => None,
    }
}

use pixel_webview::IpcMessage;

/// Chat page events decoded from IPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Send(String),
    Reset,
}

impl ChatInput {
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            "send" => {
                let text = match msg.payload.as_text() {
                    Some(text) => text.to_string(),
                    None => msg.payload.as_json()?.get("text")?.as_str()?.to_string(),
                };
                Some(Self::Send(text))
            }
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_accepts_text_or_object() {
        let msg = IpcMessage::from_json(r#"{"kind":"send","payload":"hi"}"#).unwrap();
        assert_eq!(ChatInput::from_ipc(&msg), Some(ChatInput::Send("hi".into())));

        let msg = IpcMessage::from_json(r#"{"kind":"send","payload":{"text":"yo"}}"#).unwrap();
        assert_eq!(ChatInput::from_ipc(&msg), Some(ChatInput::Send("yo".into())));
    }

    #[test]
    fn send_without_text_is_rejected() {
        let msg = IpcMessage::from_json(r#"{"kind":"send"}"#).unwrap();
        assert_eq!(ChatInput::from_ipc(&msg), None);
    }

    #[test]
    fn reset_and_unknown() {
        let msg = IpcMessage::from_json(r#"{"kind":"reset"}"#).unwrap();
        assert_eq!(ChatInput::from_ipc(&msg), Some(ChatInput::Reset));
        let msg = IpcMessage::from_json(r#"{"kind":"pointer_down"}"#).unwrap();
        assert_eq!(ChatInput::from_ipc(&msg), None);
    }
}

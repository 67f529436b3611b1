//! Tests for request building, response parsing, and retry behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::client::{extract_content, parse_response};
use super::*;
use crate::{ChatResponder, Message, ResponderError, ResponderKind, SYSTEM_PROMPT};

fn responder(config: RemoteConfig) -> RemoteResponder {
    RemoteResponder::new(config, test_client())
}

fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Serve canned `(status, body)` responses, one per connection, in order.
/// The last response repeats once the list is exhausted.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let (status, body) = responses[n.min(responses.len() - 1)];
            read_request(&mut socket).await;
            let reply = format!(
                "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), hits)
}

async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let Ok(n) = socket.read(&mut chunk).await else {
            return;
        };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}

const OK_BODY: &str = r#"{"choices":[{"message":{"role":"assistant","content":"  Quack! Onward!  "}}]}"#;

#[test]
fn url_joins_base_and_endpoint() {
    let config = RemoteConfig::new("https://api.x.ai/", "tok");
    assert_eq!(config.url(), "https://api.x.ai/v1/chat/completions");
    let config = config.with_endpoint("v2/chat");
    assert_eq!(config.url(), "https://api.x.ai/v2/chat");
}

#[test]
fn from_credentials_names_missing_value() {
    let err = RemoteConfig::from_credentials(None, Some("tok")).unwrap_err();
    assert!(err.to_string().contains("GROK_BASE_URL"));
    let err = RemoteConfig::from_credentials(Some("https://x"), Some("  ")).unwrap_err();
    assert!(err.to_string().contains("GROK_AUTH_TOKEN"));
    assert!(RemoteConfig::from_credentials(Some("https://x"), Some("tok")).is_ok());
}

#[test]
fn debug_redacts_token() {
    let config = RemoteConfig::new("https://x", "super-secret-token");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn request_body_prepends_system_prompt() {
    let r = responder(RemoteConfig::new("https://x", "t"));
    let body = r.build_request_body(&[Message::user("hi"), Message::assistant("hello")]);

    assert_eq!(body["model"], "grok-4-fast");
    assert_eq!(body["temperature"], 0.6);
    assert!(body.get("max_tokens").is_none());
    let msgs = body["messages"].as_array().unwrap();
    assert_eq!(msgs.len(), 3);
    assert_eq!(msgs[0]["role"], "system");
    assert_eq!(msgs[0]["content"], SYSTEM_PROMPT);
    assert_eq!(msgs[1]["role"], "user");
    assert_eq!(msgs[2]["role"], "assistant");
    assert_eq!(msgs[2]["content"], "hello");
}

#[test]
fn request_body_includes_positive_max_tokens_only() {
    let r = responder(RemoteConfig::new("https://x", "t").with_max_tokens(Some(256)));
    assert_eq!(r.build_request_body(&[])["max_tokens"], 256);
    let r = responder(RemoteConfig::new("https://x", "t").with_max_tokens(Some(0)));
    assert!(r.build_request_body(&[]).get("max_tokens").is_none());
}

#[test]
fn request_body_without_system_prompt() {
    let r = responder(RemoteConfig::new("https://x", "t").with_system_prompt(None));
    let body = r.build_request_body(&[Message::user("hey")]);
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
}

#[test]
fn parse_extracts_content() {
    assert_eq!(parse_response(OK_BODY).unwrap(), "  Quack! Onward!  ");
}

#[test]
fn parse_non_json_success_is_incompatible() {
    for body in ["<html>bad gateway</html>", "Quack!", ""] {
        let err = parse_response(body).unwrap_err();
        assert!(err.is_incompatible(), "{body:?}");
    }
}

#[test]
fn parse_wrong_shape_is_incompatible() {
    for body in [
        r#"{"output":"hello"}"#,
        r#"{"choices":[]}"#,
        r#"{"choices":[{"message":{"content":42}}]}"#,
    ] {
        let err = parse_response(body).unwrap_err();
        assert!(err.is_incompatible(), "{body}");
    }
}

#[test]
fn extract_content_on_value() {
    let json: serde_json::Value = serde_json::from_str(OK_BODY).unwrap();
    assert_eq!(extract_content(&json), Some("  Quack! Onward!  "));
}

#[tokio::test]
async fn reply_against_local_server() {
    let (base, hits) = serve(vec![(200, OK_BODY)]).await;
    let r = responder(RemoteConfig::new(base, "tok"));
    assert_eq!(r.kind(), ResponderKind::Remote);

    let reply = r.reply(&[Message::user("hello")]).await.unwrap();
    assert_eq!(reply, "  Quack! Onward!  ");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn server_errors_are_retried() {
    let (base, hits) = serve(vec![(500, "oops"), (503, "busy"), (200, OK_BODY)]).await;
    let r = responder(
        RemoteConfig::new(base, "tok")
            .with_max_retries(2)
            .with_retry_backoff(Duration::from_millis(5)),
    );

    let reply = r.reply(&[Message::user("hello")]).await.unwrap();
    assert_eq!(reply.trim(), "Quack! Onward!");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retries_are_bounded() {
    let (base, hits) = serve(vec![(429, "slow down")]).await;
    let r = responder(
        RemoteConfig::new(base, "tok")
            .with_max_retries(1)
            .with_retry_backoff(Duration::from_millis(5)),
    );

    let err = r.reply(&[Message::user("hello")]).await.unwrap_err();
    assert!(matches!(err, ResponderError::RateLimited));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let (base, hits) = serve(vec![(401, "bad token")]).await;
    let r = responder(RemoteConfig::new(base, "tok").with_retry_backoff(Duration::from_millis(5)));

    let err = r.reply(&[Message::user("hello")]).await.unwrap_err();
    match err {
        ResponderError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad token");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn incompatible_body_is_reported() {
    let (base, _) = serve(vec![(200, r#"{"result":"hi"}"#)]).await;
    let r = responder(RemoteConfig::new(base, "tok"));
    let err = r.reply(&[Message::user("hello")]).await.unwrap_err();
    assert!(err.is_incompatible());
}

#[tokio::test]
async fn complete_raw_returns_json() {
    let (base, _) = serve(vec![(200, r#"{"result":"hi"}"#)]).await;
    let r = responder(RemoteConfig::new(base, "tok"));
    let json = r.complete_raw(&[Message::user("hello")]).await.unwrap();
    assert_eq!(json["result"], "hi");
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let r = responder(RemoteConfig::new(format!("http://{addr}"), "tok").with_max_retries(0));
    let err = r.reply(&[Message::user("hello")]).await.unwrap_err();
    assert!(matches!(err, ResponderError::Network(_)));
}

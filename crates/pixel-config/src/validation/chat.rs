//! Chat section validation.

use crate::schema::PixelConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(super) fn validate_chat(errors: &mut Vec<String>, config: &PixelConfig) {
    let chat = &config.chat;

    if chat.model.trim().is_empty() {
        errors.push("chat.model must not be empty".into());
    }
    if !chat.endpoint.starts_with('/') {
        errors.push(format!(
            "chat.endpoint = {:?} must start with '/'",
            chat.endpoint
        ));
    }
    if let Some(url) = chat.base_url() {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("chat.base_url = {url:?} must be an http(s) URL"));
        }
    }

    validate_range_f64(errors, "chat.temperature", chat.temperature, 0.0, 2.0);
    validate_range(errors, "chat.timeout_secs", chat.timeout_secs, 1, 600);
    validate_range(errors, "chat.max_retries", chat.max_retries, 0, 10);
    validate_range(errors, "chat.max_tokens", chat.max_tokens, 0, 32768);
}

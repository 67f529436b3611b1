//! Turning a raw completion response into printable text.

use serde_json::Value;

/// The reply text, or pretty JSON when `raw` is set or the response does
/// not have the usual `choices[0].message.content` shape.
pub fn render_response(body: &Value, raw: bool) -> String {
    if !raw {
        if let Some(content) = pixel_ai::remote::extract_content(body) {
            return content.to_string();
        }
    }
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

//! Environment-sourced settings: `.env` loading and config overrides.
//!
//! `GROK_BASE_URL` and `GROK_AUTH_TOKEN` fill chat credentials the config
//! file leaves empty. `PIXEL_MODEL` and `PIXEL_TEMPERATURE` override the
//! file unconditionally.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::schema::PixelConfig;

pub const ENV_BASE_URL: &str = "GROK_BASE_URL";
pub const ENV_AUTH_TOKEN: &str = "GROK_AUTH_TOKEN";
pub const ENV_MODEL: &str = "PIXEL_MODEL";
pub const ENV_TEMPERATURE: &str = "PIXEL_TEMPERATURE";

/// Load the first `.env` file found into the process environment.
///
/// Variables already present in the environment are left untouched.
/// Returns the path that was loaded, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/pixel-config/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in candidates {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(&key, value);
                }
            }
            debug!("loaded environment from {}", path.display());
            return Some(path);
        }
    }
    None
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped,
/// an optional `export ` prefix is dropped, and matching quotes are removed.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut PixelConfig) {
    apply_env_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_env_overrides_from(config: &mut PixelConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if config.chat.base_url().is_none() {
        if let Some(url) = get(ENV_BASE_URL) {
            config.chat.base_url = url.trim().to_string();
        }
    }
    if config.chat.api_key().is_none() {
        if let Some(token) = get(ENV_AUTH_TOKEN) {
            config.chat.api_key = token.trim().to_string();
        }
    }
    if let Some(model) = get(ENV_MODEL) {
        config.chat.model = model.trim().to_string();
    }
    if let Some(raw) = get(ENV_TEMPERATURE) {
        match raw.trim().parse::<f64>() {
            Ok(t) => config.chat.temperature = t,
            Err(_) => warn!("ignoring {ENV_TEMPERATURE}={raw:?}: not a number"),
        }
    }
}

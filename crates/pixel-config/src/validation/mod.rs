//! Full configuration validation.
//!
//! Validates numeric ranges and a few string shapes. Each section has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod chat;
mod helpers;
mod overlay;


use crate::schema::PixelConfig;
use pixel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PixelConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chat::validate_chat(&mut errors, config);
    overlay::validate_overlay(&mut errors, config);
    overlay::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

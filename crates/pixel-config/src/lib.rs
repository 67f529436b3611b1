//! Pixel configuration system.
//!
//! Provides TOML-based configuration with environment overrides and
//! range validation. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pixel_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("overlay speed: {}px", config.overlay.speed_px);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

use std::path::Path;

pub use env::{apply_env_overrides, load_dotenv};
pub use schema::PixelConfig;

use pixel_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created on first run. Environment overrides are
/// applied after parsing and the result is validated.
pub fn load_config(path: Option<&Path>) -> Result<PixelConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Built-in defaults with environment overrides applied.
///
/// Used when the config file cannot be loaded or fails validation.
pub fn defaults_with_env() -> PixelConfig {
    let mut config = PixelConfig::default();
    apply_env_overrides(&mut config);
    config
}

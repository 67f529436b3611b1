use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing credential: {0}")]
    MissingCredential(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("required asset missing: {0}")]
    Missing(PathBuf),

    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Startup failure of the `pixel` binary.
#[derive(Debug, thiserror::Error)]
pub enum PixelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("chat.temperature out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: chat.temperature out of range"
        );

        let err = ConfigError::MissingCredential("GROK_AUTH_TOKEN".into());
        assert_eq!(err.to_string(), "missing credential: GROK_AUTH_TOKEN");
    }

    #[test]
    fn asset_error_display() {
        let err = AssetError::Missing(PathBuf::from("assets/duck-paused.png"));
        assert_eq!(
            err.to_string(),
            "required asset missing: assets/duck-paused.png"
        );

        let err = AssetError::Decode {
            path: PathBuf::from("assets/duck-paused.png"),
            reason: "bad signature".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to decode assets/duck-paused.png: bad signature"
        );
    }

    #[test]
    fn pixel_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PixelError = config_err.into();
        assert!(matches!(err, PixelError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn pixel_error_from_asset() {
        let asset_err = AssetError::DirectoryNotFound(PathBuf::from("/nope"));
        let err: PixelError = asset_err.into();
        assert!(matches!(err, PixelError::Asset(_)));
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn pixel_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PixelError = io_err.into();
        assert!(matches!(err, PixelError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn pixel_error_window_display() {
        let err = PixelError::Window("no monitor".into());
        assert_eq!(err.to_string(), "window error: no monitor");
    }
}

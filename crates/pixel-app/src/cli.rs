use std::path::PathBuf;

use clap::Parser;

/// Pixel: a desktop pet that walks along the bottom of your screen and
/// chats back.
#[derive(Parser, Debug)]
#[command(name = "pixel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not show the walking sprite.
    #[arg(long)]
    pub no_overlay: bool,

    /// Do not open the chat window.
    #[arg(long)]
    pub no_window: bool,

    /// Sprite asset directory override.
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["pixel"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.no_overlay);
        assert!(!args.no_window);
        assert!(args.assets.is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "pixel",
            "--config",
            "/tmp/pixel.toml",
            "--log-level",
            "debug",
            "--no-overlay",
            "--no-window",
            "--assets",
            "./sprites",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pixel.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.no_overlay);
        assert!(args.no_window);
        assert_eq!(args.assets, Some(PathBuf::from("./sprites")));
    }
}

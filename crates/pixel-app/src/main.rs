mod app_state;
mod assets;
mod chat_window;
mod cli;
mod dispatcher;
mod overlay;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use pixel_ai::{create_responder, ClientCapabilities, ConversationSession, RemoteConfig};
use pixel_common::{ConfigError, PixelError};
use pixel_config::schema::{ChatConfig, LogLevel};
use pixel_config::PixelConfig;

use app_state::{LaunchOptions, PixelApp};
use assets::SpriteAssets;
use dispatcher::BackgroundDispatcher;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let worker = std::thread::current()
            .name()
            .is_some_and(|n| n.starts_with("pixel-worker"));
        if !worker {
            eprintln!("\n--- Pixel crashed ---");
            eprintln!("Re-run with RUST_LOG=pixel=debug for more detail.");
            eprintln!("---------------------\n");
        }
        default_hook(info);
    }));
}

/// Filter directive from `--log-level`, falling back to the config level.
/// Bare level names are scoped to the workspace crates.
fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    let Some(raw) = cli_level.map(str::trim).filter(|s| !s.is_empty()) else {
        return config_level.directive().to_string();
    };
    match serde_json::from_value::<LogLevel>(serde_json::Value::String(raw.to_ascii_lowercase())) {
        Ok(level) => level.directive().to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Remote responder settings, or why the local one must be used.
fn remote_config(chat: &ChatConfig) -> Result<RemoteConfig, ConfigError> {
    if !chat.remote_enabled {
        return Err(ConfigError::MissingCredential(
            "remote chat disabled in config".into(),
        ));
    }
    Ok(RemoteConfig::from_credentials(chat.base_url(), chat.api_key())?
        .with_endpoint(chat.endpoint.clone())
        .with_model(chat.model.clone())
        .with_temperature(chat.temperature)
        .with_max_tokens(chat.max_tokens())
        .with_timeout(Duration::from_secs(chat.timeout_secs as u64))
        .with_max_retries(chat.max_retries))
}

fn launch_options(config: &PixelConfig, args: &cli::Args) -> LaunchOptions {
    LaunchOptions {
        overlay: config.overlay.enabled && !args.no_overlay,
        chat_window: config.window.enabled && !args.no_window,
    }
}

/// Refuse a launch with neither surface enabled.
fn check_launch(options: &LaunchOptions) -> pixel_common::Result<()> {
    if !options.overlay && !options.chat_window {
        return Err(ConfigError::ValidationError(
            "both the overlay and the chat window are disabled; nothing to show".into(),
        )
        .into());
    }
    Ok(())
}

/// Process exit status for a startup failure. Configuration mistakes
/// exit with 2, everything else with 1.
fn exit_code(err: &PixelError) -> u8 {
    match err {
        PixelError::Config(_) => 2,
        PixelError::Asset(_) | PixelError::Io(_) | PixelError::Window(_) => 1,
    }
}

fn run(config: PixelConfig, args: &cli::Args) -> pixel_common::Result<()> {
    let options = launch_options(&config, args);
    check_launch(&options)?;

    // Sprite assets are required for the overlay
    let assets = if options.overlay {
        let dir = args.assets.clone().unwrap_or_else(|| config.overlay.asset_dir());
        Some(SpriteAssets::load(&dir)?)
    } else {
        None
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("pixel-worker")
        .enable_all()
        .build()?;

    // One session per owner; the two never share history.
    let capabilities = ClientCapabilities::detect();
    let new_dispatcher = |owner: &'static str| {
        let responder = create_responder(remote_config(&config.chat), &capabilities);
        tracing::info!(owner, responder = %responder.kind(), "Conversation session ready");
        BackgroundDispatcher::new(
            owner,
            ConversationSession::new(responder),
            runtime.handle().clone(),
        )
    };
    let overlay_dispatcher = options.overlay.then(|| new_dispatcher("overlay"));
    let chat_dispatcher = options.chat_window.then(|| new_dispatcher("chat"));

    let event_loop = EventLoop::new()
        .map_err(|e| PixelError::Window(format!("failed to create event loop: {e}")))?;
    let mut app = PixelApp::new(
        config,
        options,
        assets,
        runtime,
        overlay_dispatcher,
        chat_dispatcher,
    );

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PixelError::Window(format!("event loop error: {e}")))
}

fn main() -> ExitCode {
    // Load .env file before anything else
    let dotenv = pixel_config::load_dotenv();

    install_panic_hook();

    let args = cli::parse();

    // Config is loaded before logging so its level can apply; the outcome
    // is reported once the subscriber is up.
    let loaded = pixel_config::load_config(args.config.as_deref());
    let config_level = match &loaded {
        Ok(config) => config.logging.level,
        Err(_) => LogLevel::default(),
    };

    let log_directive = log_directive(args.log_level.as_deref(), config_level);
    let fallback_directive = LogLevel::Info.directive();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            log_directive.parse().unwrap_or_else(|_| {
                fallback_directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
            }),
        ))
        .init();

    tracing::info!("Pixel v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &dotenv {
        tracing::info!(path = %path.display(), "Loaded .env");
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            pixel_config::defaults_with_env()
        }
    };
    tracing::debug!(chat = ?config.chat, "Config loaded");

    match run(config, &args) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Pixel cannot continue: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_common::AssetError;

    #[test]
    fn log_directive_prefers_cli_level() {
        assert_eq!(log_directive(Some("debug"), LogLevel::Warn), "pixel=debug");
        assert_eq!(log_directive(Some(" WARN "), LogLevel::Info), "pixel=warn");
    }

    #[test]
    fn log_directive_passes_full_directives_through() {
        assert_eq!(
            log_directive(Some("pixel_ai=trace"), LogLevel::Info),
            "pixel_ai=trace"
        );
    }

    #[test]
    fn log_directive_falls_back_to_config() {
        assert_eq!(log_directive(None, LogLevel::Error), "pixel=error");
        assert_eq!(log_directive(Some(""), LogLevel::Info), "pixel=info");
    }

    #[test]
    fn remote_config_requires_credentials() {
        let chat = ChatConfig::default();
        let err = remote_config(&chat).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref c) if c == "GROK_BASE_URL"));
    }

    #[test]
    fn remote_config_carries_chat_settings() {
        let chat = ChatConfig {
            base_url: "https://api.example.com/".into(),
            api_key: "tok".into(),
            model: "grok-mini".into(),
            temperature: 0.2,
            max_tokens: 128,
            timeout_secs: 5,
            max_retries: 0,
            ..Default::default()
        };
        let remote = remote_config(&chat).unwrap();
        assert_eq!(remote.url(), "https://api.example.com/v1/chat/completions");
        assert_eq!(remote.model, "grok-mini");
        assert_eq!(remote.temperature, 0.2);
        assert_eq!(remote.max_tokens, Some(128));
        assert_eq!(remote.timeout, Duration::from_secs(5));
        assert_eq!(remote.max_retries, 0);
    }

    #[test]
    fn remote_disabled_selects_local() {
        let chat = ChatConfig {
            base_url: "https://api.example.com".into(),
            api_key: "tok".into(),
            remote_enabled: false,
            ..Default::default()
        };
        assert!(remote_config(&chat).is_err());
    }

    #[test]
    fn launch_options_combine_config_and_flags() {
        use clap::Parser;

        let config = PixelConfig::default();
        let args = cli::Args::try_parse_from(["pixel", "--no-window"]).unwrap();
        assert_eq!(
            launch_options(&config, &args),
            LaunchOptions {
                overlay: true,
                chat_window: false,
            }
        );

        let mut config = PixelConfig::default();
        config.overlay.enabled = false;
        let args = cli::Args::try_parse_from(["pixel"]).unwrap();
        assert!(!launch_options(&config, &args).overlay);
    }

    #[test]
    fn launch_with_nothing_enabled_is_a_config_error() {
        let options = LaunchOptions {
            overlay: false,
            chat_window: false,
        };
        let err = check_launch(&options).unwrap_err();
        assert!(matches!(err, PixelError::Config(ConfigError::ValidationError(_))));
        assert!(err.to_string().contains("nothing to show"));
        assert_eq!(exit_code(&err), 2);

        let options = LaunchOptions {
            overlay: false,
            chat_window: true,
        };
        assert!(check_launch(&options).is_ok());
    }

    #[test]
    fn missing_assets_stop_the_overlay_launch() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-assets");
        let args = cli::Args::try_parse_from([
            "pixel",
            "--no-window",
            "--assets",
            missing.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(PixelConfig::default(), &args).unwrap_err();
        assert!(matches!(
            err,
            PixelError::Asset(AssetError::DirectoryNotFound(ref p)) if *p == missing
        ));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn startup_failures_exit_with_one() {
        let io = std::io::Error::other("no threads");
        assert_eq!(exit_code(&PixelError::from(io)), 1);
        assert_eq!(exit_code(&PixelError::Window("no display".into())), 1);
    }
}

//! pixel-probe: send one chat completion to the configured endpoint.
//!
//! Reads `GROK_BASE_URL` / `GROK_AUTH_TOKEN` from the environment (after
//! `.env`) and prints the reply text, or the raw JSON with `--raw`.

mod render;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use pixel_ai::{Message, RemoteConfig, RemoteResponder, ResponderError};
use pixel_config::env::{ENV_AUTH_TOKEN, ENV_BASE_URL};

use crate::render::render_response;

#[derive(Parser, Debug)]
#[command(name = "pixel-probe", version, about = "Send one prompt to the chat endpoint")]
struct Args {
    /// Prompt to send as the user message.
    prompt: String,

    #[arg(long, default_value = "grok-4-fast")]
    model: String,

    /// System prompt sent before the user message.
    #[arg(long, default_value = "You are a helpful assistant.")]
    system: String,

    #[arg(long, default_value = "/v1/chat/completions")]
    endpoint: String,

    #[arg(long, default_value_t = 256)]
    max_tokens: u32,

    #[arg(long, default_value_t = 0.7)]
    temperature: f64,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print the full JSON response.
    #[arg(long)]
    raw: bool,
}

const USAGE_ERROR: u8 = 2;

fn require_env(key: &str) -> Result<String, String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("Missing {key} in environment or .env file."))
}

fn remote_config(args: &Args, base_url: String, token: String) -> RemoteConfig {
    RemoteConfig::new(base_url, token)
        .with_endpoint(args.endpoint.clone())
        .with_model(args.model.clone())
        .with_temperature(args.temperature)
        .with_max_tokens((args.max_tokens > 0).then_some(args.max_tokens))
        .with_timeout(Duration::from_secs(args.timeout))
        .with_max_retries(0)
        .with_system_prompt(Some(args.system.clone()))
}

fn describe_error(e: &ResponderError) -> String {
    match e {
        ResponderError::Api { status, message } => format!("Request failed ({status}): {message}"),
        other => format!("Request failed: {other}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixel_probe=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = pixel_config::load_dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let args = Args::parse();

    let (base_url, token) = match (require_env(ENV_BASE_URL), require_env(ENV_AUTH_TOKEN)) {
        (Ok(base_url), Ok(token)) => (base_url, token),
        (Err(msg), _) | (_, Err(msg)) => {
            eprintln!("{msg}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let config = remote_config(&args, base_url, token);
    tracing::info!(url = %config.url(), model = %config.model, "Sending probe request");

    let http = match reqwest::Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {e}");
            return ExitCode::from(USAGE_ERROR);
        }
    };
    let responder = RemoteResponder::new(config, http);

    match responder.complete_raw(&[Message::user(args.prompt.clone())]).await {
        Ok(body) => {
            println!("{}", render_response(&body, args.raw));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", describe_error(&e));
            ExitCode::from(USAGE_ERROR)
        }
    }
}

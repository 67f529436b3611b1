//! Responder selection.
//!
//! The HTTP client is probed once at startup and handed to the factory,
//! so no process-wide "remote available" flag exists.

use std::time::Duration;

use pixel_common::ConfigError;
use tracing::{info, warn};

use crate::{ChatResponder, LocalResponder, RemoteConfig, RemoteResponder};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// What the runtime environment can do, detected once.
#[derive(Clone, Default)]
pub struct ClientCapabilities {
    http: Option<reqwest::Client>,
}

impl std::fmt::Debug for ClientCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCapabilities")
            .field("http", &self.http.is_some())
            .finish()
    }
}

impl ClientCapabilities {
    /// Try to build the shared HTTP client.
    pub fn detect() -> Self {
        match reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
        {
            Ok(client) => Self { http: Some(client) },
            Err(e) => {
                warn!("HTTP client unavailable, remote chat disabled: {e}");
                Self::none()
            }
        }
    }

    /// No remote capability at all.
    pub fn none() -> Self {
        Self { http: None }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: Some(client) }
    }

    pub fn has_http(&self) -> bool {
        self.http.is_some()
    }

    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.http.as_ref()
    }
}

/// Pick the remote responder when it is fully configured and usable,
/// otherwise the local one.
pub fn create_responder(
    remote: Result<RemoteConfig, ConfigError>,
    capabilities: &ClientCapabilities,
) -> Box<dyn ChatResponder> {
    let config = match remote {
        Ok(config) => config,
        Err(e) => {
            info!("using local responder: {e}");
            return Box::new(LocalResponder::new());
        }
    };

    match capabilities.http_client() {
        Some(http) => {
            info!(model = %config.model, url = %config.url(), "using remote responder");
            Box::new(RemoteResponder::new(config, http.clone()))
        }
        None => {
            info!("using local responder: no HTTP client");
            Box::new(LocalResponder::new())
        }
    }
}

//! Domain types and validators for holo configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_CONDUCTOR_URL: &str = "http://127.0.0.1:1111";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HAPP_STORE: &str = "happ-store";
pub const DEFAULT_HOSTING_APP: &str = "holo-hosting-app";
pub const DEFAULT_HOST_AGENT: &str = "host-agent";
pub const DEFAULT_INTERFACE: &str = "internal-interface";
pub const DEFAULT_DOWNLOAD_DIR: &str = "~/.holochain/dnas/";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.holo/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoloConfig {
    /// Conductor admin endpoint.
    pub conductor: ConductorConfig,
    /// hApp store instance id.
    pub happ_store: String,
    /// Holo Hosting App instance id.
    pub hosting_app: String,
    /// Agent that owns instances created by `admin init`.
    pub host_agent: String,
    /// Interface instances are bound to by `admin init`.
    pub interface: String,
    /// Where DNA artifacts are downloaded to. A leading `~` is the home directory.
    pub download_dir: String,
}

impl Default for HoloConfig {
    fn default() -> Self {
        Self {
            conductor: ConductorConfig::default(),
            happ_store: DEFAULT_HAPP_STORE.to_string(),
            hosting_app: DEFAULT_HOSTING_APP.to_string(),
            host_agent: DEFAULT_HOST_AGENT.to_string(),
            interface: DEFAULT_INTERFACE.to_string(),
            download_dir: DEFAULT_DOWNLOAD_DIR.to_string(),
        }
    }
}

impl HoloConfig {
    /// Apply command-line overrides on top of file values.
    ///
    /// `conductor_url` is `--conductor`, or `HOLO_CONDUCTOR_URL` when the flag
    /// is absent.
    #[must_use]
    pub fn with_overrides(mut self, conductor_url: Option<&str>) -> Self {
        if let Some(url) = conductor_url {
            self.conductor.url = url.to_string();
        }
        self
    }
}

/// Conductor connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductorConfig {
    /// JSON-RPC endpoint, e.g. `http://127.0.0.1:1111`.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ConductorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CONDUCTOR_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates the conductor connection settings.
///
/// # Errors
///
/// Returns an error if the URL scheme is not HTTP(S) or the timeout is zero.
pub fn validate_conductor(config: &ConductorConfig) -> Result<()> {
    if !(config.url.starts_with("http://") || config.url.starts_with("https://")) {
        return Err(ConfigError::InvalidConductorUrl(config.url.clone()).into());
    }
    if config.timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout.into());
    }
    Ok(())
}

/// Expand a leading `~` against `home`. Other paths are returned unchanged.
#[must_use]
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────

//! Application context — unified state passed to every command handler.
//!
//! The conductor client is opened here, once, before any command runs, and
//! every workflow borrows it from the context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{HoloConfig, expand_home};
use crate::infra::conductor::HttpConductorClient;
use crate::infra::fetcher::HttpArtifactFetcher;
use crate::output::{OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

impl OutputFlags {
    /// Terminal context for these flags.
    #[must_use]
    pub fn context(&self) -> OutputContext {
        // Progress lines would corrupt JSON on stdout.
        OutputContext::new(self.no_color, self.quiet || self.json)
    }
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Conductor URL override (`--conductor` / `HOLO_CONDUCTOR_URL`).
    pub conductor_url: Option<String>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Effective configuration (file values with CLI overrides applied).
    pub config: HoloConfig,
    /// Conductor JSON-RPC client.
    pub conductor: HttpConductorClient,
    /// DNA artifact downloader.
    pub fetcher: HttpArtifactFetcher,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and loaded config.
    ///
    /// # Errors
    ///
    /// Returns an error if the conductor settings are invalid or an HTTP
    /// client cannot be built.
    pub fn new(flags: &AppFlags, config: HoloConfig) -> Result<Self> {
        let config = config.with_overrides(flags.conductor_url.as_deref());

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let conductor = HttpConductorClient::new(&config.conductor)?;
        let fetcher = HttpArtifactFetcher::new(Duration::from_secs(config.conductor.timeout_secs))?;

        Ok(Self {
            output: flags.output.context(),
            mode,
            config,
            conductor,
            fetcher,
        })
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.output, self.mode == OutputMode::Json)
    }

    /// Progress reporter bound to this context's output.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Download directory: `--directory` when given, else the configured one.
    #[must_use]
    pub fn download_dir(&self, flag: Option<&str>) -> PathBuf {
        let raw = flag.unwrap_or(&self.config.download_dir);
        expand_home(raw, dirs::home_dir().as_deref())
    }
}

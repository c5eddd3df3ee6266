//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Renders command results in the selected output mode.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl<'a> Renderer<'a> {
    /// Pick the renderer for `--json` or human output.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, json: bool) -> Self {
        if json {
            Self::Json(JsonRenderer)
        } else {
            Self::Human(HumanRenderer::new(ctx))
        }
    }

    /// Render a raw conductor response.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_value(&self, value: &serde_json::Value) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => r.render_value(value),
            Self::Json(r) => r.render_value(value),
        }
    }

    /// Render the per-DNA responses of a lifecycle workflow.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_results(&self, done: &str, results: &[serde_json::Value]) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => r.render_results(done, results),
            Self::Json(r) => r.render_results(results),
        }
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(
        &self,
        config: &crate::domain::HoloConfig,
        path: &std::path::Path,
    ) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => r.render_config(config, path),
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// Render the configuration file location.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_path(&self, path: &std::path::Path) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => r.render_path(path),
            Self::Json(r) => r.render_path(path),
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => r.render_version(version),
            Self::Json(r) => r.render_version(version),
        }
    }
}

//! Human-readable terminal renderer.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde_json::Value;

use crate::domain::HoloConfig;
use crate::output::OutputContext;

/// Renders command results as human-readable terminal output.
///
/// Responses are always printed, even with `--quiet`; only the decoration
/// around them is suppressed.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Print a raw response as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_value(&self, value: &Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value).context("JSON serialization failed")?);
        Ok(())
    }

    /// Print a summary line followed by the responses.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_results(&self, done: &str, results: &[Value]) -> Result<()> {
        match results.len() {
            0 => self.ctx.info(&format!("No DNAs {done}")),
            1 => self.ctx.success(&format!("1 DNA {done}")),
            n => self.ctx.success(&format!("{n} DNAs {done}")),
        }
        println!("{}", serde_json::to_string_pretty(results).context("JSON serialization failed")?);
        Ok(())
    }

    /// Print the effective configuration.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the JSON renderer.
    pub fn render_config(&self, config: &HoloConfig, path: &Path) -> Result<()> {
        let styles = &self.ctx.styles;
        let rows = [
            ("File:", path.display().to_string()),
            ("Conductor:", config.conductor.url.clone()),
            ("Timeout:", format!("{}s", config.conductor.timeout_secs)),
            ("hApp store:", config.happ_store.clone()),
            ("Hosting app:", config.hosting_app.clone()),
            ("Host agent:", config.host_agent.clone()),
            ("Interface:", config.interface.clone()),
            ("Download dir:", config.download_dir.clone()),
        ];
        println!("  {}", "Configuration".style(styles.header));
        for (key, value) in rows {
            println!("  {:<14}{value}", key.style(styles.dim));
        }
        Ok(())
    }

    /// Print the configuration file path on its own line.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn render_path(&self, path: &Path) -> Result<()> {
        println!("{}", path.display());
        Ok(())
    }

    /// Print `holo <version>`.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        println!("holo {version}");
        Ok(())
    }
}

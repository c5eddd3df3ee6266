//! `holo config` — show the effective configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ConfigStore;
use crate::output::Renderer;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}

/// Run the config command.
///
/// `conductor_url` is the `--conductor` override, applied to `show` the
/// same way every conductor-facing command applies it.
///
/// # Errors
///
/// Returns an error if the configuration file exists but cannot be parsed.
pub fn run(
    renderer: &Renderer<'_>,
    store: &impl ConfigStore,
    cmd: ConfigCommand,
    conductor_url: Option<&str>,
) -> Result<ExitCode> {
    let path = store.path()?;
    match cmd {
        ConfigCommand::Show => {
            let config = store.load()?.with_overrides(conductor_url);
            renderer.render_config(&config, &path)?;
        }
        ConfigCommand::Path => renderer.render_path(&path)?,
    }
    Ok(ExitCode::SUCCESS)
}

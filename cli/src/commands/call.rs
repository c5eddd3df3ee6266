//! `holo call` — raw zome function call.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use holo_common::ConductorRequest;

use crate::app::AppContext;
use crate::application::ports::ConductorGateway;

/// Arguments for the call command.
#[derive(Args)]
pub struct CallArgs {
    /// Instance id
    pub instance: String,
    /// Zome name
    pub zome: String,
    /// Function name
    pub func: String,
    /// Function arguments as a JSON value
    #[arg(long, default_value = "{}")]
    pub args: String,
}

impl CallArgs {
    /// Build the zome call request.
    ///
    /// # Errors
    ///
    /// Returns an error if `--args` is not valid JSON.
    pub fn request(&self) -> Result<ConductorRequest> {
        let args = serde_json::from_str(&self.args)
            .with_context(|| format!("--args is not valid JSON: {}", self.args))?;
        Ok(ConductorRequest::zome(
            &self.instance,
            &self.zome,
            &self.func,
            args,
        ))
    }
}

/// Run `holo call`.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the call fails.
pub async fn run(app: &AppContext, args: CallArgs) -> Result<ExitCode> {
    let response = app.conductor.call(&args.request()?).await?;
    app.renderer().render_value(&response)?;
    Ok(ExitCode::SUCCESS)
}

//! `holo host` — host registration in the Holo Hosting App.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};
use holo_common::ConductorRequest;
use serde_json::json;

use crate::app::AppContext;
use crate::application::ports::ConductorGateway;

/// Arguments for `holo host`.
#[derive(Args)]
pub struct HostArgs {
    /// Holo Hosting App instance ID
    #[arg(short = 'i', long)]
    pub hha: Option<String>,

    #[command(subcommand)]
    pub command: HostCommand,
}

/// Host subcommands.
#[derive(Subcommand)]
pub enum HostCommand {
    /// Register as a host in the Holo Hosting App
    Register { kyc_proof: String },
    /// Check if this agent is registered as a host
    Validate,
}

impl HostCommand {
    #[must_use]
    pub fn request(&self, instance: &str) -> ConductorRequest {
        match self {
            Self::Register { kyc_proof } => ConductorRequest::zome(
                instance,
                "host",
                "register_as_host",
                json!({ "host_doc": { "kyc_proof": kyc_proof } }),
            ),
            Self::Validate => {
                ConductorRequest::zome(instance, "host", "is_registered_as_host", json!({}))
            }
        }
    }
}

/// Run `holo host`.
///
/// # Errors
///
/// Returns an error if the zome call fails.
pub async fn run(app: &AppContext, args: HostArgs) -> Result<ExitCode> {
    let instance = args.hha.as_deref().unwrap_or(&app.config.hosting_app);
    let response = app.conductor.call(&args.command.request(instance)).await?;
    app.renderer().render_value(&response)?;
    Ok(ExitCode::SUCCESS)
}

//! `holo provider` — provider registration and hApp listings.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};
use holo_common::ConductorRequest;
use serde_json::{Value, json};

use crate::app::AppContext;
use crate::application::ports::ConductorGateway;

const ZOME: &str = "provider";

/// Arguments for `holo provider`.
#[derive(Args)]
pub struct ProviderArgs {
    /// Holo Hosting App instance ID
    #[arg(short = 'i', long)]
    pub hha: Option<String>,

    #[command(subcommand)]
    pub command: ProviderCommand,
}

/// Provider subcommands.
#[derive(Subcommand)]
pub enum ProviderCommand {
    /// Register as provider in the Holo Hosting App
    Register { kyc_proof: String },
    /// Check if this agent is registered as a provider
    Validate,
    /// List my registered apps
    List,
    /// Register a hApp as hostable
    RegisterApp { happ_hash: String, domain_name: String },
}

impl ProviderCommand {
    #[must_use]
    pub fn request(&self, instance: &str) -> ConductorRequest {
        let (function, args): (&str, Value) = match self {
            Self::Register { kyc_proof } => (
                "register_as_provider",
                json!({ "provider_doc": { "kyc_proof": kyc_proof } }),
            ),
            Self::Validate => ("is_registered_as_provider", json!({})),
            Self::List => ("get_my_registered_app_list", json!({})),
            Self::RegisterApp {
                happ_hash,
                domain_name,
            } => (
                "register_app",
                json!({
                    "app_bundle": { "happ_hash": happ_hash },
                    "domain_name": { "dns_name": domain_name },
                }),
            ),
        };
        ConductorRequest::zome(instance, ZOME, function, args)
    }
}

/// Run `holo provider`.
///
/// # Errors
///
/// Returns an error if the zome call fails.
pub async fn run(app: &AppContext, args: ProviderArgs) -> Result<ExitCode> {
    let instance = args.hha.as_deref().unwrap_or(&app.config.hosting_app);
    let response = app.conductor.call(&args.command.request(instance)).await?;
    app.renderer().render_value(&response)?;
    Ok(ExitCode::SUCCESS)
}

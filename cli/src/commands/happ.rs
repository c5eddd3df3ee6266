//! `holo happ` — hApp store zome calls.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};
use holo_common::ConductorRequest;
use serde_json::json;

use crate::app::AppContext;
use crate::application::ports::ConductorGateway;

const ZOME: &str = "happs";

/// Arguments for `holo happ`.
#[derive(Args)]
pub struct HappArgs {
    /// hApp Store instance ID
    #[arg(short = 'i', long)]
    pub happ: Option<String>,

    #[command(subcommand)]
    pub command: HappCommand,
}

/// hApp store subcommands.
#[derive(Subcommand)]
pub enum HappCommand {
    /// Create a new hApp
    Create {
        title: String,
        dna_url: String,
        dna_hash: String,
        /// Description for new hApp
        #[arg(short, long, default_value = "")]
        description: String,
        /// Thumbnail URL for new hApp
        #[arg(long, default_value = "")]
        thumbnail: String,
        /// Homepage URL for new hApp
        #[arg(long, default_value = "")]
        homepage: String,
    },
    /// List all hApps
    List,
    /// Get hApp details
    Info { hash: String },
}

impl HappCommand {
    /// Zome call against the given hApp store instance.
    #[must_use]
    pub fn request(&self, instance: &str) -> ConductorRequest {
        match self {
            Self::Create {
                title,
                dna_url,
                dna_hash,
                description,
                thumbnail,
                homepage,
            } => ConductorRequest::zome(
                instance,
                ZOME,
                "create_app",
                json!({
                    "title": title,
                    "dnas": [{ "location": dna_url, "hash": dna_hash }],
                    "description": description,
                    "thumbnail_url": thumbnail,
                    "homepage_url": homepage,
                }),
            ),
            Self::List => ConductorRequest::zome(instance, ZOME, "get_all_apps", json!({})),
            Self::Info { hash } => {
                ConductorRequest::zome(instance, ZOME, "get_app", json!({ "app_hash": hash }))
            }
        }
    }
}

/// Run `holo happ`.
///
/// # Errors
///
/// Returns an error if the zome call fails.
pub async fn run(app: &AppContext, args: HappArgs) -> Result<ExitCode> {
    let instance = args.happ.as_deref().unwrap_or(&app.config.happ_store);
    let response = app.conductor.call(&args.command.request(instance)).await?;
    app.renderer().render_value(&response)?;
    Ok(ExitCode::SUCCESS)
}

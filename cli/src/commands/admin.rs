//! `holo admin` — conductor administration and hApp DNA lifecycle.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};
use holo_common::{AdminResource, ConductorRequest, ContentHash};

use crate::app::AppContext;
use crate::application::ports::ConductorGateway;
use crate::application::services::activate::{ActivateOptions, activate_bundle};
use crate::application::services::install::{InstallOptions, install_bundle};
use crate::application::services::uninstall::uninstall_bundle;

/// Admin subcommands.
#[derive(Subcommand)]
pub enum AdminCommand {
    /// Run an administrative endpoint admin/dna/<action>
    Dna {
        /// Endpoint action
        #[arg(default_value = "list")]
        action: String,
    },
    /// Run an administrative endpoint admin/agent/<action>
    Agent {
        /// Endpoint action
        #[arg(default_value = "list")]
        action: String,
    },
    /// Run an administrative endpoint admin/interface/<action>
    Interface {
        /// Endpoint action
        #[arg(default_value = "list")]
        action: String,
    },
    /// Run an administrative endpoint admin/instance/<action>
    Instance {
        /// Endpoint action
        #[arg(default_value = "list")]
        action: String,
    },
    /// Install DNAs for a specific hApp
    Install(InstallArgs),
    /// Uninstall DNAs for a specific hApp
    Uninstall(UninstallArgs),
    /// Create, bind and start instances for a hApp's DNAs
    Init(InitArgs),
}

/// Arguments for `admin install`.
#[derive(Args)]
pub struct InstallArgs {
    /// hApp bundle hash
    pub happ_hash: String,
    /// hApp Store instance ID
    #[arg(short = 'i', long)]
    pub happ: Option<String>,
    /// Download directory
    #[arg(short, long)]
    pub directory: Option<String>,
}

/// Arguments for `admin uninstall`.
#[derive(Args)]
pub struct UninstallArgs {
    /// hApp bundle hash
    pub happ_hash: String,
    /// hApp Store instance ID
    #[arg(short = 'i', long)]
    pub happ: Option<String>,
}

/// Arguments for `admin init`.
#[derive(Args)]
pub struct InitArgs {
    /// hApp bundle hash
    pub happ_hash: String,
    /// hApp Store instance ID
    #[arg(short = 'i', long)]
    pub happ: Option<String>,
    /// Host agent ID
    #[arg(long)]
    pub host: Option<String>,
    /// Interface ID
    #[arg(long)]
    pub interface: Option<String>,
}

/// Run `holo admin`.
///
/// # Errors
///
/// Returns an error if any conductor call or download fails.
pub async fn run(app: &AppContext, cmd: AdminCommand) -> Result<ExitCode> {
    let reporter = app.reporter();
    match cmd {
        AdminCommand::Dna { action } => endpoint(app, AdminResource::Dna, action).await?,
        AdminCommand::Agent { action } => endpoint(app, AdminResource::Agent, action).await?,
        AdminCommand::Interface { action } => {
            endpoint(app, AdminResource::Interface, action).await?;
        }
        AdminCommand::Instance { action } => {
            endpoint(app, AdminResource::Instance, action).await?;
        }
        AdminCommand::Install(args) => {
            let download_dir = app.download_dir(args.directory.as_deref());
            let opts = InstallOptions {
                registry: args.happ.as_deref().unwrap_or(&app.config.happ_store),
                download_dir: &download_dir,
            };
            let hash = ContentHash::from(args.happ_hash);
            let installed =
                install_bundle(&app.conductor, &app.fetcher, &reporter, &hash, &opts).await?;
            app.renderer().render_results("installed", &installed)?;
        }
        AdminCommand::Uninstall(args) => {
            let registry = args.happ.as_deref().unwrap_or(&app.config.happ_store);
            let hash = ContentHash::from(args.happ_hash);
            let uninstalled = uninstall_bundle(&app.conductor, &reporter, registry, &hash).await?;
            app.renderer().render_results("uninstalled", &uninstalled)?;
        }
        AdminCommand::Init(args) => {
            let opts = ActivateOptions {
                registry: args.happ.as_deref().unwrap_or(&app.config.happ_store),
                host_agent: args.host.as_deref().unwrap_or(&app.config.host_agent),
                interface: args.interface.as_deref().unwrap_or(&app.config.interface),
            };
            let hash = ContentHash::from(args.happ_hash);
            let initialized = activate_bundle(&app.conductor, &reporter, &hash, &opts).await?;
            app.renderer().render_results("initialized", &initialized)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Call a parameterless `admin/<resource>/<action>` endpoint and print the response.
async fn endpoint(app: &AppContext, resource: AdminResource, action: String) -> Result<()> {
    let request = ConductorRequest::Admin { resource, action };
    let response = app.conductor.call(&request).await?;
    app.renderer().render_value(&response)
}

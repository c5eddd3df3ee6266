//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::application::ports::ConfigStore;
use crate::commands;
use crate::infra::config::YamlConfigStore;
use crate::output::Renderer;

/// Administer a Holochain conductor and the hApps it hosts
#[derive(Parser)]
#[command(
    name = "holo",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all printing except for the final result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Conductor JSON-RPC endpoint
    #[arg(long, global = true, env = "HOLO_CONDUCTOR_URL")]
    pub conductor: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manually call a conductor's instance->zome->function(args)
    Call(commands::call::CallArgs),

    /// Administrative commands to conductor
    #[command(subcommand)]
    Admin(commands::admin::AdminCommand),

    /// hApp store controls
    Happ(commands::happ::HappArgs),

    /// Manage host details
    Host(commands::host::HostArgs),

    /// Provider controls and management
    Provider(commands::provider::ProviderArgs),

    /// Show configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            conductor,
            command,
            ..
        } = self;

        let store = YamlConfigStore;
        let output = OutputFlags {
            no_color,
            quiet,
            json,
        };
        let connect = || -> Result<AppContext> {
            let flags = AppFlags {
                output,
                conductor_url: conductor.clone(),
            };
            let app = AppContext::new(&flags, store.load()?)?;
            tracing::debug!(conductor = app.conductor.url(), "conductor client ready");
            Ok(app)
        };

        // Local commands render without opening a conductor client.
        let local = output.context();
        let renderer = Renderer::new(&local, json);

        match command {
            Command::Version => commands::version::run(&renderer),
            Command::Config(cmd) => {
                commands::config::run(&renderer, &store, cmd, conductor.as_deref())
            }
            Command::Call(args) => commands::call::run(&connect()?, args).await,
            Command::Admin(cmd) => commands::admin::run(&connect()?, cmd).await,
            Command::Happ(args) => commands::happ::run(&connect()?, args).await,
            Command::Host(args) => commands::host::run(&connect()?, args).await,
            Command::Provider(args) => commands::provider::run(&connect()?, args).await,
        }
    }
}

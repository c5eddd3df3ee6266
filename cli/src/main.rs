//! Holo CLI - administer a Holochain conductor and the hApps it hosts

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use holo_cli::cli::Cli;
use holo_cli::domain::WorkflowAborted;
use holo_cli::output::{OutputContext, json};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (json_mode, no_color) = (cli.json, cli.no_color);
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            report_failure(&e, json_mode, no_color);
            ExitCode::FAILURE
        }
    }
}

/// Route `tracing` output to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn report_failure(e: &anyhow::Error, json_mode: bool, no_color: bool) {
    let aborted = e.downcast_ref::<WorkflowAborted>();
    // WorkflowAborted already renders its source chain.
    let message = aborted.map_or_else(|| format!("{e:#}"), ToString::to_string);
    if json_mode {
        let rendered = match aborted {
            Some(a) => json::format_aborted(&message, &a.completed),
            None => json::format_error(&message, "COMMAND_FAILED"),
        };
        match rendered {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("Error: {message}"),
        }
        return;
    }

    OutputContext::new(no_color, false).error(&format!("Error: {message}"));
    if let Some(a) = aborted.filter(|a| !a.completed.is_empty()) {
        eprintln!("Completed before failure:");
        if let Ok(body) = serde_json::to_string_pretty(&a.completed) {
            eprintln!("{body}");
        }
    }
}
